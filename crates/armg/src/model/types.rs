use bevy::prelude::*;

use crate::dimensions::CraneDimensions;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Tags every entity spawned for a crane with the part it represents.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CranePart {
    Root,
    Leg,
    LowerGirder,
    Crossbeam,
    Walkway,
    Rail,
    Trolley,
    TrolleyFrame,
    WheelGroup,
    Wheel,
    /// One of the four hoist cables, `0..4`.
    Cable(u8),
    Hoist,
    SpreaderGroup,
    Spreader,
}

/// Height dimension a payload (typically a shipping container) exposes so the
/// spreader can seat it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Payload {
    pub height: f32,
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Entities of the parts the crane moves after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraneParts {
    pub root: Entity,
    pub trolley: Entity,
    pub hoist: Entity,
    pub spreader_group: Entity,
    pub spreader: Entity,
    pub cables: [Entity; 4],
}

/// A spawned crane: its dimensions, the entities of its moving parts and the
/// current kinematic state.
///
/// Trolley offset, hoist depth and spreader yaw are independent axes; each
/// setter derives its transforms from the clamped input alone.
#[derive(Component, Debug, Clone)]
pub struct CraneModel {
    pub(crate) dims: CraneDimensions,
    pub(crate) parts: CraneParts,
    pub(crate) trolley_x: f32,
    pub(crate) hoist_depth: f32,
    pub(crate) spreader_yaw: f32,
    pub(crate) attached: Option<Entity>,
}

impl CraneModel {
    pub fn dimensions(&self) -> &CraneDimensions {
        &self.dims
    }

    pub fn parts(&self) -> &CraneParts {
        &self.parts
    }

    /// Root entity to place in (or despawn from) the host scene.
    pub fn root(&self) -> Entity {
        self.parts.root
    }

    /// Current (clamped) trolley offset along X.
    pub fn trolley_position(&self) -> f32 {
        self.trolley_x
    }

    /// Current (clamped) hoist depth below the trolley.
    pub fn hoist_depth(&self) -> f32 {
        self.hoist_depth
    }

    pub fn spreader_yaw(&self) -> f32 {
        self.spreader_yaw
    }

    /// The payload currently held by the spreader, if any.
    pub fn attached(&self) -> Option<Entity> {
        self.attached
    }

    pub fn cable_length(&self) -> f32 {
        crate::layout::cable_length(self.hoist_depth)
    }

    /// Distance from the trolley origin down to the spreader underside at the
    /// current hoist depth.
    pub fn spreader_bottom_offset(&self) -> f32 {
        self.hoist_depth + self.dims.spreader_bottom_offset()
    }
}
