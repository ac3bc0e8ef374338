//! Local placement of every crane part, as pure functions of the dimensions
//! and the kinematic inputs. The spawn and setter paths only copy these
//! transforms onto entities.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::config::*;
use crate::dimensions::CraneDimensions;

/// Clamp in the style of `max(min, min(max, value))`.
///
/// Unlike `f32::clamp` this never panics: inverted bounds (possible with
/// degenerate dimensions) resolve to `min`, and a NaN input resolves to `max`.
pub fn clamp_permissive(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

// ---------------------------------------------------------------------------
// Fixed structure (children of the crane root)
// ---------------------------------------------------------------------------

/// Left and right legs, staggered along Z.
pub fn leg_transforms(dims: &CraneDimensions) -> [Transform; 2] {
    let half = dims.half_span();
    let y = dims.crossbeam_elevation() / 2.0;
    [
        Transform::from_xyz(-half, y, -LEG_STAGGER),
        Transform::from_xyz(half, y, LEG_STAGGER),
    ]
}

pub fn lower_girder_transform() -> Transform {
    Transform::from_xyz(0.0, GIRDER_SECTION / 2.0, 0.0)
}

pub fn crossbeam_transform(dims: &CraneDimensions) -> Transform {
    Transform::from_xyz(dims.cantilever / 2.0, dims.crossbeam_elevation(), 0.0)
}

pub fn walkway_transform(dims: &CraneDimensions) -> Transform {
    Transform::from_xyz(
        dims.cantilever / 2.0,
        dims.crossbeam_elevation() + WALKWAY_RISE,
        0.0,
    )
}

/// Front (-Z) and back (+Z) rails.
pub fn rail_transforms(dims: &CraneDimensions) -> [Transform; 2] {
    let x = dims.cantilever / 2.0;
    [
        Transform::from_xyz(x, RAIL_ELEVATION, -RAIL_OFFSET),
        Transform::from_xyz(x, RAIL_ELEVATION, RAIL_OFFSET),
    ]
}

// ---------------------------------------------------------------------------
// Trolley sub-assembly
// ---------------------------------------------------------------------------

/// Trolley placement at lateral offset `x`, hanging under the crossbeam.
pub fn trolley_transform(dims: &CraneDimensions, x: f32) -> Transform {
    Transform::from_xyz(x, dims.crossbeam_elevation() - TROLLEY_DROP, 0.0)
}

/// Wheel placements relative to the trolley. Wheel cylinders are turned so
/// their axis runs along X.
pub fn wheel_transforms(dims: &CraneDimensions) -> [Transform; 4] {
    let x = dims.trolley_width / 2.0 - WHEEL_INSET;
    let rotation = Quat::from_rotation_z(FRAC_PI_2);
    [(-x, -WHEEL_OFFSET_Z), (-x, WHEEL_OFFSET_Z), (x, -WHEEL_OFFSET_Z), (x, WHEEL_OFFSET_Z)]
        .map(|(wx, wz)| Transform::from_xyz(wx, WHEEL_ELEVATION, wz).with_rotation(rotation))
}

/// Top anchor points of the four hoist cables on the trolley, `y = 0`.
pub fn cable_anchors(dims: &CraneDimensions) -> [Vec3; 4] {
    let x = dims.trolley_width / 2.0 - CABLE_INSET;
    [
        Vec3::new(-x, 0.0, -CABLE_OFFSET_Z),
        Vec3::new(x, 0.0, -CABLE_OFFSET_Z),
        Vec3::new(-x, 0.0, CABLE_OFFSET_Z),
        Vec3::new(x, 0.0, CABLE_OFFSET_Z),
    ]
}

/// Clamp a requested trolley offset to the rail span plus cantilever.
pub fn clamp_trolley_position(dims: &CraneDimensions, local_x: f32) -> f32 {
    let (min, max) = dims.trolley_limits();
    clamp_permissive(local_x, min, max)
}

// ---------------------------------------------------------------------------
// Hoist, cables and spreader
// ---------------------------------------------------------------------------

pub fn clamp_hoist_depth(dims: &CraneDimensions, depth: f32) -> f32 {
    clamp_permissive(depth, 0.0, dims.max_hoist_depth())
}

pub fn hoist_translation(depth: f32) -> Vec3 {
    Vec3::new(0.0, -depth, 0.0)
}

/// Visual cable length for an (already clamped) hoist depth.
pub fn cable_length(depth: f32) -> f32 {
    CABLE_REST_LENGTH.max(depth + CABLE_REST_LENGTH)
}

/// Cable transform hanging from `anchor`, stretched to `length`.
///
/// Fully determined by its inputs: scale and position are rebuilt from scratch
/// on every call.
pub fn cable_transform(anchor: Vec3, length: f32) -> Transform {
    Transform::from_xyz(anchor.x, -length / 2.0, anchor.z).with_scale(Vec3::new(
        1.0,
        length / CABLE_MESH_LENGTH,
        1.0,
    ))
}

/// Spreader group placement under the hoist for a given yaw.
pub fn spreader_transform(yaw: f32) -> Transform {
    Transform::from_xyz(0.0, -SPREADER_DROP, 0.0).with_rotation(Quat::from_rotation_y(yaw))
}

/// Payload offset that puts its top face just under the spreader.
pub fn payload_translation(height: f32) -> Vec3 {
    Vec3::new(0.0, -height / 2.0 - PAYLOAD_GAP, 0.0)
}
