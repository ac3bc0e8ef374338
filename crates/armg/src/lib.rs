//! Parametric 3D model of an automated rail-mounted gantry (ARMG) crane.
//!
//! [`CraneModel::spawn`] builds the crane as a bevy entity hierarchy: legs,
//! girder, crossbeam, walkway and rails under a root, and a trolley carrying
//! wheels, hoist cables, the hoist and the spreader. The model then exposes
//! the trolley offset, hoist depth and spreader yaw setters and a single
//! payload slot on the spreader.
//!
//! Hosts that prefer events over direct calls add [`CranePlugin`] and drive
//! cranes through [`control::CraneControl`] and the attach/detach events.

use bevy::prelude::*;

pub mod assets;
pub mod config;
pub mod control;
pub mod dimensions;
pub mod error;
pub mod layout;
pub mod model;

pub use assets::CraneMaterials;
pub use control::{
    AttachContainer, ContainerReleased, CraneControl, CraneSpawned, DetachContainer, SpawnCrane,
};
pub use dimensions::CraneDimensions;
pub use error::CraneConfigError;
pub use model::{CraneModel, CranePart, Payload, TransformAccess};

pub struct CranePlugin;

impl Plugin for CranePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnCrane>()
            .add_event::<CraneSpawned>()
            .add_event::<AttachContainer>()
            .add_event::<DetachContainer>()
            .add_event::<ContainerReleased>()
            .add_systems(
                Update,
                (
                    control::spawn_requested_cranes,
                    control::handle_detach_requests,
                    control::handle_attach_requests,
                    control::apply_crane_controls,
                )
                    .chain(),
            );
    }
}
