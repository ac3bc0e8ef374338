//! ECS-facing control surface: spawn requests, per-frame kinematic targets and
//! payload hand-over events, all forwarded to [`CraneModel`].

use bevy::prelude::*;

use crate::assets::{ensure_materials, CraneMaterials};
use crate::dimensions::CraneDimensions;
use crate::model::CraneModel;

// ---------------------------------------------------------------------------
// Components & events
// ---------------------------------------------------------------------------

/// Desired kinematic pose of a crane, written by the host each frame.
///
/// Lives on the crane root next to its [`CraneModel`]. Values are clamped when
/// applied; the component itself keeps whatever was requested.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct CraneControl {
    pub trolley_x: f32,
    pub hoist_depth: f32,
    pub spreader_yaw: f32,
}

/// Request to spawn a crane rig with the given dimensions at `transform`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SpawnCrane {
    pub dimensions: CraneDimensions,
    pub transform: Transform,
}

/// Sent once a requested crane rig exists.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraneSpawned {
    pub crane: Entity,
}

/// Hand `container` to the spreader of `crane`.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttachContainer {
    pub crane: Entity,
    pub container: Entity,
}

/// Release whatever `crane` holds, optionally onto `target_parent` at
/// `target_position` (in that parent's local space).
#[derive(Event, Debug, Clone, Copy)]
pub struct DetachContainer {
    pub crane: Entity,
    pub target_parent: Option<Entity>,
    pub target_position: Option<Vec3>,
}

/// Sent for every payload a crane lets go of.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerReleased {
    pub crane: Entity,
    pub container: Entity,
}

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Spawn a crane and keep its [`CraneModel`] plus a [`CraneControl`] on the
/// root entity. Returns the root.
pub fn spawn_crane_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &CraneMaterials,
    dims: CraneDimensions,
) -> Entity {
    let model = CraneModel::spawn(commands, meshes, materials, dims);
    let root = model.root();
    commands
        .entity(root)
        .insert((model, CraneControl::default()));
    root
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Spawn rigs for pending [`SpawnCrane`] requests.
pub fn spawn_requested_cranes(
    mut commands: Commands,
    mut requests: EventReader<SpawnCrane>,
    mut spawned: EventWriter<CraneSpawned>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Option<Res<CraneMaterials>>,
) {
    if requests.is_empty() {
        return;
    }

    let shared = ensure_materials(&mut commands, &mut materials, &existing);
    for request in requests.read() {
        let crane = spawn_crane_rig(&mut commands, &mut meshes, &shared, request.dimensions);
        commands.entity(crane).insert(request.transform);
        spawned.send(CraneSpawned { crane });
    }
}

/// Release payloads for [`DetachContainer`] requests. Runs before attach so a
/// crane can drop one container and take another in the same frame.
pub fn handle_detach_requests(
    mut commands: Commands,
    mut requests: EventReader<DetachContainer>,
    mut released: EventWriter<ContainerReleased>,
    mut cranes: Query<&mut CraneModel>,
) {
    for request in requests.read() {
        let Ok(mut crane) = cranes.get_mut(request.crane) else {
            warn!("Detach requested for {:?}, which is not a crane", request.crane);
            continue;
        };
        if let Some(container) = crane.detach_container(
            &mut commands,
            request.target_parent,
            request.target_position,
        ) {
            released.send(ContainerReleased {
                crane: request.crane,
                container,
            });
        }
    }
}

/// Attach payloads for [`AttachContainer`] requests. A crane that already
/// holds a payload ignores the request.
pub fn handle_attach_requests(
    mut commands: Commands,
    mut requests: EventReader<AttachContainer>,
    mut cranes: Query<&mut CraneModel>,
) {
    for request in requests.read() {
        let Ok(mut crane) = cranes.get_mut(request.crane) else {
            warn!("Attach requested for {:?}, which is not a crane", request.crane);
            continue;
        };
        if let Some(held) = crane.attached() {
            warn!(
                "Crane {:?} already holds {held:?}; ignoring attach of {:?}",
                request.crane, request.container
            );
            continue;
        }
        crane.attach_container(&mut commands, Some(request.container));
    }
}

/// Push changed [`CraneControl`] targets through the crane setters.
pub fn apply_crane_controls(
    mut cranes: Query<(&mut CraneModel, &CraneControl), Changed<CraneControl>>,
    mut transforms: Query<&mut Transform>,
) {
    for (mut crane, control) in &mut cranes {
        crane.set_trolley_position(control.trolley_x, &mut transforms);
        crane.set_hoist_depth(control.hoist_depth, &mut transforms);
        crane.set_spreader_yaw(control.spreader_yaw, &mut transforms);
    }
}
