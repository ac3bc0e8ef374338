use bevy::prelude::*;

use crate::layout;

use super::types::{CraneModel, Payload};

/// Set an entity's local translation, inserting a transform if it has none.
fn place(world: &mut World, id: Entity, translation: Vec3) {
    if let Some(mut t) = world.get_mut::<Transform>(id) {
        t.translation = translation;
    } else if world.entities().contains(id) {
        world
            .entity_mut(id)
            .insert(Transform::from_translation(translation));
    }
}

/// Parent `id` under `parent` if both still exist when the command runs.
///
/// Either side may have been despawned by a command queued earlier in the
/// same flush; `set_parent` would panic on that.
fn reparent(world: &mut World, id: Entity, parent: Entity) -> bool {
    let entities = world.entities();
    if !entities.contains(id) || !entities.contains(parent) {
        warn!("Cannot parent {id:?} under {parent:?}: entity no longer exists");
        return false;
    }
    world.entity_mut(id).set_parent(parent);
    true
}

fn seat_under_spreader(id: Entity, world: &mut World) {
    let height = match world.get::<Payload>(id) {
        Some(payload) => payload.height,
        None => {
            warn!("Payload {id:?} has no height; seating it directly under the spreader");
            0.0
        }
    };
    place(world, id, layout::payload_translation(height));
}

impl CraneModel {
    /// Hang `container` under the spreader with its top face against the
    /// spreader underside. `None` is a no-op, as is a container or spreader
    /// that no longer exists.
    ///
    /// The offset comes from the container's [`Payload`] height, read when the
    /// command is applied. A container without one is still attached, seated
    /// as if it had zero height.
    pub fn attach_container(&mut self, commands: &mut Commands, container: Option<Entity>) {
        let Some(container) = container else {
            return;
        };
        let spreader_group = self.parts.spreader_group;
        if commands.get_entity(spreader_group).is_none() {
            warn!(
                "Cannot attach {container:?}: spreader of crane {:?} no longer exists",
                self.parts.root
            );
            return;
        }
        let Some(mut entity) = commands.get_entity(container) else {
            warn!(
                "Cannot attach {container:?} to crane {:?}: entity does not exist",
                self.parts.root
            );
            return;
        };

        self.attached = Some(container);
        entity.queue(move |id: Entity, world: &mut World| {
            if reparent(world, id, spreader_group) {
                seat_under_spreader(id, world);
            }
        });
        debug!("Crane {:?} attached payload {container:?}", self.parts.root);
    }

    /// Release the attached payload and return it; `None` if nothing is
    /// attached.
    ///
    /// With `target_parent` the payload is re-parented there, otherwise it
    /// keeps its current parent. With `target_position` its local translation
    /// is set to that value, which must already be in the new parent's space.
    /// The local transform is never converted between frames.
    ///
    /// A `target_parent` that no longer exists leaves the payload attached and
    /// returns `None`.
    pub fn detach_container(
        &mut self,
        commands: &mut Commands,
        target_parent: Option<Entity>,
        target_position: Option<Vec3>,
    ) -> Option<Entity> {
        let held = self.attached?;
        if let Some(parent) = target_parent {
            if commands.get_entity(parent).is_none() {
                warn!(
                    "Crane {:?} keeps payload {held:?}: target parent {parent:?} does not exist",
                    self.parts.root
                );
                return None;
            }
        }
        let released = self.attached.take()?;

        match commands.get_entity(released) {
            Some(mut entity) => {
                entity.queue(move |id: Entity, world: &mut World| {
                    if let Some(parent) = target_parent {
                        reparent(world, id, parent);
                    }
                    if let Some(position) = target_position {
                        place(world, id, position);
                    }
                });
            }
            None => warn!("Released payload {released:?} no longer exists"),
        }

        debug!("Crane {:?} released payload {released:?}", self.parts.root);
        Some(released)
    }
}
