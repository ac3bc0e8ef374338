use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;

use crate::layout;

use super::types::CraneModel;

/// Mutable access to entity transforms.
///
/// Implemented for [`World`] and for `Query<&mut Transform, F>`, so the crane
/// setters run unchanged from exclusive code, tests and regular systems.
pub trait TransformAccess {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform>>;
}

impl TransformAccess for World {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform>> {
        self.get_mut::<Transform>(entity)
    }
}

impl<F: QueryFilter> TransformAccess for Query<'_, '_, &mut Transform, F> {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform>> {
        self.get_mut(entity).ok()
    }
}

impl CraneModel {
    /// Move the trolley (and everything hanging from it) to `local_x`,
    /// clamped to `[-half_span, half_span + cantilever]`.
    pub fn set_trolley_position(&mut self, local_x: f32, transforms: &mut impl TransformAccess) {
        self.trolley_x = layout::clamp_trolley_position(&self.dims, local_x);
        let Some(mut t) = transforms.transform_mut(self.parts.trolley) else {
            return;
        };
        t.translation.x = self.trolley_x;
    }

    /// Lower the hoist to `depth`, clamped to `[0, max_hoist_depth]`, and
    /// restretch every cable so it reaches from the trolley to the hoist.
    pub fn set_hoist_depth(&mut self, depth: f32, transforms: &mut impl TransformAccess) {
        self.hoist_depth = layout::clamp_hoist_depth(&self.dims, depth);
        if let Some(mut t) = transforms.transform_mut(self.parts.hoist) {
            t.translation = layout::hoist_translation(self.hoist_depth);
        }

        let length = layout::cable_length(self.hoist_depth);
        let anchors = layout::cable_anchors(&self.dims);
        for (&cable, anchor) in self.parts.cables.iter().zip(anchors) {
            if let Some(mut t) = transforms.transform_mut(cable) {
                *t = layout::cable_transform(anchor, length);
            }
        }
    }

    /// Rotate the spreader about the vertical axis. Not clamped or wrapped.
    pub fn set_spreader_yaw(&mut self, radians: f32, transforms: &mut impl TransformAccess) {
        self.spreader_yaw = radians;
        let Some(mut t) = transforms.transform_mut(self.parts.spreader_group) else {
            return;
        };
        t.rotation = Quat::from_rotation_y(radians);
    }
}
