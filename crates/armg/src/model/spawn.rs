use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::assets::{CraneMaterials, CraneMeshes};
use crate::dimensions::CraneDimensions;
use crate::layout;

use super::types::{CraneModel, CranePart, CraneParts};

fn spawn_child(commands: &mut Commands, parent: Entity, bundle: impl Bundle) -> Entity {
    commands.spawn(bundle).set_parent(parent).id()
}

impl CraneModel {
    /// Spawn the full crane hierarchy and return the model that drives it.
    ///
    /// The crane starts with the trolley centred, the hoist fully raised and
    /// the spreader at zero yaw. Any dimensions are accepted; degenerate values
    /// are logged and still produce geometry.
    pub fn spawn(
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &CraneMaterials,
        dims: CraneDimensions,
    ) -> Self {
        let degenerate = dims.degenerate_fields();
        if !degenerate.is_empty() {
            warn!(
                "Crane dimensions have non-positive or non-finite {:?}; building degenerate geometry",
                degenerate
            );
        }

        let m = CraneMeshes::build(&dims, meshes);
        let mat = materials;
        let trolley_x = layout::clamp_trolley_position(&dims, 0.0);

        let root = commands
            .spawn((
                Name::new("ARMGCrane"),
                CranePart::Root,
                Transform::default(),
                Visibility::default(),
            ))
            .id();

        // --- Fixed structure ---
        let [left_leg, right_leg] = layout::leg_transforms(&dims);
        for (name, transform) in [("LeftLeg", left_leg), ("RightLeg", right_leg)] {
            spawn_child(
                commands,
                root,
                (
                    Name::new(name),
                    CranePart::Leg,
                    Mesh3d(m.leg.clone()),
                    MeshMaterial3d(mat.frame.clone()),
                    transform,
                    Visibility::default(),
                ),
            );
        }

        spawn_child(
            commands,
            root,
            (
                Name::new("LowerGirder"),
                CranePart::LowerGirder,
                Mesh3d(m.lower_girder.clone()),
                MeshMaterial3d(mat.frame.clone()),
                layout::lower_girder_transform(),
                Visibility::default(),
            ),
        );

        spawn_child(
            commands,
            root,
            (
                Name::new("Crossbeam"),
                CranePart::Crossbeam,
                Mesh3d(m.crossbeam.clone()),
                MeshMaterial3d(mat.frame.clone()),
                layout::crossbeam_transform(&dims),
                Visibility::default(),
            ),
        );

        // Walkway and rails only receive shadows.
        spawn_child(
            commands,
            root,
            (
                Name::new("Walkway"),
                CranePart::Walkway,
                Mesh3d(m.walkway.clone()),
                MeshMaterial3d(mat.walkway.clone()),
                layout::walkway_transform(&dims),
                Visibility::default(),
                NotShadowCaster,
            ),
        );

        let [front_rail, back_rail] = layout::rail_transforms(&dims);
        for (name, transform) in [("FrontRail", front_rail), ("BackRail", back_rail)] {
            spawn_child(
                commands,
                root,
                (
                    Name::new(name),
                    CranePart::Rail,
                    Mesh3d(m.rail.clone()),
                    MeshMaterial3d(mat.rail.clone()),
                    transform,
                    Visibility::default(),
                    NotShadowCaster,
                ),
            );
        }

        // --- Trolley ---
        let trolley = spawn_child(
            commands,
            root,
            (
                Name::new("Trolley"),
                CranePart::Trolley,
                layout::trolley_transform(&dims, trolley_x),
                Visibility::default(),
            ),
        );

        spawn_child(
            commands,
            trolley,
            (
                Name::new("TrolleyFrame"),
                CranePart::TrolleyFrame,
                Mesh3d(m.trolley_frame.clone()),
                MeshMaterial3d(mat.frame.clone()),
                Transform::default(),
                Visibility::default(),
            ),
        );

        let wheel_group = spawn_child(
            commands,
            trolley,
            (
                Name::new("Wheels"),
                CranePart::WheelGroup,
                Transform::default(),
                Visibility::default(),
            ),
        );
        for transform in layout::wheel_transforms(&dims) {
            spawn_child(
                commands,
                wheel_group,
                (
                    Name::new("Wheel"),
                    CranePart::Wheel,
                    Mesh3d(m.wheel.clone()),
                    MeshMaterial3d(mat.wheel.clone()),
                    transform,
                    Visibility::default(),
                ),
            );
        }

        let rest_length = layout::cable_length(0.0);
        let mut cable_entities = [Entity::PLACEHOLDER; 4];
        for (i, anchor) in layout::cable_anchors(&dims).into_iter().enumerate() {
            cable_entities[i] = spawn_child(
                commands,
                trolley,
                (
                    Name::new(format!("HoistCable{i}")),
                    CranePart::Cable(i as u8),
                    Mesh3d(m.cable.clone()),
                    MeshMaterial3d(mat.cable.clone()),
                    layout::cable_transform(anchor, rest_length),
                    Visibility::default(),
                ),
            );
        }

        // --- Hoist and spreader ---
        // Starts at depth 0 (y = 0), not 1.4 m down, so the rest-length cables meet it.
        let hoist = spawn_child(
            commands,
            trolley,
            (
                Name::new("Hoist"),
                CranePart::Hoist,
                Transform::from_translation(layout::hoist_translation(0.0)),
                Visibility::default(),
            ),
        );

        let spreader_group = spawn_child(
            commands,
            hoist,
            (
                Name::new("SpreaderGroup"),
                CranePart::SpreaderGroup,
                layout::spreader_transform(0.0),
                Visibility::default(),
            ),
        );

        let spreader = spawn_child(
            commands,
            spreader_group,
            (
                Name::new("Spreader"),
                CranePart::Spreader,
                Mesh3d(m.spreader.clone()),
                MeshMaterial3d(mat.spreader.clone()),
                Transform::default(),
                Visibility::default(),
            ),
        );

        info!(
            "Spawned ARMG crane {:?}: span {:.1}, crossbeam at {:.2}, max hoist depth {:.2}",
            root,
            dims.rail_span,
            dims.crossbeam_elevation(),
            dims.max_hoist_depth()
        );

        Self {
            dims,
            parts: CraneParts {
                root,
                trolley,
                hoist,
                spreader_group,
                spreader,
                cables: cable_entities,
            },
            trolley_x,
            hoist_depth: 0.0,
            spreader_yaw: 0.0,
            attached: None,
        }
    }
}
