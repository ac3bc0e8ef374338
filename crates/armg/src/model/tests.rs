#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use bevy::ecs::world::CommandQueue;
    use bevy::pbr::NotShadowCaster;
    use bevy::prelude::*;

    use crate::assets::CraneMaterials;
    use crate::dimensions::CraneDimensions;
    use crate::model::{CraneModel, CranePart, Payload};

    fn with_commands<R>(world: &mut World, f: impl FnOnce(&mut Commands) -> R) -> R {
        let mut queue = CommandQueue::default();
        let result = {
            let mut commands = Commands::new(&mut queue, world);
            f(&mut commands)
        };
        queue.apply(world);
        result
    }

    fn spawn_crane(dims: CraneDimensions) -> (World, CraneModel) {
        let mut world = World::new();
        let mut meshes = Assets::<Mesh>::default();
        let mut material_assets = Assets::<StandardMaterial>::default();
        let materials = CraneMaterials::new(&mut material_assets);
        let crane = with_commands(&mut world, |commands| {
            CraneModel::spawn(commands, &mut meshes, &materials, dims)
        });
        (world, crane)
    }

    fn transform(world: &World, entity: Entity) -> Transform {
        *world
            .get::<Transform>(entity)
            .expect("entity should have a transform")
    }

    fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
        world.get::<Parent>(entity).map(|p| p.get())
    }

    fn children_of(world: &World, entity: Entity) -> Vec<Entity> {
        world
            .get::<Children>(entity)
            .map(|c| c.iter().copied().collect())
            .unwrap_or_default()
    }

    fn count_parts(world: &mut World, part: CranePart) -> usize {
        world
            .query::<&CranePart>()
            .iter(world)
            .filter(|p| **p == part)
            .count()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_root_owns_fixed_structure_and_trolley() {
        let (world, crane) = spawn_crane(CraneDimensions::default());
        let root = crane.root();

        assert_eq!(
            world.get::<Name>(root).map(|n| n.as_str()),
            Some("ARMGCrane")
        );
        assert!(parent_of(&world, root).is_none());

        let mut parts: Vec<CranePart> = children_of(&world, root)
            .into_iter()
            .map(|e| *world.get::<CranePart>(e).expect("tagged part"))
            .collect();
        parts.sort_by_key(|p| format!("{p:?}"));
        assert_eq!(
            parts,
            vec![
                CranePart::Crossbeam,
                CranePart::Leg,
                CranePart::Leg,
                CranePart::LowerGirder,
                CranePart::Rail,
                CranePart::Rail,
                CranePart::Trolley,
                CranePart::Walkway,
            ]
        );
    }

    #[test]
    fn test_trolley_owns_frame_wheels_cables_and_hoist() {
        let (mut world, crane) = spawn_crane(CraneDimensions::default());
        let parts = *crane.parts();

        let trolley_children = children_of(&world, parts.trolley);
        assert_eq!(trolley_children.len(), 7);
        for cable in parts.cables {
            assert_eq!(parent_of(&world, cable), Some(parts.trolley));
        }
        assert_eq!(parent_of(&world, parts.hoist), Some(parts.trolley));
        assert_eq!(parent_of(&world, parts.spreader_group), Some(parts.hoist));
        assert_eq!(parent_of(&world, parts.spreader), Some(parts.spreader_group));

        assert_eq!(count_parts(&mut world, CranePart::Wheel), 4);
        assert_eq!(count_parts(&mut world, CranePart::WheelGroup), 1);
        assert_eq!(count_parts(&mut world, CranePart::TrolleyFrame), 1);
    }

    #[test]
    fn test_walkway_and_rails_do_not_cast_shadows() {
        let (mut world, _crane) = spawn_crane(CraneDimensions::default());
        let mut query = world.query::<(&CranePart, Has<NotShadowCaster>)>();
        for (part, no_shadow) in query.iter(&world) {
            let expected = matches!(part, CranePart::Walkway | CranePart::Rail);
            assert_eq!(no_shadow, expected, "{part:?}");
        }
    }

    #[test]
    fn test_initial_pose() {
        let (world, crane) = spawn_crane(CraneDimensions::default());
        let parts = crane.parts();

        let trolley = transform(&world, parts.trolley);
        assert!(approx(trolley.translation.x, 0.0));
        assert!(approx(trolley.translation.y, 21.6));

        assert!(approx(transform(&world, parts.hoist).translation.y, 0.0));
        assert!(approx(transform(&world, parts.spreader_group).translation.y, -1.5));
        for cable in parts.cables {
            let t = transform(&world, cable);
            assert!(approx(t.scale.y, 1.4 / 1.5));
            assert!(approx(t.translation.y, -0.7));
        }
        assert_eq!(crane.attached(), None);
        assert!(approx(crane.cable_length(), 1.4));
    }

    #[test]
    fn test_degenerate_dimensions_build_and_clamp_without_panicking() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions {
            rail_span: -10.0,
            hoist_height: -8.0,
            cantilever: 0.0,
            trolley_width: 0.0,
        });
        assert_eq!(count_parts(&mut world, CranePart::Cable(3)), 1);

        crane.set_trolley_position(100.0, &mut world);
        crane.set_hoist_depth(100.0, &mut world);
        assert!(crane.trolley_position().is_finite());
        assert!(crane.hoist_depth().is_finite());
    }

    // -----------------------------------------------------------------------
    // Kinematics
    // -----------------------------------------------------------------------

    #[test]
    fn test_trolley_clamps_to_span_plus_cantilever() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let trolley = crane.parts().trolley;

        crane.set_trolley_position(100.0, &mut world);
        assert!(approx(crane.trolley_position(), 27.5));
        assert!(approx(transform(&world, trolley).translation.x, 27.5));
        // Height is untouched
        assert!(approx(transform(&world, trolley).translation.y, 21.6));

        crane.set_trolley_position(-100.0, &mut world);
        assert!(approx(transform(&world, trolley).translation.x, -20.0));

        for x in [-20.0_f32, -3.5, 0.0, 12.25, 27.5] {
            crane.set_trolley_position(x, &mut world);
            assert!(approx(transform(&world, trolley).translation.x, x));
        }
    }

    #[test]
    fn test_trolley_setter_is_idempotent() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let trolley = crane.parts().trolley;
        crane.set_trolley_position(8.0, &mut world);
        let first = transform(&world, trolley);
        crane.set_trolley_position(8.0, &mut world);
        assert_eq!(transform(&world, trolley), first);
    }

    #[test]
    fn test_hoist_depth_clamps_and_restretches_cables() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let parts = *crane.parts();

        let cases = [
            (-5.0_f32, 0.0_f32),
            (0.0, 0.0),
            (3.3, 3.3),
            (21.7, 21.7),
            (40.0, 21.7),
        ];
        for (requested, clamped) in cases {
            crane.set_hoist_depth(requested, &mut world);
            assert!(approx(crane.hoist_depth(), clamped), "requested {requested}");
            assert!(approx(transform(&world, parts.hoist).translation.y, -clamped));

            let length = (clamped + 1.4).max(1.4);
            for cable in parts.cables {
                let t = transform(&world, cable);
                assert!(approx(t.scale.y, length / 1.5), "requested {requested}");
                assert!(approx(t.translation.y, -length / 2.0), "requested {requested}");
            }
        }
    }

    #[test]
    fn test_cable_transforms_do_not_accumulate() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let cable = crane.parts().cables[2];

        crane.set_hoist_depth(2.0, &mut world);
        let direct = transform(&world, cable);

        crane.set_hoist_depth(15.0, &mut world);
        crane.set_hoist_depth(7.0, &mut world);
        crane.set_hoist_depth(2.0, &mut world);
        assert_eq!(transform(&world, cable), direct);
    }

    #[test]
    fn test_cables_keep_their_anchor_columns() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        crane.set_hoist_depth(9.0, &mut world);
        let mut columns: Vec<(i32, i32)> = crane
            .parts()
            .cables
            .iter()
            .map(|&c| {
                let t = transform(&world, c).translation;
                ((t.x * 10.0).round() as i32, (t.z * 10.0).round() as i32)
            })
            .collect();
        columns.sort();
        assert_eq!(columns, vec![(-22, -11), (-22, 11), (22, -11), (22, 11)]);
    }

    #[test]
    fn test_spreader_yaw_returns_exactly_to_zero() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let group = crane.parts().spreader_group;

        crane.set_spreader_yaw(FRAC_PI_2, &mut world);
        let turned = transform(&world, group).rotation * Vec3::X;
        assert!(approx(turned.z, -1.0), "got {turned:?}");

        crane.set_spreader_yaw(0.0, &mut world);
        assert_eq!(crane.spreader_yaw(), 0.0);
        assert_eq!(transform(&world, group).rotation, Quat::IDENTITY);
        // Drop is unaffected by yaw
        assert!(approx(transform(&world, group).translation.y, -1.5));
    }

    #[test]
    fn test_spreader_yaw_is_not_wrapped() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        crane.set_spreader_yaw(7.0, &mut world);
        assert!(approx(crane.spreader_yaw(), 7.0));
    }

    #[test]
    fn test_spreader_bottom_offset_follows_depth() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        assert!(approx(crane.spreader_bottom_offset(), 1.75));
        crane.set_hoist_depth(10.0, &mut world);
        assert!(approx(crane.spreader_bottom_offset(), 11.75));
    }

    // -----------------------------------------------------------------------
    // Payload
    // -----------------------------------------------------------------------

    #[test]
    fn test_attach_none_is_noop() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        with_commands(&mut world, |commands| crane.attach_container(commands, None));
        assert_eq!(crane.attached(), None);
    }

    #[test]
    fn test_attach_seats_payload_under_spreader() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::from_xyz(5.0, 1.3, -2.0)))
            .id();

        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });

        assert_eq!(crane.attached(), Some(container));
        assert_eq!(
            parent_of(&world, container),
            Some(crane.parts().spreader_group)
        );
        let t = transform(&world, container);
        assert!(approx(t.translation.x, 0.0));
        assert!(approx(t.translation.y, -1.55));
        assert!(approx(t.translation.z, 0.0));
    }

    #[test]
    fn test_attach_without_height_uses_gap_only() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let container = world.spawn(Transform::from_xyz(1.0, 1.0, 1.0)).id();

        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });

        assert_eq!(crane.attached(), Some(container));
        assert!(approx(transform(&world, container).translation.y, -0.25));
    }

    #[test]
    fn test_attach_missing_entity_is_noop() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let gone = world.spawn(Payload { height: 2.6 }).id();
        assert!(world.despawn(gone));

        with_commands(&mut world, |commands| crane.attach_container(commands, Some(gone)));
        assert_eq!(crane.attached(), None);
    }

    #[test]
    fn test_detach_without_attachment_returns_none() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let released =
            with_commands(&mut world, |commands| crane.detach_container(commands, None, None));
        assert_eq!(released, None);
    }

    #[test]
    fn test_attach_then_detach_returns_same_payload_in_place() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::default()))
            .id();

        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });
        let seated = transform(&world, container);

        let released =
            with_commands(&mut world, |commands| crane.detach_container(commands, None, None));

        assert_eq!(released, Some(container));
        assert_eq!(crane.attached(), None);
        assert_eq!(transform(&world, container), seated);
        assert_eq!(
            parent_of(&world, container),
            Some(crane.parts().spreader_group)
        );
    }

    #[test]
    fn test_detach_to_target_parent_and_position() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let stack = world.spawn(Transform::from_xyz(30.0, 0.0, 12.0)).id();
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::default()))
            .id();

        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });
        let target = Vec3::new(0.0, 1.3, 0.0);
        let released = with_commands(&mut world, |commands| {
            crane.detach_container(commands, Some(stack), Some(target))
        });

        assert_eq!(released, Some(container));
        assert_eq!(parent_of(&world, container), Some(stack));
        assert!(!children_of(&world, crane.parts().spreader_group).contains(&container));
        assert_eq!(transform(&world, container).translation, target);
    }

    #[test]
    fn test_attach_with_missing_spreader_is_noop() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::from_xyz(4.0, 1.3, 0.0)))
            .id();
        assert!(world.despawn(crane.parts().spreader_group));

        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });

        assert_eq!(crane.attached(), None);
        assert_eq!(parent_of(&world, container), None);
        assert_eq!(transform(&world, container).translation, Vec3::new(4.0, 1.3, 0.0));
    }

    #[test]
    fn test_detach_to_despawned_parent_keeps_payload_attached() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let stack = world.spawn(Transform::from_xyz(30.0, 0.0, 12.0)).id();
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::default()))
            .id();
        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });
        let seated = transform(&world, container);
        assert!(world.despawn(stack));

        let released = with_commands(&mut world, |commands| {
            crane.detach_container(commands, Some(stack), Some(Vec3::new(0.0, 1.3, 0.0)))
        });

        assert_eq!(released, None);
        assert_eq!(crane.attached(), Some(container));
        assert_eq!(
            parent_of(&world, container),
            Some(crane.parts().spreader_group)
        );
        assert_eq!(transform(&world, container), seated);
    }

    #[test]
    fn test_detach_to_parent_despawned_in_same_flush_does_not_panic() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let stack = world.spawn(Transform::from_xyz(30.0, 0.0, 12.0)).id();
        let container = world
            .spawn((Payload { height: 2.6 }, Transform::default()))
            .id();
        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });

        // The parent still exists when detach runs but is gone by the time
        // the reparent command is applied.
        let target = Vec3::new(0.0, 1.3, 0.0);
        let released = with_commands(&mut world, |commands| {
            commands.entity(stack).despawn();
            crane.detach_container(commands, Some(stack), Some(target))
        });

        assert_eq!(released, Some(container));
        assert_eq!(crane.attached(), None);
        assert!(!world.entities().contains(stack));
        assert_eq!(
            parent_of(&world, container),
            Some(crane.parts().spreader_group)
        );
        assert_eq!(transform(&world, container).translation, target);
    }

    #[test]
    fn test_payload_follows_trolley_through_hierarchy() {
        let (mut world, mut crane) = spawn_crane(CraneDimensions::default());
        let container = world.spawn((Payload { height: 2.6 }, Transform::default())).id();
        with_commands(&mut world, |commands| {
            crane.attach_container(commands, Some(container))
        });

        // Walk up from the payload to the root.
        let mut chain = vec![container];
        while let Some(parent) = parent_of(&world, *chain.last().expect("non-empty")) {
            chain.push(parent);
        }
        let parts = crane.parts();
        assert_eq!(
            chain[1..],
            [parts.spreader_group, parts.hoist, parts.trolley, parts.root]
        );
    }
}
