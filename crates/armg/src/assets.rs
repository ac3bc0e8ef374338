use bevy::prelude::*;

use crate::config::*;
use crate::dimensions::CraneDimensions;

// ---------------------------------------------------------------------------
// Shared materials (lazy-initialised)
// ---------------------------------------------------------------------------

/// Material handles shared by every crane, created once on first use.
#[derive(Resource, Clone)]
pub struct CraneMaterials {
    pub frame: Handle<StandardMaterial>,
    pub walkway: Handle<StandardMaterial>,
    pub wheel: Handle<StandardMaterial>,
    pub cable: Handle<StandardMaterial>,
    pub spreader: Handle<StandardMaterial>,
    pub rail: Handle<StandardMaterial>,
}

fn finish(color: [u8; 3], (metallic, roughness): (f32, f32)) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(color[0], color[1], color[2]),
        metallic,
        perceptual_roughness: roughness,
        ..default()
    }
}

impl CraneMaterials {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            frame: materials.add(finish(FRAME_COLOR, FRAME_FINISH)),
            walkway: materials.add(finish(WALKWAY_COLOR, WALKWAY_FINISH)),
            wheel: materials.add(finish(WALKWAY_COLOR, WHEEL_FINISH)),
            cable: materials.add(finish(CABLE_COLOR, CABLE_FINISH)),
            spreader: materials.add(finish(SPREADER_COLOR, SPREADER_FINISH)),
            rail: materials.add(finish(WALKWAY_COLOR, RAIL_FINISH)),
        }
    }
}

/// Return the cached [`CraneMaterials`], creating and inserting them on first need.
pub fn ensure_materials(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    existing: &Option<Res<CraneMaterials>>,
) -> CraneMaterials {
    if let Some(ref m) = existing {
        return (**m).clone();
    }
    let created = CraneMaterials::new(materials);
    commands.insert_resource(created.clone());
    created
}

// ---------------------------------------------------------------------------
// Per-crane meshes
// ---------------------------------------------------------------------------

/// Mesh handles sized for one set of [`CraneDimensions`].
///
/// The cable mesh is [`CABLE_MESH_LENGTH`] long; the hoist stretches it with
/// the cable transform's Y scale.
#[derive(Clone)]
pub struct CraneMeshes {
    pub leg: Handle<Mesh>,
    pub lower_girder: Handle<Mesh>,
    pub crossbeam: Handle<Mesh>,
    pub walkway: Handle<Mesh>,
    pub rail: Handle<Mesh>,
    pub trolley_frame: Handle<Mesh>,
    pub wheel: Handle<Mesh>,
    pub cable: Handle<Mesh>,
    pub spreader: Handle<Mesh>,
}

impl CraneMeshes {
    pub fn build(dims: &CraneDimensions, meshes: &mut Assets<Mesh>) -> Self {
        let beam = dims.beam_length();
        Self {
            leg: meshes.add(Cuboid::new(LEG_WIDTH, dims.crossbeam_elevation(), LEG_DEPTH)),
            lower_girder: meshes.add(Cuboid::new(dims.rail_span, GIRDER_SECTION, GIRDER_SECTION)),
            crossbeam: meshes.add(Cuboid::new(beam, CROSSBEAM_HEIGHT, CROSSBEAM_DEPTH)),
            walkway: meshes.add(Cuboid::new(beam, WALKWAY_THICKNESS, WALKWAY_DEPTH)),
            rail: meshes.add(Cuboid::new(beam, RAIL_HEIGHT, RAIL_WIDTH)),
            trolley_frame: meshes.add(Cuboid::new(
                dims.trolley_width,
                TROLLEY_FRAME_HEIGHT,
                TROLLEY_FRAME_DEPTH,
            )),
            wheel: meshes.add(
                Cylinder::new(WHEEL_RADIUS, dims.trolley_width)
                    .mesh()
                    .resolution(WHEEL_RESOLUTION),
            ),
            cable: meshes.add(
                Cylinder::new(CABLE_RADIUS, CABLE_MESH_LENGTH)
                    .mesh()
                    .resolution(CABLE_RESOLUTION),
            ),
            spreader: meshes.add(Cuboid::new(
                dims.trolley_width - SPREADER_WIDTH_INSET,
                SPREADER_HEIGHT,
                SPREADER_DEPTH,
            )),
        }
    }
}
