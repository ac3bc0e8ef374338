pub const DEFAULT_RAIL_SPAN: f32 = 40.0;
pub const DEFAULT_HOIST_HEIGHT: f32 = 18.2;
pub const DEFAULT_CANTILEVER: f32 = 7.5;
pub const DEFAULT_TROLLEY_WIDTH: f32 = 6.0;

/// Extra headroom above the rated hoisting height.
pub const LEG_CLEARANCE: f32 = 4.0;

/// Gap kept between the fully lowered hoist and the crossbeam elevation.
pub const HOIST_SAFETY_MARGIN: f32 = 0.5;

/// Shortest visual cable length, reached with the hoist fully raised.
pub const CABLE_REST_LENGTH: f32 = 1.4;

/// Native length of the cable cylinder mesh. Cables are stretched relative to it.
pub const CABLE_MESH_LENGTH: f32 = 1.5;
pub const CABLE_RADIUS: f32 = 0.08;
pub const CABLE_RESOLUTION: u32 = 12;

/// Gap between the spreader underside and the top face of an attached payload.
pub const PAYLOAD_GAP: f32 = 0.25;

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

pub const LEG_WIDTH: f32 = 1.6;
pub const LEG_DEPTH: f32 = 2.4;
/// Longitudinal (Z) stagger of the legs; the left leg sits at `-LEG_STAGGER`.
pub const LEG_STAGGER: f32 = 1.5;

pub const GIRDER_SECTION: f32 = 1.2;

pub const CROSSBEAM_HEIGHT: f32 = 1.2;
pub const CROSSBEAM_DEPTH: f32 = 2.2;

pub const WALKWAY_THICKNESS: f32 = 0.2;
pub const WALKWAY_DEPTH: f32 = 3.2;
/// Walkway height above the crossbeam centre line.
pub const WALKWAY_RISE: f32 = 0.7;

pub const RAIL_HEIGHT: f32 = 0.25;
pub const RAIL_WIDTH: f32 = 0.6;
pub const RAIL_ELEVATION: f32 = 0.12;
/// Rails run at `z = ±RAIL_OFFSET`.
pub const RAIL_OFFSET: f32 = 4.0;

// ---------------------------------------------------------------------------
// Trolley / hoist / spreader
// ---------------------------------------------------------------------------

/// Trolley hangs this far below the crossbeam centre line.
pub const TROLLEY_DROP: f32 = 0.6;
pub const TROLLEY_FRAME_HEIGHT: f32 = 1.2;
pub const TROLLEY_FRAME_DEPTH: f32 = 3.6;

pub const WHEEL_RADIUS: f32 = 0.5;
pub const WHEEL_RESOLUTION: u32 = 16;
pub const WHEEL_INSET: f32 = 0.6;
pub const WHEEL_ELEVATION: f32 = 0.6;
pub const WHEEL_OFFSET_Z: f32 = 1.6;

pub const CABLE_INSET: f32 = 0.8;
pub const CABLE_OFFSET_Z: f32 = 1.1;

pub const SPREADER_WIDTH_INSET: f32 = 1.2;
pub const SPREADER_HEIGHT: f32 = 0.5;
pub const SPREADER_DEPTH: f32 = 2.8;
/// Spreader group hangs this far below the hoist origin.
pub const SPREADER_DROP: f32 = 1.5;

// ---------------------------------------------------------------------------
// Materials (sRGB bytes, metallic, perceptual roughness)
// ---------------------------------------------------------------------------

pub const FRAME_COLOR: [u8; 3] = [0xff, 0x6a, 0x00];
pub const WALKWAY_COLOR: [u8; 3] = [0x4a, 0x53, 0x63];
pub const CABLE_COLOR: [u8; 3] = [0x22, 0x28, 0x33];
pub const SPREADER_COLOR: [u8; 3] = [0xe8, 0xaa, 0x14];

pub const FRAME_FINISH: (f32, f32) = (0.35, 0.6);
pub const WALKWAY_FINISH: (f32, f32) = (0.2, 0.8);
pub const WHEEL_FINISH: (f32, f32) = (0.3, 0.4);
pub const CABLE_FINISH: (f32, f32) = (0.6, 0.2);
pub const SPREADER_FINISH: (f32, f32) = (0.4, 0.5);
pub const RAIL_FINISH: (f32, f32) = (0.2, 0.7);
