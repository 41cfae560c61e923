//! Compile-time layout and animation constants. Runtime-tunable values live
//! in [`crate::settings::ViewerSettings`] and default to these.

/// Outer (corner) radius of one terrain hex tile, in world units.
pub const HEX_SIZE: f32 = 4.0;

/// The terrain field covers every cell within this hex distance of the origin.
pub const TERRAIN_RADIUS: u32 = 3;

/// Vertical thickness of a terrain tile prism.
pub const TILE_THICKNESS: f32 = 0.6;

/// Construct/deconstruct animation length, in rendered frames.
pub const CONSTRUCT_DURATION_FRAMES: u32 = 60;

/// Near-zero start/end keyframe for the construction scale ramp. Deliberately
/// nonzero: a true zero scale produces degenerate rendering artifacts.
pub const MIN_CONSTRUCT_SCALE: f32 = 0.001;

/// Fan angular speed, radians per second.
pub const FAN_SPEED: f32 = 1.2;

/// Vertical fly speed, world units per second.
pub const FLY_SPEED: f32 = 8.0;

/// Vertical fly clamp range.
pub const MIN_FLY_HEIGHT: f32 = 0.0;
pub const MAX_FLY_HEIGHT: f32 = 60.0;

// Windmill proportions.
pub const WINDMILL_TOWER_HEIGHT: f32 = 10.0;
pub const WINDMILL_TOWER_RADIUS: f32 = 1.6;
pub const WINDMILL_CAP_HEIGHT: f32 = 2.4;
pub const WINDMILL_BLADE_LENGTH: f32 = 4.5;
pub const WINDMILL_BLADE_WIDTH: f32 = 0.9;
