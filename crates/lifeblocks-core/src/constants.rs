//! Single source of truth for shared constants.
//! Render and driver settings default to these values; see `settings.rs`.

/// Half-width of the area the scene is drawn over (e.g. [-80, 80]).
pub const VIEW_SCALE: f32 = 80.0;

/// Maximum number of sphere-tracing iterations per ray.
pub const MAX_MARCH_STEPS: u32 = 10_000;

/// A march step at or below this distance counts as a surface hit.
pub const MARCH_ACCURACY: f32 = 1e-3;

/// Multiple of VIEW_SCALE beyond which a ray counts as a miss.
pub const MAX_MARCH_DISTANCE_SCALE: f32 = 9.0;

/// Marched distance beyond which a ray counts as a miss.
pub const MAX_MARCH_DISTANCE: f32 = VIEW_SCALE * MAX_MARCH_DISTANCE_SCALE;

/// Primary rays start this far in front of the ground plane (-z is toward the viewer).
pub const DEFAULT_RAY_ORIGIN_Z: f32 = -VIEW_SCALE;

/// Blocks are this many times the size of the gutter between them.
pub const GUTTER_RATIO: f32 = 3.0;

/// Corner and edge rounding radius as a fraction of the block half-extent.
pub const ROUNDING_RATIO: f32 = 0.5;

/// z coordinate of the ground plane.
pub const GROUND_PLANE_Z: f32 = 0.0;

/// Block bob amplitude as a fraction of the block half-extent.
/// Must stay at or below 0.5 or the repeated SDF stops being conservative.
pub const BOB_AMPLITUDE_RATIO: f32 = 0.5;

/// Converts the time uniform (ms) into bob phase (radians).
pub const BOB_TIME_SCALE: f32 = 0.001;

/// Central-difference step for the numerical SDF gradient.
pub const GRADIENT_EPSILON: f32 = 0.001;

/// Tolerance for classifying a hit point onto a flat block face.
pub const FACE_OFFSET: f32 = 0.01;

/// Default z depth of the pointer-driven light (between the camera and the blocks).
pub const LIGHT_DEPTH_Z: f32 = -70.0;

/// Default intensity of the pointer-driven light.
pub const LIGHT_INTENSITY: f32 = 1024.0;

/// Fraction of material color added as ambient light.
pub const AMBIENT_FACTOR: f32 = 0.03;

/// Fraction of material color kept by an occluded (shadowed) surface.
pub const SHADOW_FACTOR: f32 = 0.03;

/// Achromatic dielectric reflectance scale: f0 = 0.16 * reflectance^2.
pub const DIELECTRIC_F0_SCALE: f32 = 0.16;

/// Additive epsilon guarding the visibility term denominator.
pub const VISIBILITY_EPSILON: f32 = 1e-5;

/// Number of reflection bounces per primary ray.
pub const NUM_BOUNCES: u32 = 2;

/// Offset along the normal applied to reflected rays.
pub const REFLECTION_BIAS: f32 = 0.05;

/// Offset along the normal applied to shadow rays.
pub const SHADOW_BIAS: f32 = 0.06;

/// Display gamma; output is raised to 1/GAMMA.
pub const GAMMA: f32 = 2.1;

/// Saturation of the alive block hue wheel.
pub const ALIVE_SATURATION: f32 = 0.9;

/// Value (brightness) of the alive block hue wheel.
pub const ALIVE_VALUE: f32 = 0.9;

/// Hue offset of the "fade" color used while a block grows.
pub const FADE_HUE_DELTA: f32 = 0.05;

/// Blend coefficient at which a growing block switches from dead->fade to fade->alive.
pub const GROWING_SPLIT: f32 = 0.85;

/// Raw lifecycle value of a dead cell.
pub const LIFECYCLE_DEAD: u8 = 0;

/// Raw lifecycle value of a fully alive cell.
pub const LIFECYCLE_ALIVE: u8 = 7;

/// Raw lifecycle value of a growing cell.
pub const LIFECYCLE_GROWING: u8 = 1;

/// Cells packed into one 32-bit lane (8-bit stride).
pub const CELLS_PER_LANE: usize = 4;

/// 32-bit lanes per group (one uvec4 on the GPU side).
pub const LANES_PER_GROUP: usize = 4;

/// Cells per group.
pub const CELLS_PER_GROUP: usize = CELLS_PER_LANE * LANES_PER_GROUP;

/// Number of groups in the fixed-capacity cell buffer.
pub const CELL_GROUPS: usize = 1024;

/// Fixed cell buffer capacity (enough for 128x128 grids).
pub const CELL_CAPACITY: usize = CELL_GROUPS * CELLS_PER_GROUP;

/// Bit stride of one cell inside a lane.
pub const CELL_BITS: u32 = 8;

/// Time between automaton generation half-steps, in ms.
pub const TICK_INTERVAL_MS: f64 = 1000.0;

/// Initial color-cycle phase.
pub const COLOR_PHASE_START: f32 = 2.0;

/// Color-cycle phase advance per frame while cycling.
pub const COLOR_PHASE_STEP: f32 = 1.0 / 60.0;

/// How long an all-dead universe is shown before it is reset, in ms.
pub const DEAD_RESET_DELAY_MS: f64 = 5000.0;

/// Default minimum grid dimension (cells along the shorter viewport axis).
pub const MIN_GRID_DIMENSION: u32 = 8;

/// Smallest selectable minimum grid dimension.
pub const MIN_GRID_DIMENSION_FLOOR: u32 = 4;

/// Largest selectable minimum grid dimension.
pub const MIN_GRID_DIMENSION_CEIL: u32 = 64;

/// Step applied when growing or shrinking the grid.
pub const GRID_DIMENSION_STEP: u32 = 2;
