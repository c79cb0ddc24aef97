// Constants used throughout the scene module

// Tile rendering defaults (256x192 isometric tile art)
pub const DEFAULT_TILE_WIDTH: f32 = 256.0;
pub const DEFAULT_TILE_HEIGHT: f32 = 192.0;
pub const DEFAULT_TILEMAP_ROWS: u32 = 10;
pub const DEFAULT_TILEMAP_COLUMNS: u32 = 10;

// Vertical squash applied to the tile basis. 2/3 turns a 256x192 tile into a 2:1 diamond.
pub const DEFAULT_PROJECTION_RATIO: f32 = 2.0 / 3.0;

// Snap distance used when flooring hit-test results onto tile indices.
pub const TILE_INDEX_EPSILON: f32 = 1e-3;

// Orbit camera limits
pub const POLAR_EPSILON: f32 = 0.001;
pub const POLAR_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - POLAR_EPSILON;
pub const MIN_ORBIT_RADIUS: f32 = 0.0;
pub const MAX_ORBIT_RADIUS: f32 = 100.0;
