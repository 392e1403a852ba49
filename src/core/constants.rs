// Frame and timer cadence
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS, one physics tick per frame
pub const MAX_CATCH_UP_TICKS: u32 = 5;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;

// Obstacle placement and pruning (world pixels)
pub const MIN_GATE_HEIGHT: f64 = 50.0;
pub const PRUNE_MARGIN: f64 = 100.0;

// Symmetric inward hitbox padding applied to both character and obstacle
pub const COLLISION_PADDING: f64 = 6.0;

// Cosmetic tilt (degrees)
pub const ASCENT_TILT: f64 = -25.0;
pub const TILT_PER_VELOCITY: f64 = 4.0;
pub const MAX_TILT: f64 = 90.0;

// Countdown runs get a small upward bump so the character doesn't drop instantly
pub const COUNTDOWN_IMPULSE_FACTOR: f64 = 0.6;

// Terminal cell size in world pixels
pub const CELL_WIDTH_PX: f64 = 10.0;
pub const CELL_HEIGHT_PX: f64 = 20.0;

// Red flash after a crash
pub const FLASH_MS: u64 = 100;

// Persistence
pub const SCORES_FILE: &str = "scores.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "clumsy.log";
