//! Simulation constants and tuning parameters.

/// Server tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Horizontal radius of the simulated area, centered on the origin.
/// Projectiles beyond this are despawned as out-of-world.
pub const WORLD_RADIUS: f64 = 512.0;

/// Ground plane altitude. Projectiles at or below this are treated as
/// having impacted and are despawned.
pub const GROUND_LEVEL: f64 = 0.0;

// --- Physics ---

/// Downward acceleration applied to gravity-enabled projectiles (units/s²).
pub const GRAVITY: f64 = 20.0;

// --- Projectile launch parameters ---

/// Arrow muzzle speed (units/s).
pub const ARROW_SPEED: f64 = 60.0;

/// Arrow lifetime before despawn (ticks).
pub const ARROW_LIFETIME_TICKS: u32 = 1200;

/// Crossbow bolt muzzle speed (units/s).
pub const BOLT_SPEED: f64 = 90.0;

/// Bolt lifetime before despawn (ticks).
pub const BOLT_LIFETIME_TICKS: u32 = 600;

/// Fireball muzzle speed (units/s).
pub const FIREBALL_SPEED: f64 = 40.0;

/// Fireball lifetime before despawn (ticks).
pub const FIREBALL_LIFETIME_TICKS: u32 = 400;

/// Mortar shell muzzle speed (units/s).
pub const MORTAR_SPEED: f64 = 35.0;

/// Mortar shell lifetime before despawn (ticks).
pub const MORTAR_LIFETIME_TICKS: u32 = 2400;

// --- Volley spawning ---

/// Launch height for volley projectiles (shooter eye level).
pub const VOLLEY_LAUNCH_HEIGHT: f64 = 1.6;

/// Minimum launch elevation angle for volleys (radians above horizon).
pub const VOLLEY_MIN_ELEVATION: f64 = 0.3;

/// Maximum launch elevation angle for volleys (radians above horizon).
pub const VOLLEY_MAX_ELEVATION: f64 = 1.2;
