//! Entity spawn factories for projectiles.
//!
//! Builds the full component bundle for each projectile kind. Network ids
//! are allocated by the engine and passed in.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stasis_core::components::{Gravity, Lifetime, NetworkId, Projectile};
use stasis_core::constants::*;
use stasis_core::enums::ProjectileKind;
use stasis_core::types::{Position, Velocity};

/// Spawn a projectile entity with the full component bundle.
pub fn spawn_projectile(
    world: &mut World,
    network_id: NetworkId,
    kind: ProjectileKind,
    from: Position,
    aim: Velocity,
) -> Entity {
    world.spawn((
        Projectile { kind },
        network_id,
        from,
        aim,
        Gravity::default(),
        Lifetime {
            remaining_ticks: kind_lifetime_ticks(kind),
        },
    ))
}

/// Roll launch parameters for one volley shot: random kind, bearing, and
/// elevation, fired outward from the origin at that kind's muzzle speed.
pub fn roll_volley_shot(rng: &mut ChaCha8Rng) -> (ProjectileKind, Position, Velocity) {
    let kind = match rng.gen_range(0..4) {
        0 => ProjectileKind::Arrow,
        1 => ProjectileKind::Bolt,
        2 => ProjectileKind::Fireball,
        _ => ProjectileKind::Mortar,
    };

    // Bearing is measured from North (y-axis) clockwise to East (x-axis).
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let elevation: f64 = rng.gen_range(VOLLEY_MIN_ELEVATION..VOLLEY_MAX_ELEVATION);
    let speed = kind_speed(kind);

    let horizontal = speed * elevation.cos();
    let aim = Velocity::new(
        horizontal * bearing.sin(),
        horizontal * bearing.cos(),
        speed * elevation.sin(),
    );
    let from = Position::new(0.0, 0.0, VOLLEY_LAUNCH_HEIGHT);
    (kind, from, aim)
}

/// Muzzle speed for a projectile kind (units/s).
pub fn kind_speed(kind: ProjectileKind) -> f64 {
    match kind {
        ProjectileKind::Arrow => ARROW_SPEED,
        ProjectileKind::Bolt => BOLT_SPEED,
        ProjectileKind::Fireball => FIREBALL_SPEED,
        ProjectileKind::Mortar => MORTAR_SPEED,
    }
}

/// Despawn timer for a projectile kind (ticks).
pub fn kind_lifetime_ticks(kind: ProjectileKind) -> u32 {
    match kind {
        ProjectileKind::Arrow => ARROW_LIFETIME_TICKS,
        ProjectileKind::Bolt => BOLT_LIFETIME_TICKS,
        ProjectileKind::Fireball => FIREBALL_LIFETIME_TICKS,
        ProjectileKind::Mortar => MORTAR_LIFETIME_TICKS,
    }
}
