//! Cleanup system: removes projectiles that expired, hit the ground, or
//! left the world.
//!
//! Runs during a freeze too. Frozen projectiles are pinned above ground so
//! they only leave through lifetime expiry, which is what produces stale
//! store entries for the release drain to skip.

use hecs::{Entity, World};

use stasis_core::components::{Lifetime, NetworkId, Projectile};
use stasis_core::constants::{GROUND_LEVEL, WORLD_RADIUS};
use stasis_core::events::AbilityEvent;
use stasis_core::types::Position;

/// Remove finished projectiles. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<AbilityEvent>) {
    despawn_buffer.clear();

    // Count down lifetimes; collect the ones that ran out.
    for (entity, (lifetime, _proj)) in world.query_mut::<(&mut Lifetime, &Projectile)>() {
        if lifetime.remaining_ticks == 0 {
            despawn_buffer.push(entity);
        } else {
            lifetime.remaining_ticks -= 1;
        }
    }

    // Ground impact and out-of-world.
    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if pos.z <= GROUND_LEVEL || pos.horizontal_range_sq() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities. An entity can be collected twice (expired
    // and impacted in the same tick); the second despawn is a no-op and the
    // missing NetworkId suppresses a duplicate event.
    for entity in despawn_buffer.drain(..) {
        if let Ok(net) = world.get::<&NetworkId>(entity) {
            events.push(AbilityEvent::ProjectileExpired { network_id: net.0 });
        }
        let _ = world.despawn(entity);
    }
}
