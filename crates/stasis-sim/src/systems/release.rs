//! Release drain: sets every frozen projectile back in motion and empties
//! the snapshot store.

use hecs::World;

use stasis_core::components::{Gravity, NetworkId};
use stasis_core::packets::OutboundPacket;
use stasis_core::types::Velocity;

use crate::store::SnapshotStore;

/// Drain the store. For each entry still alive in the world: restore the
/// captured velocity (or zero it, per config), re-enable gravity, and queue
/// a velocity packet. Entries whose entity despawned mid-freeze are skipped.
/// Returns the number of projectiles actually released.
pub fn run(
    world: &mut World,
    store: &SnapshotStore,
    restore_velocities: bool,
    packets: &mut Vec<OutboundPacket>,
) -> usize {
    let mut released = 0;

    for (entity, snapshot) in store.entries() {
        if !world.contains(entity) {
            log::debug!("skipping release of despawned projectile");
            continue;
        }

        // A capture without velocity restores nothing; the projectile keeps
        // whatever velocity it has when restore is on.
        let restored = match (restore_velocities, snapshot.velocity) {
            (true, Some(captured)) => Some(captured),
            (true, None) => None,
            (false, _) => Some(Velocity::zero()),
        };
        if let Some(velocity) = restored {
            if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                *vel = velocity;
            }
        }
        if let Ok(mut gravity) = world.get::<&mut Gravity>(entity) {
            gravity.enabled = true;
        }

        let velocity = world
            .get::<&Velocity>(entity)
            .map(|vel| *vel)
            .unwrap_or_default();
        if let Ok(net) = world.get::<&NetworkId>(entity) {
            packets.push(OutboundPacket::EntityVelocity {
                network_id: net.0,
                velocity,
            });
        }

        released += 1;
    }

    store.clear();
    released
}
