//! Freeze scheduler system: captures and pins every live projectile while
//! the time stop is active.
//!
//! Runs once per tick. The first observation of a projectile records its
//! position and velocity in the snapshot store; every pass afterwards
//! forces the position back to the captured point and keeps gravity off.
//! Projectiles that spawn mid-freeze are picked up the same way, and
//! entries for despawned projectiles are pruned.

use hecs::World;

use stasis_core::components::{Gravity, NetworkId, Projectile};
use stasis_core::events::AbilityEvent;
use stasis_core::types::{Position, Velocity};

use crate::store::SnapshotStore;

/// One scheduler pass. Only called while the ability is active.
pub fn run(world: &mut World, store: &SnapshotStore, events: &mut Vec<AbilityEvent>) {
    // Capture pass: record any projectile the store has not seen yet.
    // Projectiles already captured at spawn time keep their first snapshot.
    for (entity, (_proj, net, pos, vel)) in world
        .query::<(&Projectile, &NetworkId, &Position, &Velocity)>()
        .iter()
    {
        if store.freeze(entity, *pos, Some(*vel)) {
            events.push(AbilityEvent::ProjectileFrozen { network_id: net.0 });
        }
    }

    // Correction pass: snap positions back and hold gravity off, undoing
    // whatever the kinematics systems did earlier this tick.
    for (entity, (_proj, pos, gravity)) in
        world.query_mut::<(&Projectile, &mut Position, &mut Gravity)>()
    {
        if let Some(held) = store.frozen_position(entity) {
            *pos = held;
            gravity.enabled = false;
        }
    }

    // Projectiles that despawned mid-freeze surrender their entries, so
    // nothing is restored into a recycled entity slot later.
    store.retain(|entity| world.contains(entity));
}
