//! View system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use stasis_core::components::{Gravity, Lifetime, NetworkId, Projectile};
use stasis_core::events::AbilityEvent;
use stasis_core::packets::OutboundPacket;
use stasis_core::state::{FreezeView, ProjectileView, WorldSnapshot};
use stasis_core::types::{Position, SimTime, Velocity};

use crate::timestop::TimeStop;

/// Build a complete WorldSnapshot from the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    timestop: &TimeStop,
    packets: Vec<OutboundPacket>,
    events: Vec<AbilityEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        freeze: FreezeView {
            state: timestop.state(),
            frozen_count: timestop.frozen_count() as u32,
        },
        projectiles: build_projectiles(world, timestop),
        packets,
        events,
    }
}

/// Build the ProjectileView list, sorted by network id for stable output.
fn build_projectiles(world: &World, timestop: &TimeStop) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &NetworkId, &Position, &Velocity, &Gravity, &Lifetime)>()
        .iter()
        .map(|(entity, (proj, net, pos, vel, gravity, lifetime))| ProjectileView {
            network_id: net.0,
            kind: proj.kind,
            position: *pos,
            velocity: *vel,
            speed: vel.speed(),
            frozen: timestop.is_frozen(entity),
            gravity_enabled: gravity.enabled,
            lifetime_ticks: lifetime.remaining_ticks,
        })
        .collect();
    views.sort_by_key(|view| view.network_id);
    views
}
