//! Replication system: queues outbound position syncs for live
//! projectiles, filtered through the time-stop suppressor.
//!
//! Only EntityTeleport goes through the filter. Velocity packets are
//! emitted by the spawn and release paths and never filtered, so a frozen
//! projectile simply stops producing position updates while everything
//! else about it replicates normally.

use hecs::World;

use stasis_core::components::{NetworkId, Projectile};
use stasis_core::packets::OutboundPacket;
use stasis_core::types::Position;

use crate::timestop::TimeStop;

/// Queue one position sync per live projectile, skipping any the
/// suppressor vetoes.
pub fn run(world: &World, timestop: &TimeStop, packets: &mut Vec<OutboundPacket>) {
    for (entity, (net, pos, _proj)) in world
        .query::<(&NetworkId, &Position, &Projectile)>()
        .iter()
    {
        if timestop.on_outbound_position_notification(entity).is_veto() {
            continue;
        }
        packets.push(OutboundPacket::EntityTeleport {
            network_id: net.0,
            position: *pos,
        });
    }
}
