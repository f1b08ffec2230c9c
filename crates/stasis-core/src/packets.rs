//! Outbound replication packets.
//!
//! Thin stand-ins for the wire messages a real server would broadcast to
//! connected clients. Only the kinds the time stop interacts with are
//! modeled; everything else a server sends is out of scope here.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Velocity};

/// A packet queued for broadcast to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundPacket {
    /// Authoritative position sync for one entity.
    ///
    /// This is the only packet kind the time-stop suppressor filters:
    /// vetoing it leaves clients rendering the frozen entity at its last
    /// known place.
    EntityTeleport { network_id: u32, position: Position },
    /// Velocity change notification for one entity. Never filtered.
    EntityVelocity { network_id: u32, velocity: Velocity },
}

impl OutboundPacket {
    /// The display entity id this packet references.
    pub fn network_id(&self) -> u32 {
        match self {
            OutboundPacket::EntityTeleport { network_id, .. } => *network_id,
            OutboundPacket::EntityVelocity { network_id, .. } => *network_id,
        }
    }
}
