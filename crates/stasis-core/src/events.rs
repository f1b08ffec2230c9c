//! Events emitted by the simulation for host feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// Notable things that happened during a tick, carried in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AbilityEvent {
    /// The time stop engaged.
    TimeStopStarted { tick: u64 },
    /// The time stop ended; `released` projectiles were set back in motion.
    TimeStopEnded { tick: u64, released: u32 },
    /// A projectile was captured by the freeze.
    ProjectileFrozen { network_id: u32 },
    /// A spawn attempt during an active stop was cancelled.
    SpawnVetoed { kind: ProjectileKind },
    /// A projectile despawned (lifetime expiry, ground impact, or
    /// out-of-world).
    ProjectileExpired { network_id: u32 },
}
