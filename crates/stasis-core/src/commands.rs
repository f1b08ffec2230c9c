//! Commands sent from the host layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;
use crate::types::{Position, Velocity};

/// All possible server actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerCommand {
    // --- Projectiles ---
    /// Fire a single projectile with an explicit launch velocity.
    FireProjectile {
        kind: ProjectileKind,
        from: Position,
        aim: Velocity,
    },
    /// Fire a burst of projectiles with randomized bearings and kinds.
    FireVolley { count: u32 },

    // --- Time stop ---
    /// Engage the time-stop ability.
    StartTimeStop,
    /// Disengage the time-stop ability and release everything frozen.
    StopTimeStop,
}
