//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// Marks an entity as a projectile and records what was fired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
}

/// Display entity id used in replication packets.
///
/// Distinct from the ECS entity handle: packets reference entities by this
/// number, the way a wire protocol would, while internal bookkeeping keys on
/// the generational handle and so can never confuse a despawned projectile
/// with a new one that reused its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u32);

/// Whether gravity acts on this entity. Disabled for the duration of a
/// freeze and re-enabled on release.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gravity {
    pub enabled: bool,
}

impl Default for Gravity {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Remaining time before the projectile despawns on its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ticks: u32,
}

// Position and Velocity are defined in types.rs and used directly as
// components.
