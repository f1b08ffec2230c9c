//! World snapshot — the complete visible state published to the host each
//! tick.

use serde::{Deserialize, Serialize};

use crate::enums::{FreezeState, ProjectileKind};
use crate::events::AbilityEvent;
use crate::packets::OutboundPacket;
use crate::types::{Position, SimTime, Velocity};

/// Complete observable state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub freeze: FreezeView,
    /// Live projectiles, sorted by network id.
    pub projectiles: Vec<ProjectileView>,
    /// Packets that passed the suppressor this tick, in emission order.
    pub packets: Vec<OutboundPacket>,
    /// Events raised this tick, in emission order.
    pub events: Vec<AbilityEvent>,
}

/// Time-stop status for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeView {
    pub state: FreezeState,
    /// Number of projectiles currently held by the freeze.
    pub frozen_count: u32,
}

/// One visible projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub network_id: u32,
    pub kind: ProjectileKind,
    pub position: Position,
    pub velocity: Velocity,
    /// Speed magnitude (units/s).
    pub speed: f64,
    /// Whether this projectile is held by the freeze.
    pub frozen: bool,
    pub gravity_enabled: bool,
    pub lifetime_ticks: u32,
}
