//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Projectile archetypes the server can launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Arrow,
    Bolt,
    Fireball,
    Mortar,
}

/// Activation state of the time-stop ability. Process-wide: there is one
/// freeze at a time, owned by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreezeState {
    /// No freeze in effect; all interception hooks pass through.
    #[default]
    Inactive,
    /// Freeze in effect; the scheduler runs every tick.
    Active,
}

/// Decision returned by interception hooks.
///
/// `Allow` lets the triggering action proceed unchanged; `Veto` cancels it.
/// Every hook returns an explicit verdict rather than mutating shared state,
/// so the caller stays in charge of what cancellation means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Let the action proceed.
    #[default]
    Allow,
    /// Cancel the action.
    Veto,
}

impl Verdict {
    pub fn is_veto(&self) -> bool {
        matches!(self, Verdict::Veto)
    }
}
