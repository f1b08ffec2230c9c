//! Runtime configuration for the time-stop ability.

use serde::{Deserialize, Serialize};

/// Behavior toggles for the time-stop ability, loaded from the host config
/// file. Missing keys fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStopConfig {
    /// Restore each projectile's captured velocity when the stop ends.
    /// When false, released projectiles resume from a dead stop and fall.
    #[serde(default = "default_restore_velocities")]
    pub restore_velocities: bool,
    /// Allow projectiles to spawn (immediately frozen in place) while a
    /// stop is active. When false, such spawns are vetoed outright.
    #[serde(default)]
    pub spawn_during_freeze: bool,
}

impl Default for TimeStopConfig {
    fn default() -> Self {
        Self {
            restore_velocities: true,
            spawn_during_freeze: false,
        }
    }
}

fn default_restore_velocities() -> bool {
    true
}
