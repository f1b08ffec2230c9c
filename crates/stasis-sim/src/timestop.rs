//! Time-stop ability controller.
//!
//! The controller owns the freeze state machine and the snapshot store,
//! and exposes the interception hooks the rest of the server calls into.
//! Every method takes `&self`: state lives behind interior locks because
//! the hooks can be invoked from outside the tick loop, while the
//! world-mutating operations additionally take `&mut World` and so can
//! only run where the world is owned.

use std::sync::{Mutex, MutexGuard};

use hecs::{Entity, World};

use stasis_core::config::TimeStopConfig;
use stasis_core::enums::{FreezeState, Verdict};
use stasis_core::events::AbilityEvent;
use stasis_core::packets::OutboundPacket;
use stasis_core::types::{Position, Velocity};

use crate::store::SnapshotStore;
use crate::systems::{freeze, release};

/// The time-stop ability. One instance per engine is the single authority
/// over the freeze state.
pub struct TimeStop {
    state: Mutex<FreezeState>,
    store: SnapshotStore,
    config: TimeStopConfig,
}

impl TimeStop {
    pub fn new(config: TimeStopConfig) -> Self {
        Self {
            state: Mutex::new(FreezeState::Inactive),
            store: SnapshotStore::new(),
            config,
        }
    }

    /// Current activation state.
    pub fn state(&self) -> FreezeState {
        *self.lock_state()
    }

    pub fn is_active(&self) -> bool {
        self.state() == FreezeState::Active
    }

    /// Number of projectiles currently held by the freeze.
    pub fn frozen_count(&self) -> usize {
        self.store.len()
    }

    /// Whether `entity` is currently held by the freeze.
    pub fn is_frozen(&self, entity: Entity) -> bool {
        self.store.contains(entity)
    }

    pub fn config(&self) -> &TimeStopConfig {
        &self.config
    }

    /// Engage the freeze. Returns false if one was already active; a
    /// duplicate activation is a no-op and the running freeze is untouched.
    pub fn start(&self) -> bool {
        let mut state = self.lock_state();
        if *state == FreezeState::Active {
            return false;
        }
        // stop() always drains, so a fresh activation starts empty.
        debug_assert!(self.store.is_empty());
        *state = FreezeState::Active;
        true
    }

    /// Disengage the freeze and set every held projectile back in motion.
    /// Returns the number of projectiles released, or None if no freeze
    /// was active.
    pub fn stop(&self, world: &mut World, packets: &mut Vec<OutboundPacket>) -> Option<usize> {
        {
            let mut state = self.lock_state();
            if *state == FreezeState::Inactive {
                return None;
            }
            // Flip before draining: from here on the scheduler and the
            // spawn hook see the stop as over.
            *state = FreezeState::Inactive;
        }
        Some(release::run(
            world,
            &self.store,
            self.config.restore_velocities,
            packets,
        ))
    }

    /// Per-tick scheduler entry point. Captures and pins every live
    /// projectile while active; does nothing while inactive.
    pub fn tick(&self, world: &mut World, events: &mut Vec<AbilityEvent>) {
        if !self.is_active() {
            return;
        }
        freeze::run(world, &self.store, events);
    }

    /// Hook for the spawn path: a projectile entity has been created. The
    /// verdict tells the caller whether to keep it. While a freeze is
    /// active, the projectile is either vetoed or captured on the spot at
    /// its spawn position, before it ever moves.
    pub fn on_projectile_created(
        &self,
        entity: Entity,
        position: Position,
        velocity: Option<Velocity>,
    ) -> Verdict {
        // The state guard spans the capture. stop() flips the state before
        // it drains, so a capture made under an Active guard always lands
        // ahead of that drain and can never leak into an inactive store.
        let state = self.lock_state();
        if *state != FreezeState::Active {
            return Verdict::Allow;
        }
        if !self.config.spawn_during_freeze {
            return Verdict::Veto;
        }
        self.store.freeze(entity, position, velocity);
        Verdict::Allow
    }

    /// Hook for the replication path: the server is about to send a
    /// position sync for `entity`. Frozen entities are vetoed so clients
    /// keep rendering them where they stopped; everything else passes,
    /// including everything once the store has drained.
    pub fn on_outbound_position_notification(&self, entity: Entity) -> Verdict {
        if self.store.contains(entity) {
            Verdict::Veto
        } else {
            Verdict::Allow
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FreezeState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
