//! Snapshot store: the single owner of frozen-projectile state.
//!
//! The map is keyed on ECS entity handles, which are generational: a
//! despawned projectile's key can never be confused with a later entity
//! that reuses its slot. The tick loop and interception hooks may touch
//! the store from different threads, so the map lives behind a mutex and
//! every method takes `&self`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use hecs::Entity;

use stasis_core::types::{Position, Velocity};

/// State captured for one frozen projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrozenSnapshot {
    /// Where the projectile is pinned for the duration of the freeze.
    pub position: Position,
    /// Velocity at capture time, restored on release. `None` when the
    /// spawn notification carried no velocity.
    pub velocity: Option<Velocity>,
}

/// Synchronized map of every projectile currently held by the freeze.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    entries: Mutex<HashMap<Entity, FrozenSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot for `entity` unless one already exists. Returns
    /// true if this call created the entry; repeated calls for the same
    /// entity keep the first capture.
    pub fn freeze(&self, entity: Entity, position: Position, velocity: Option<Velocity>) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(&entity) {
            return false;
        }
        entries.insert(entity, FrozenSnapshot { position, velocity });
        true
    }

    /// The pinned position for `entity`, if it is frozen.
    pub fn frozen_position(&self, entity: Entity) -> Option<Position> {
        self.lock().get(&entity).map(|snapshot| snapshot.position)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.lock().contains_key(&entity)
    }

    /// All current entries, sorted by entity bits so drain order does not
    /// depend on hash seeding.
    pub fn entries(&self) -> Vec<(Entity, FrozenSnapshot)> {
        let mut entries: Vec<(Entity, FrozenSnapshot)> = self
            .lock()
            .iter()
            .map(|(entity, snapshot)| (*entity, *snapshot))
            .collect();
        entries.sort_by_key(|(entity, _)| entity.to_bits());
        entries
    }

    /// Drop every entry whose entity fails the predicate.
    pub fn retain<F: FnMut(Entity) -> bool>(&self, mut keep: F) {
        self.lock().retain(|entity, _| keep(*entity));
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A poisoned lock means a panic elsewhere mid-update; the map itself
    /// is still usable, so recover it instead of cascading the panic.
    fn lock(&self) -> MutexGuard<'_, HashMap<Entity, FrozenSnapshot>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn spawn_entities(count: usize) -> Vec<Entity> {
        let mut world = hecs::World::new();
        (0..count).map(|_| world.spawn(())).collect()
    }

    #[test]
    fn test_first_capture_wins() {
        let store = SnapshotStore::new();
        let entities = spawn_entities(1);
        let first = Position::new(1.0, 2.0, 3.0);
        let later = Position::new(9.0, 9.0, 9.0);

        assert!(store.freeze(entities[0], first, Some(Velocity::new(1.0, 0.0, 0.0))));
        assert!(!store.freeze(entities[0], later, None));

        assert_eq!(store.frozen_position(entities[0]), Some(first));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_retain_and_clear() {
        let store = SnapshotStore::new();
        let entities = spawn_entities(3);
        for entity in &entities {
            store.freeze(*entity, Position::default(), None);
        }

        store.retain(|entity| entity != entities[1]);
        assert_eq!(store.len(), 2);
        assert!(!store.contains(entities[1]));
        assert!(store.contains(entities[0]));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_entries_sorted() {
        let store = SnapshotStore::new();
        let entities = spawn_entities(8);
        // Insert in reverse to make ordering by insertion impossible.
        for entity in entities.iter().rev() {
            store.freeze(*entity, Position::default(), None);
        }
        let entries = store.entries();
        assert_eq!(entries.len(), 8);
        for pair in entries.windows(2) {
            assert!(
                pair[0].0.to_bits() < pair[1].0.to_bits(),
                "Entries should come out sorted by entity bits"
            );
        }
    }

    /// Concurrent captures of the same entity leave exactly one entry.
    #[test]
    fn test_concurrent_freeze() {
        let store = Arc::new(SnapshotStore::new());
        let entities = Arc::new(spawn_entities(64));
        let contested = entities[0];

        let mut handles = Vec::new();
        for thread_idx in 0..8 {
            let store = Arc::clone(&store);
            let entities = Arc::clone(&entities);
            handles.push(std::thread::spawn(move || {
                let claimed = Position::new(thread_idx as f64, 0.0, 0.0);
                store.freeze(contested, claimed, None);
                // Each thread also owns a disjoint slice of entities.
                for entity in entities.iter().skip(1 + thread_idx * 7).take(7) {
                    store.freeze(*entity, Position::default(), None);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // 1 contested + 8 threads * 7 disjoint entries.
        assert_eq!(store.len(), 57);
        let winner = store.frozen_position(contested).unwrap();
        assert!(
            (0.0..8.0).contains(&winner.x) && winner.x.fract() == 0.0,
            "Contested entry should hold exactly one thread's capture, got {:?}",
            winner
        );
    }
}
