//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components, the
//! snapshot store, or the engine.

pub mod cleanup;
pub mod freeze;
pub mod physics;
pub mod release;
pub mod replication;
pub mod view;
