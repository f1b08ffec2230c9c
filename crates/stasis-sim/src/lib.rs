//! Simulation engine for STASIS.
//!
//! Owns the hecs ECS world, runs projectile kinematics and the time-stop
//! machinery at a fixed tick rate, and produces WorldSnapshots for the
//! host layer.

pub mod engine;
pub mod store;
pub mod systems;
pub mod timestop;
pub mod world_setup;

pub use engine::ServerEngine;
pub use stasis_core as core;
pub use timestop::TimeStop;
