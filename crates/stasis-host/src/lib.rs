//! STASIS host layer.
//!
//! Wires the simulation engine into a running server process: config file
//! loading, the fixed-rate server loop thread, and the shared state an
//! embedding caller polls snapshots from.

pub mod config;
pub mod game_loop;
pub mod state;

pub use stasis_core as core;
