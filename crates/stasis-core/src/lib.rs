//! Core types and definitions for the STASIS server simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, packets, snapshots, and constants.
//! It has no dependency on hecs or any runtime machinery.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod packets;
pub mod state;
pub mod types;
