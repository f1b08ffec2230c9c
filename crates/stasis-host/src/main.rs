//! STASIS headless server demo.
//!
//! Boots the server loop, fires a volley, engages the time stop, attempts
//! a spawn mid-freeze, releases, and logs what happened. Uses the same
//! state handle and command channel an embedding server would.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use env_logger::{Builder, Env};
use log::info;

use stasis_core::commands::ServerCommand;
use stasis_core::constants::TICK_RATE;
use stasis_core::enums::ProjectileKind;
use stasis_core::types::{Position, Velocity};
use stasis_host::config;
use stasis_host::game_loop::spawn_server_loop;
use stasis_host::state::HostState;

fn init_logger() {
    // Level comes from RUST_LOG, defaulting to info.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn wait_ticks(n: u64) {
    thread::sleep(Duration::from_millis(n * 1000 / TICK_RATE as u64));
}

fn main() {
    init_logger();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "stasis.json".to_string());
    let host_config = config::load_or_init(Path::new(&config_path));
    info!("starting with {:?}", host_config);

    let state = HostState::new();
    let (cmd_tx, loop_handle) = spawn_server_loop(
        host_config.engine_config(),
        Arc::clone(&state.latest_snapshot),
    );
    if let Err(e) = state.attach(cmd_tx) {
        log::error!("{}", e);
        return;
    }

    let result = run_demo(&state);
    if let Err(e) = result {
        log::error!("{}", e);
    }

    if let Err(e) = state.shutdown() {
        log::error!("{}", e);
    }
    let _ = loop_handle.join();
    info!("server loop stopped");
}

/// The scripted demo scenario.
fn run_demo(state: &HostState) -> Result<(), String> {
    state.send(ServerCommand::FireVolley { count: 12 })?;
    wait_ticks(15);
    report(state, "volley airborne");

    state.send(ServerCommand::StartTimeStop)?;
    wait_ticks(10);
    report(state, "time stop engaged");

    // With default config this spawn is vetoed.
    state.send(ServerCommand::FireProjectile {
        kind: ProjectileKind::Fireball,
        from: Position::new(0.0, 0.0, 5.0),
        aim: Velocity::new(0.0, 40.0, 10.0),
    })?;
    wait_ticks(10);
    report(state, "mid-freeze spawn attempted");

    state.send(ServerCommand::StopTimeStop)?;
    wait_ticks(15);
    report(state, "time stop released");
    Ok(())
}

/// Log a one-line summary of the latest snapshot.
fn report(state: &HostState, label: &str) {
    match state.latest() {
        Some(snapshot) => info!(
            "{}: tick {}, {} projectiles, {} frozen, {} packets this tick",
            label,
            snapshot.time.tick,
            snapshot.projectiles.len(),
            snapshot.freeze.frozen_count,
            snapshot.packets.len()
        ),
        None => info!("{}: no snapshot yet", label),
    }
}
