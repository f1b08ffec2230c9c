//! Host state shared between an embedding caller and the server loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use stasis_core::commands::ServerCommand;
use stasis_core::state::WorldSnapshot;

/// Commands sent from the host to the server loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A server command to forward to the engine.
    Server(ServerCommand),
    /// Shut down the loop thread gracefully, draining any active freeze.
    Shutdown,
}

/// Shared host state. Everything is Send + Sync:
/// - `mpsc::Sender` sits in a `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` covers state that does not exist before the loop
///   is attached
/// - the latest snapshot is an `Arc<Mutex<...>>` shared with the loop
///   thread
pub struct HostState {
    /// Channel sender to the loop thread. `None` until `attach`.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    /// Whether the loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the loop thread's command sender.
    pub fn attach(&self, tx: mpsc::Sender<LoopCommand>) -> Result<(), String> {
        let mut guard = self
            .command_tx
            .lock()
            .map_err(|e| format!("Failed to lock command sender: {e}"))?;
        *guard = Some(tx);
        *self
            .running
            .lock()
            .map_err(|e| format!("Failed to lock running flag: {e}"))? = true;
        Ok(())
    }

    /// Forward a server command to the loop thread.
    pub fn send(&self, command: ServerCommand) -> Result<(), String> {
        let guard = self
            .command_tx
            .lock()
            .map_err(|e| format!("Failed to lock command sender: {e}"))?;
        let tx = guard.as_ref().ok_or("Server loop is not running")?;
        tx.send(LoopCommand::Server(command))
            .map_err(|e| format!("Failed to send command: {e}"))
    }

    /// Latest published snapshot, if the loop has ticked yet.
    pub fn latest(&self) -> Option<WorldSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Ask the loop thread to shut down and detach from it.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut guard = self
            .command_tx
            .lock()
            .map_err(|e| format!("Failed to lock command sender: {e}"))?;
        if let Some(tx) = guard.take() {
            tx.send(LoopCommand::Shutdown)
                .map_err(|e| format!("Failed to send shutdown: {e}"))?;
        }
        *self
            .running
            .lock()
            .map_err(|e| format!("Failed to lock running flag: {e}"))? = false;
        Ok(())
    }
}
