//! Server engine — the core of the simulation.
//!
//! `ServerEngine` owns the hecs ECS world, processes queued server
//! commands, runs all systems, and produces `WorldSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stasis_core::commands::ServerCommand;
use stasis_core::components::NetworkId;
use stasis_core::config::TimeStopConfig;
use stasis_core::enums::ProjectileKind;
use stasis_core::events::AbilityEvent;
use stasis_core::packets::OutboundPacket;
use stasis_core::state::WorldSnapshot;
use stasis_core::types::{Position, SimTime, Velocity};

use crate::systems;
use crate::timestop::TimeStop;
use crate::world_setup;

/// Configuration for starting a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Time-stop behavior toggles.
    pub timestop: TimeStopConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timestop: TimeStopConfig::default(),
        }
    }
}

/// The server engine. Owns the ECS world and all sim state.
pub struct ServerEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    next_network_id: u32,
    command_queue: VecDeque<ServerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<AbilityEvent>,
    packets: Vec<OutboundPacket>,
    timestop: TimeStop,
}

impl ServerEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_network_id: 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            packets: Vec::new(),
            timestop: TimeStop::new(config.timestop),
        }
    }

    /// Queue a server command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ServerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ServerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        let packets = std::mem::take(&mut self.packets);
        systems::view::build(&self.world, &self.time, &self.timestop, packets, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the time-stop controller.
    pub fn timestop(&self) -> &TimeStop {
        &self.timestop
    }

    /// Release any active freeze so nothing stays frozen past the engine.
    /// Hosts call this before dropping the engine.
    pub fn shutdown(&mut self) {
        if let Some(released) = self.timestop.stop(&mut self.world, &mut self.packets) {
            log::info!("shutdown released {} frozen projectiles", released);
            self.events.push(AbilityEvent::TimeStopEnded {
                tick: self.time.tick,
                released: released as u32,
            });
        }
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single server command.
    fn handle_command(&mut self, command: ServerCommand) {
        match command {
            ServerCommand::FireProjectile { kind, from, aim } => {
                self.fire_projectile(kind, from, aim);
            }
            ServerCommand::FireVolley { count } => {
                for _ in 0..count {
                    let (kind, from, aim) = world_setup::roll_volley_shot(&mut self.rng);
                    self.fire_projectile(kind, from, aim);
                }
            }
            ServerCommand::StartTimeStop => {
                if self.timestop.start() {
                    let config = self.timestop.config();
                    log::info!(
                        "time stop engaged at tick {} (spawn_during_freeze={}, restore_velocities={})",
                        self.time.tick,
                        config.spawn_during_freeze,
                        config.restore_velocities
                    );
                    self.events.push(AbilityEvent::TimeStopStarted {
                        tick: self.time.tick,
                    });
                } else {
                    log::debug!("ignoring StartTimeStop: already active");
                }
            }
            ServerCommand::StopTimeStop => {
                match self.timestop.stop(&mut self.world, &mut self.packets) {
                    Some(released) => {
                        log::info!(
                            "time stop released {} projectiles at tick {}",
                            released,
                            self.time.tick
                        );
                        self.events.push(AbilityEvent::TimeStopEnded {
                            tick: self.time.tick,
                            released: released as u32,
                        });
                    }
                    None => log::debug!("ignoring StopTimeStop: not active"),
                }
            }
        }
    }

    /// Spawn a projectile through the spawn interception hook. Every
    /// projectile enters the world here, so the hook sees all of them.
    /// Returns the entity if the spawn was allowed.
    fn fire_projectile(
        &mut self,
        kind: ProjectileKind,
        from: Position,
        aim: Velocity,
    ) -> Option<Entity> {
        let network_id = self.next_network_id;
        self.next_network_id += 1;

        let entity = world_setup::spawn_projectile(
            &mut self.world,
            NetworkId(network_id),
            kind,
            from,
            aim,
        );

        let verdict = self.timestop.on_projectile_created(entity, from, Some(aim));
        if verdict.is_veto() {
            // Cancelled before it ever moves or replicates.
            let _ = self.world.despawn(entity);
            log::debug!("spawn vetoed during time stop: {:?}", kind);
            self.events.push(AbilityEvent::SpawnVetoed { kind });
            return None;
        }

        if self.timestop.is_frozen(entity) {
            // Spawned into an active stop: captured at the spawn point.
            self.events.push(AbilityEvent::ProjectileFrozen { network_id });
        }
        self.packets.push(OutboundPacket::EntityVelocity {
            network_id,
            velocity: aim,
        });
        Some(entity)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Kinematic integration
        systems::physics::integrate(&mut self.world);
        // 2. Gravity
        systems::physics::apply_gravity(&mut self.world);
        // 3. Freeze scheduler (no-op while inactive)
        self.timestop.tick(&mut self.world, &mut self.events);
        // 4. Cleanup (lifetime expiry, ground impact, out-of-world)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 5. Replication (position sync, filtered by the suppressor)
        systems::replication::run(&self.world, &self.timestop, &mut self.packets);
    }
}
