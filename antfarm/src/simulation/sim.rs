use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::{AntView, GridPos, SimulationStats};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::config::SimulationConfig;
use crate::error::ConfigError;

use super::ant::{Ant, brood_position};
use super::{Clock, Field, RunState, TickTimer, WorldState};

/// A driver further behind than this drops the missed ticks instead of replaying them.
const MAX_TICK_LAG_MS: f64 = 1000.0;

/// Drives the world forward one tick at a time, paced against a wall clock.
///
/// The engine never fires ticks on its own. A driver calls [`Simulation::pump`]
/// as often as it likes; every tick whose deadline has passed runs, and deadlines
/// stay `1000 / speed` ms apart no matter how often the driver calls in.
pub struct Simulation<C: Clock> {
    world: WorldState,
    clock: C,
    rng: StdRng,
    config: SimulationConfig,
    timer: TickTimer,
    new_ants_count: u32,
    tick: u64,
}

impl<C: Clock> Simulation<C> {
    pub fn new(config: SimulationConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let world = WorldState::new(&config, clock.now_ms());

        Ok(Self {
            world,
            clock,
            rng,
            new_ants_count: config.new_ants_count,
            config,
            timer: TickTimer::new(),
            tick: 0,
        })
    }

    pub fn ant_views(&self) -> impl Iterator<Item = AntView> + '_ {
        self.world.ants().iter().map(Ant::view)
    }

    pub fn field(&self) -> &Field {
        self.world.field()
    }

    pub fn agent_count(&self) -> usize {
        self.world.agent_count()
    }

    pub fn field_intensity_at(&self, pos: GridPos) -> Option<f32> {
        self.world.field_intensity_at(pos)
    }

    pub fn sim_time_ms(&self) -> f64 {
        self.world.clock().sim_time_ms
    }

    pub fn speed(&self) -> u32 {
        self.world.clock().speed
    }

    pub fn new_ants_count(&self) -> u32 {
        self.new_ants_count
    }

    pub fn run_state(&self) -> RunState {
        self.world.clock().run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            ant_count: self.agent_count(),
            sim_time_ms: self.sim_time_ms(),
            speed: self.speed(),
            new_ants_count: self.new_ants_count,
            ticks: self.tick_count(),
            running: self.is_running(),
        }
    }

    /// Begins ticking. The first tick is due immediately. No-op while running.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("start ignored, simulation already running");
            return;
        }
        let now = self.clock.now_ms();
        let clock = &mut self.world.clock;
        clock.run_state = RunState::Running;
        clock.last_tick_ms = now;
        self.timer.schedule(now, 0.0);
        info!(speed = clock.speed, "simulation started");
    }

    /// Stops ticking. The pending tick, if any, never fires. No-op while stopped.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.world.clock.run_state = RunState::Stopped;
        self.timer.cancel();
        info!(ticks = self.tick, ants = self.agent_count(), "simulation stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stops and restores the starting world. The reproduction batch size is kept.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.world.reset(self.clock.now_ms());
        self.tick = 0;
        info!("simulation reset");
    }

    /// Sets the tick rate. Zero is raised to one tick per second; `max_speed` caps it.
    pub fn set_speed(&mut self, speed: u32) {
        let mut speed = speed.max(1);
        if let Some(max_speed) = self.config.max_speed {
            if speed > max_speed {
                warn!(requested = speed, max_speed, "speed capped");
                speed = max_speed;
            }
        }
        self.world.clock.speed = speed;
        info!(speed, "speed changed");
    }

    pub fn increase_speed(&mut self) {
        self.set_speed(self.speed().saturating_add(self.config.speed_step));
    }

    pub fn reset_speed(&mut self) {
        self.set_speed(self.config.baseline_speed);
    }

    /// Adds `reproduction_step` to the ants each queen spawns per interval.
    pub fn increase_reproduction(&mut self) {
        let mut count = self.new_ants_count.saturating_add(self.config.reproduction_step);
        if let Some(max) = self.config.max_new_ants_count {
            if count > max {
                warn!(requested = count, max, "reproduction batch capped");
                count = max;
            }
        }
        self.new_ants_count = count;
        info!(new_ants_count = count, "reproduction batch changed");
    }

    /// Milliseconds between tick starts at the current speed.
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.speed() as f64
    }

    /// Wall-clock deadline of the next tick, if one is scheduled.
    pub fn next_tick_due_ms(&self) -> Option<f64> {
        self.timer.due_at_ms()
    }

    pub fn next_tick_in(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now_ms())
    }

    /// Runs every tick that has come due and returns how many ran.
    ///
    /// Each deadline is the previous one plus the interval, so the cadence does
    /// not depend on how often this is called. A deadline only slips when the
    /// tick work itself outlasts the interval. After a stall longer than
    /// `MAX_TICK_LAG_MS` the backlog is dropped and the next tick is armed from now.
    pub fn pump(&mut self) -> u32 {
        let mut fired = 0;
        while self.is_running() {
            let started = self.clock.now_ms();
            if !self.timer.is_ready(started) {
                break;
            }
            let Some(due) = self.timer.due_at_ms() else {
                break;
            };
            self.timer.cancel();
            self.tick();
            fired += 1;

            let finished = self.clock.now_ms();
            let interval = self.tick_interval_ms();
            let work = finished.saturating_sub(started) as f64;
            let mut next = due + interval.max(work);
            let behind = finished as f64 - next;
            if behind > MAX_TICK_LAG_MS {
                debug!(behind_ms = behind, "dropping tick backlog");
                next = finished as f64 + interval;
            }
            self.timer.schedule_at(next);
        }
        fired
    }

    /// Advances the world by one tick. Does nothing while stopped.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = self.clock.now_ms();

        let clock = &mut self.world.clock;
        let elapsed = now.saturating_sub(clock.last_tick_ms);
        clock.last_tick_ms = now;
        clock.sim_time_ms +=
            elapsed as f64 * (clock.speed as f64 / self.config.baseline_speed as f64);

        self.move_ants();

        if now.saturating_sub(self.world.clock.last_reproduction_ms)
            >= self.config.reproduction_interval_ms
        {
            self.world.clock.last_reproduction_ms = now;
            self.reproduce();
        }

        self.world.field.decay();
        self.tick += 1;

        trace!(
            tick = self.tick,
            elapsed_ms = elapsed,
            ants = self.agent_count(),
            "tick"
        );
    }

    fn move_ants(&mut self) {
        let grid_size = self.world.grid_size();
        let amount = self.world.field.max_amount();
        let (ants, field, rng) = (&mut self.world.ants, &mut self.world.field, &mut self.rng);

        for ant in ants.iter_mut() {
            let pos = ant.wander(rng, grid_size);
            field.lay(pos, amount);
        }
    }

    /// Spawns a brood next to every queen. Queens are collected before any
    /// ant is added, so newborns never take part in the same round.
    fn reproduce(&mut self) {
        let grid_size = self.world.grid_size();
        let queens: Vec<GridPos> = self
            .world
            .ants
            .iter()
            .filter(|ant| ant.is_queen)
            .map(|ant| ant.pos)
            .collect();

        let before = self.world.ants.len();
        'queens: for queen_pos in queens {
            for _ in 0..self.new_ants_count {
                if let Some(max_ants) = self.config.max_ants {
                    if self.world.ants.len() >= max_ants {
                        warn!(max_ants, "colony size limit reached");
                        break 'queens;
                    }
                }
                let pos = brood_position(&mut self.rng, queen_pos, grid_size);
                self.world.ants.push(Ant::worker(pos));
            }
        }

        debug!(
            born = self.world.ants.len() - before,
            ants = self.world.ants.len(),
            "queens reproduced"
        );
    }
}
