//! Window-less drivers for the simulation.

use anyhow::Result;
use shared::SimulationStats;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::SimulationConfig;
use crate::simulation::{Clock, ManualClock, Simulation, SystemClock};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);
const IDLE_SLEEP: Duration = Duration::from_millis(10);

/// Runs in real time for `duration`, sleeping until each tick is due.
pub fn run_realtime(config: SimulationConfig, duration: Duration) -> Result<SimulationStats> {
    let mut sim = Simulation::new(config, SystemClock::new())?;
    info!(?duration, "running headless in real time");

    let started = Instant::now();
    let mut last_report = Duration::ZERO;
    sim.start();

    while started.elapsed() < duration {
        sim.pump();

        let elapsed = started.elapsed();
        if elapsed - last_report >= REPORT_INTERVAL {
            report(&sim);
            last_report = elapsed;
        }

        let wait = sim
            .next_tick_in()
            .unwrap_or(IDLE_SLEEP)
            .min(duration.saturating_sub(elapsed));
        thread::sleep(wait);
    }

    sim.stop();
    report(&sim);
    Ok(sim.stats())
}

/// Runs on virtual time as fast as possible, jumping the clock to each tick deadline.
/// Stops once the next tick would fall after `duration`.
pub fn run_virtual(config: SimulationConfig, duration: Duration) -> Result<SimulationStats> {
    let clock = ManualClock::new(0);
    let mut sim = Simulation::new(config, clock.clone())?;
    info!(?duration, "running headless on virtual time");

    let end_ms = duration.as_millis() as u64;
    let report_every = REPORT_INTERVAL.as_millis() as u64;
    let mut next_report = report_every;
    sim.start();

    while let Some(due) = sim.next_tick_due_ms() {
        let due = due.ceil() as u64;
        if due > end_ms {
            break;
        }
        clock.set(due);
        sim.pump();

        if clock.now_ms() >= next_report {
            report(&sim);
            next_report += report_every;
        }
    }

    clock.set(end_ms);
    sim.stop();
    report(&sim);
    Ok(sim.stats())
}

fn report<C: Clock>(sim: &Simulation<C>) {
    let stats = sim.stats();
    info!(
        ants = stats.ant_count,
        sim_time_s = stats.sim_time_secs(),
        ticks = stats.ticks,
        speed = stats.speed,
        "colony status"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SimulationConfig {
        SimulationConfig {
            seed: Some(11),
            ..Default::default()
        }
    }

    #[test]
    fn test_virtual_run_hits_first_reproduction() {
        let stats = run_virtual(seeded(), Duration::from_secs(5)).unwrap();
        // Ticks at 0, 100, ..., 5000 ms
        assert_eq!(stats.ticks, 51);
        assert_eq!(stats.ant_count, 3);
        assert_eq!(stats.sim_time_ms, 5000.0);
        assert!(!stats.running);
    }

    #[test]
    fn test_virtual_run_before_interval() {
        let stats = run_virtual(seeded(), Duration::from_millis(4_999)).unwrap();
        assert_eq!(stats.ticks, 50);
        assert_eq!(stats.ant_count, 2);
    }

    #[test]
    fn test_virtual_run_with_fractional_interval() {
        let config = SimulationConfig {
            baseline_speed: 15,
            ..seeded()
        };
        let stats = run_virtual(config, Duration::from_secs(1)).unwrap();
        assert!(stats.ticks >= 14 && stats.ticks <= 16, "ticks = {}", stats.ticks);
    }
}
