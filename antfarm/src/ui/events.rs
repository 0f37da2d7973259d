use crate::simulation::{Clock, Simulation};

/// Control requests raised by the control panel or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Start,
    Stop,
    TogglePause,
    FastForward,
    ResetSpeed,
    IncreaseReproduction,
    Reset,
}

impl AppAction {
    pub fn apply<C: Clock>(self, simulation: &mut Simulation<C>) {
        match self {
            AppAction::Start => simulation.start(),
            AppAction::Stop => simulation.stop(),
            AppAction::TogglePause => simulation.toggle_running(),
            AppAction::FastForward => simulation.increase_speed(),
            AppAction::ResetSpeed => simulation.reset_speed(),
            AppAction::IncreaseReproduction => simulation.increase_reproduction(),
            AppAction::Reset => simulation.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation::{ManualClock, RunState};

    fn simulation() -> Simulation<ManualClock> {
        let config = SimulationConfig {
            seed: Some(5),
            ..Default::default()
        };
        Simulation::new(config, ManualClock::new(0)).unwrap()
    }

    #[test]
    fn test_fast_forward_and_reset_speed() {
        let mut sim = simulation();
        for _ in 0..3 {
            AppAction::FastForward.apply(&mut sim);
        }
        assert_eq!(sim.speed(), 25);
        AppAction::ResetSpeed.apply(&mut sim);
        assert_eq!(sim.speed(), 10);
    }

    #[test]
    fn test_toggle_pause_flips_run_state() {
        let mut sim = simulation();
        AppAction::TogglePause.apply(&mut sim);
        assert_eq!(sim.run_state(), RunState::Running);
        AppAction::TogglePause.apply(&mut sim);
        assert_eq!(sim.run_state(), RunState::Stopped);
    }

    #[test]
    fn test_reset_stops_running_simulation() {
        let mut sim = simulation();
        AppAction::Start.apply(&mut sim);
        AppAction::FastForward.apply(&mut sim);
        AppAction::Reset.apply(&mut sim);
        assert_eq!(sim.run_state(), RunState::Stopped);
        assert_eq!(sim.speed(), 10);
    }

    #[test]
    fn test_increase_reproduction_steps_by_two() {
        let mut sim = simulation();
        AppAction::IncreaseReproduction.apply(&mut sim);
        AppAction::IncreaseReproduction.apply(&mut sim);
        assert_eq!(sim.new_ants_count(), 5);
    }
}
