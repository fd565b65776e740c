use tracing::{debug, info};

use crate::constants::{MAX_STEPS_PER_TICK, TIME_STEP};
use crate::control::{
    guidance::Autopilot,
    propulsion::Nozzle,
    rocket::{Rocket, RocketState},
};
use crate::errors::SimulationError;
use crate::trajectory_system::terminal::FlightStatus;

// How a wall-clock interval is turned into a number of fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepAccounting {
    // Subtract `dt` from the remaining time until it is no longer positive.
    // Floating-point residue near a multiple of `dt` can add or drop a step;
    // kept to reproduce reference scores.
    #[default]
    Reference,
    // `ceil(interval / dt)`. The division itself rounds, so this can also
    // overcount by one (0.035 / 0.005 gives 8).
    Exact,
}

impl StepAccounting {
    // Zero for empty or non-finite intervals, never more than MAX_STEPS_PER_TICK.
    pub fn step_count(self, interval: f64, dt: f64) -> usize {
        if !interval.is_finite() || interval <= 0.0 {
            return 0;
        }
        match self {
            StepAccounting::Reference => {
                let mut remaining = interval;
                let mut steps = 0;
                while remaining > 0.0 && steps < MAX_STEPS_PER_TICK {
                    remaining -= dt;
                    steps += 1;
                }
                steps
            }
            StepAccounting::Exact => {
                let steps = (interval / dt).ceil();
                if steps >= MAX_STEPS_PER_TICK as f64 {
                    MAX_STEPS_PER_TICK
                } else {
                    steps as usize
                }
            }
        }
    }
}

// `(landed ? peak : 0) - |x|`; undefined while still flying.
pub fn score(status: FlightStatus, peak_altitude: f64, final_x: f64) -> Option<f64> {
    match status {
        FlightStatus::InFlight => None,
        FlightStatus::Landed => Some(peak_altitude - final_x.abs()),
        FlightStatus::Crashed => Some(-final_x.abs()),
    }
}

#[derive(Debug, Clone)]
pub struct SimulationDriver {
    rocket: Rocket,
    initial_state: RocketState,
    dt: f64,
    accounting: StepAccounting,
    sim_time: f64,
    peak_altitude: f64,
    steps: u64,
    // last status seen by the driver, for logging transitions
    last_status: FlightStatus,
}

impl SimulationDriver {
    pub fn new(rocket: Rocket, dt: f64, accounting: StepAccounting) -> Result<Self, SimulationError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        Ok(Self::assemble(rocket, dt, accounting))
    }

    pub fn with_defaults(rocket: Rocket) -> Self {
        Self::assemble(rocket, TIME_STEP, StepAccounting::default())
    }

    fn assemble(rocket: Rocket, dt: f64, accounting: StepAccounting) -> Self {
        let initial_state = rocket.state();
        let last_status = rocket.status();
        SimulationDriver {
            rocket,
            initial_state,
            dt,
            accounting,
            sim_time: 0.0,
            peak_altitude: 0.0,
            steps: 0,
            last_status,
        }
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn rocket_mut(&mut self) -> &mut Rocket {
        &mut self.rocket
    }

    pub fn set_state(&mut self, state: RocketState) {
        self.rocket.set_state(state);
        self.refresh_status();
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn peak_altitude(&self) -> f64 {
        self.peak_altitude
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn status(&self) -> FlightStatus {
        self.rocket.status()
    }

    pub fn score(&self) -> Option<f64> {
        score(self.status(), self.peak_altitude, self.rocket.state().x)
    }

    // Integrates over `elapsed` seconds of wall time with the throttle held.
    // Returns the number of steps actually integrated; once the flight has
    // ended the remaining steps only move the clock.
    pub fn advance(&mut self, elapsed: f64) -> usize {
        let planned = self.accounting.step_count(elapsed, self.dt);
        let mut taken = 0;
        while taken < planned {
            if self.rocket.status().is_terminal() {
                self.rocket.set_thrust([0.0; 3]);
                self.sim_time += (planned - taken) as f64 * self.dt;
                break;
            }
            self.rocket.evolve(self.sim_time, self.dt);
            self.sim_time += self.dt;
            self.steps += 1;
            taken += 1;
            let altitude = self.rocket.state().y;
            if altitude > self.peak_altitude {
                self.peak_altitude = altitude;
            }
        }
        self.refresh_status();
        taken
    }

    // One driver tick: let the autopilot set the throttle, then advance.
    pub fn tick<A: Autopilot + ?Sized>(&mut self, elapsed: f64, autopilot: &mut A) -> usize {
        if !self.status().is_terminal() {
            autopilot.command(self.sim_time, &mut self.rocket);
        }
        self.advance(elapsed)
    }

    pub fn reset(&mut self) {
        self.rocket.set_state(self.initial_state);
        self.rocket.set_thrust([0.0; 3]);
        self.sim_time = 0.0;
        self.peak_altitude = 0.0;
        self.steps = 0;
        self.last_status = self.rocket.status();
        debug!("simulation reset");
    }

    // Reset, then hold the launch attitude with the main engine at hover.
    pub fn reset_balanced(&mut self) {
        self.reset();
        self.rocket.balance_main_thrust();
        debug!(main = self.rocket.thrust().get(Nozzle::Main), "main engine balanced");
    }

    fn refresh_status(&mut self) {
        let status = self.rocket.status();
        if status != self.last_status {
            let state = self.rocket.state();
            self.last_status = status;
            if let Some(score) = self.score() {
                info!(
                    ?status,
                    time = self.sim_time,
                    x = state.x,
                    peak = self.peak_altitude,
                    score,
                    "flight ended"
                );
            }
        }
    }
}
