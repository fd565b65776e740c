use tracing::debug;

use crate::constants::{STABILIZER_HEADING_GUARD, STABILIZER_RATE_GUARD, STABILIZER_THRUST};

use super::rocket::Rocket;

// Anything that sets the throttle once per driver tick.
// Implementations go through the rocket's throttle setters only; the state
// vector is read, never written.
pub trait Autopilot {
    fn command(&mut self, sim_time: f64, rocket: &mut Rocket);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManualControl;

impl Autopilot for ManualControl {
    fn command(&mut self, _sim_time: f64, _rocket: &mut Rocket) {}
}

// Bang-bang angular rate suppression using the side thrusters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stabilizer {
    pub theta_ref: f64,
    pub thrust: f64,
    pub heading_guard: f64,
    pub rate_guard: f64,
}

impl Stabilizer {
    pub fn new(theta_ref: f64) -> Self {
        Stabilizer {
            theta_ref,
            thrust: STABILIZER_THRUST,
            heading_guard: STABILIZER_HEADING_GUARD,
            rate_guard: STABILIZER_RATE_GUARD,
        }
    }

    pub fn engage(rocket: &mut Rocket) -> Self {
        rocket.reset_left_right();
        let theta_ref = rocket.state().theta;
        debug!(theta_ref, "stabilizer engaged");
        Stabilizer::new(theta_ref)
    }

    pub fn disengage(self, rocket: &mut Rocket) {
        rocket.reset_left_right();
        debug!("stabilizer disengaged");
    }
}

impl Autopilot for Stabilizer {
    fn command(&mut self, _sim_time: f64, rocket: &mut Rocket) {
        let state = rocket.state();
        let heading_error = state.theta - self.theta_ref;
        if heading_error.abs() <= self.heading_guard {
            return;
        }

        if state.omega > self.rate_guard {
            rocket.right_thrust_inc(self.thrust);
            rocket.left_thrust_inc(-self.thrust);
        } else if state.omega < -self.rate_guard {
            rocket.left_thrust_inc(self.thrust);
            rocket.right_thrust_inc(-self.thrust);
        }
    }
}
