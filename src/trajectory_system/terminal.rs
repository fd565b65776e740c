use crate::constants::{
    IMPACT_SPEED_SCALE, LANDING_HEIGHT_TOLERANCE, LANDING_SPEED_LIMIT, LANDING_SPIN_LIMIT,
    LANDING_TILT_TOLERANCE,
};
use crate::control::{rocket::RocketState, structure::RocketParameters};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightStatus {
    InFlight,
    Crashed,
    Landed,
}

impl FlightStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, FlightStatus::InFlight)
    }
}

// Has the body penetrated the ground further than the impact allowance?
// The allowance grows with speed, gets an extra half diameter when the nose
// is below the tail, and vanishes for a vertical body, so an upright
// touchdown has to stay on the surface while a flat impact is given some
// depth before it counts.
pub fn is_into_ground(state: &RocketState, params: &RocketParameters) -> bool {
    let geometry = &params.geometry;
    let reach = state.theta.sin() * geometry.half_length();
    let y_nose = state.y + reach;
    let y_tail = state.y - reach;

    let mut depth = geometry.half_length() * (1.0 - (-state.speed() / IMPACT_SPEED_SCALE).exp());
    if y_nose < y_tail {
        depth += geometry.diameter() / 2.0;
    }
    depth *= state.theta.sin().abs();

    y_nose < -depth || y_tail < -depth
}

pub fn is_landed(state: &RocketState, params: &RocketParameters) -> bool {
    let clearance = state.y - params.geometry.half_length();
    clearance > 0.0
        && clearance < LANDING_HEIGHT_TOLERANCE
        && state.theta.cos().abs() < LANDING_TILT_TOLERANCE
        && state.speed() < LANDING_SPEED_LIMIT
        && state.omega.abs() < LANDING_SPIN_LIMIT
}

// Crash wins if both predicates hold.
pub fn classify(state: &RocketState, params: &RocketParameters) -> FlightStatus {
    if is_into_ground(state, params) {
        FlightStatus::Crashed
    } else if is_landed(state, params) {
        FlightStatus::Landed
    } else {
        FlightStatus::InFlight
    }
}
