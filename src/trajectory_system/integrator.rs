use crate::control::{
    environment::Environment, propulsion::Throttle, rocket::RocketState,
    structure::RocketParameters,
};

use super::dynamics::derivatives;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

// The throttle is held constant over all four stages. No step-size control
// is done; `dt` has to be small enough for the rotational dynamics.
pub fn rk4_step(
    t: f64,
    dt: f64,
    state: &RocketState,
    throttle: &Throttle,
    params: &RocketParameters,
    environment: &Environment,
) -> RocketState {
    let half = 0.5 * dt;
    let k1 = derivatives(t, state, throttle, params, environment);
    let k2 = derivatives(t + half, &state.advanced(&k1, half), throttle, params, environment);
    let k3 = derivatives(t + half, &state.advanced(&k2, half), throttle, params, environment);
    let k4 = derivatives(t + dt, &state.advanced(&k3, dt), throttle, params, environment);

    let slope = k1 * (1.0 / 6.0) + k2 * (1.0 / 3.0) + k3 * (1.0 / 3.0) + k4 * (1.0 / 6.0);
    state.advanced(&slope, dt)
}
