use crate::{
    control::{
        environment::Environment,
        propulsion::{propulsion_output, Throttle},
        rocket::{RocketState, StateDerivative},
        structure::RocketParameters,
    },
    utils::vector2d::Vector2D,
};

use super::aerodynamics::BodyAirflow;

// Equations of motion for the planar rigid rocket.
// Forces modeled:
//   1. Thrust: main engine along the body axis, side thrusters as a
//      differential force across it plus a yaw torque about the tail
//   2. Gravity: uniform, `-mass * g0` along world-up
//   3. Drag: along the body axis, forward/backward coefficient blend
//   4. Lift: across the body axis, acting at the center of pressure
// `t` does not enter any force term yet; it is passed to the wind hook.
pub fn derivatives(
    t: f64,
    state: &RocketState,
    throttle: &Throttle,
    params: &RocketParameters,
    environment: &Environment,
) -> StateDerivative {
    let mass = state.mass;
    let geometry = &params.geometry;

    let along = Vector2D::from_heading(state.theta);
    let across = along.perpendicular();

    let wind = environment.wind(t, state.position());
    let airflow = BodyAirflow::new(state.velocity(), wind, along, across);

    let inertia = geometry.moment_of_inertia(mass);
    let air_density = environment.air_density(state.y);

    let propulsion = propulsion_output(mass, throttle, params);
    let aero = params.aerodynamics.forces(&airflow, air_density, geometry);

    // thrust & gravity
    let differential = propulsion.differential();
    let mut force = along * propulsion.main + across * differential
        - Vector2D::new(0.0, mass * params.gravity);
    let mut torque = -differential * geometry.thrust_arm();

    // aerodynamics
    force = force - along * aero.drag - across * aero.lift;
    torque += geometry.pressure_offset() * aero.lift;

    let angular_acceleration = if inertia > 0.0 { torque / inertia } else { 0.0 };

    StateDerivative {
        mass: propulsion.mass_flow,
        x: state.vx,
        y: state.vy,
        vx: force.x / mass,
        vy: force.y / mass,
        theta: state.omega,
        omega: angular_acceleration,
    }
}
