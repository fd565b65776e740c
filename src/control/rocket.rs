use std::ops::{Add, Mul};

use tracing::debug;

use crate::constants::LAUNCH_CLEARANCE;
use crate::errors::SimulationError;
use crate::trajectory_system::{
    integrator::rk4_step,
    terminal::{self, FlightStatus},
};
use crate::utils::vector2d::Vector2D;

use super::{
    environment::Environment,
    propulsion::{Nozzle, Throttle},
    structure::RocketParameters,
};

// The integrated state vector: `[mass, x, y, vx, vy, theta, omega]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub theta: f64,
    pub omega: f64,
}

impl RocketState {
    pub const LEN: usize = 7;

    pub fn initial(params: &RocketParameters) -> Self {
        RocketState {
            mass: params.wet_mass(),
            x: 0.0,
            y: params.geometry.half_length() + LAUNCH_CLEARANCE,
            vx: 0.0,
            vy: 0.0,
            theta: std::f64::consts::FRAC_PI_2,
            omega: 0.0,
        }
    }

    pub fn to_array(&self) -> [f64; 7] {
        [
            self.mass, self.x, self.y, self.vx, self.vy, self.theta, self.omega,
        ]
    }

    pub fn from_array(s: [f64; 7]) -> Self {
        RocketState {
            mass: s[0],
            x: s[1],
            y: s[2],
            vx: s[3],
            vy: s[4],
            theta: s[5],
            omega: s[6],
        }
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vector2D {
        Vector2D::new(self.vx, self.vy)
    }

    pub fn speed(&self) -> f64 {
        self.velocity().magnitude()
    }

    // State advanced by `h` along `derivative` (one explicit Euler increment).
    pub fn advanced(&self, derivative: &StateDerivative, h: f64) -> Self {
        RocketState {
            mass: self.mass + h * derivative.mass,
            x: self.x + h * derivative.x,
            y: self.y + h * derivative.y,
            vx: self.vx + h * derivative.vx,
            vy: self.vy + h * derivative.vy,
            theta: self.theta + h * derivative.theta,
            omega: self.omega + h * derivative.omega,
        }
    }
}

impl TryFrom<&[f64]> for RocketState {
    type Error = SimulationError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 7] = values.try_into().map_err(|_| {
            SimulationError::InvalidState(format!(
                "expected {} components, got {}",
                RocketState::LEN,
                values.len()
            ))
        })?;
        if let Some(index) = array.iter().position(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidState(format!(
                "component {} is not finite",
                index
            )));
        }
        Ok(RocketState::from_array(array))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateDerivative {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub theta: f64,
    pub omega: f64,
}

impl StateDerivative {
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.mass, self.x, self.y, self.vx, self.vy, self.theta, self.omega,
        ]
    }
}

impl Add for StateDerivative {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        StateDerivative {
            mass: self.mass + other.mass,
            x: self.x + other.x,
            y: self.y + other.y,
            vx: self.vx + other.vx,
            vy: self.vy + other.vy,
            theta: self.theta + other.theta,
            omega: self.omega + other.omega,
        }
    }
}

impl Mul<f64> for StateDerivative {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        StateDerivative {
            mass: self.mass * scalar,
            x: self.x * scalar,
            y: self.y * scalar,
            vx: self.vx * scalar,
            vy: self.vy * scalar,
            theta: self.theta * scalar,
            omega: self.omega * scalar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn as_array(&self) -> [f64; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }

    pub fn with_origin(&self) -> Self {
        BoundingBox {
            xmin: self.xmin.min(0.0),
            xmax: self.xmax.max(0.0),
            ymin: self.ymin.min(0.0),
            ymax: self.ymax.max(0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rocket {
    params: RocketParameters,
    environment: Environment,
    state: RocketState,
    throttle: Throttle,
}

impl Default for Rocket {
    fn default() -> Self {
        let params = RocketParameters::default();
        Rocket {
            state: RocketState::initial(&params),
            params,
            environment: Environment::default(),
            throttle: Throttle::OFF,
        }
    }
}

impl Rocket {
    pub fn new(params: RocketParameters, environment: Environment) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Rocket {
            state: RocketState::initial(&params),
            params,
            environment,
            throttle: Throttle::OFF,
        })
    }

    pub fn params(&self) -> &RocketParameters {
        &self.params
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn state(&self) -> RocketState {
        self.state
    }

    pub fn set_state(&mut self, state: RocketState) {
        self.state = state;
    }

    pub fn thrust(&self) -> Throttle {
        self.throttle
    }

    pub fn set_thrust(&mut self, u: [f64; 3]) {
        self.throttle = Throttle::from_array(u);
    }

    pub fn main_thrust_inc(&mut self, delta: f64) {
        self.throttle.increment(Nozzle::Main, delta);
    }

    pub fn left_thrust_inc(&mut self, delta: f64) {
        self.throttle.increment(Nozzle::Left, delta);
    }

    pub fn right_thrust_inc(&mut self, delta: f64) {
        self.throttle.increment(Nozzle::Right, delta);
    }

    pub fn reset_left_right(&mut self) {
        self.throttle.reset_left_right();
    }

    // Sets the main engine to the hover throttle for the current mass.
    pub fn balance_main_thrust(&mut self) {
        let balance = self.params.hover_throttle(self.state.mass);
        self.throttle.set(Nozzle::Main, balance);
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.state.mass <= self.params.dry_mass
    }

    pub fn fuel_fraction(&self) -> f64 {
        if self.params.propellant_mass > 0.0 {
            (self.state.mass - self.params.dry_mass) / self.params.propellant_mass
        } else {
            0.0
        }
    }

    pub fn is_into_ground(&self) -> bool {
        terminal::is_into_ground(&self.state, &self.params)
    }

    pub fn is_landed(&self) -> bool {
        terminal::is_landed(&self.state, &self.params)
    }

    pub fn status(&self) -> FlightStatus {
        terminal::classify(&self.state, &self.params)
    }

    pub fn bbox_loose(&self) -> BoundingBox {
        let margin = self.params.geometry.half_length() + self.params.geometry.diameter() / 2.0;
        BoundingBox {
            xmin: self.state.x - margin,
            xmax: self.state.x + margin,
            ymin: self.state.y - margin,
            ymax: self.state.y + margin,
        }
    }

    // Advances the rocket by one fixed step with the current throttle held.
    // A crashed or landed rocket is frozen: the throttle is cut and the state
    // is left untouched.
    pub fn evolve(&mut self, t: f64, dt: f64) {
        if self.status().is_terminal() {
            self.throttle = Throttle::OFF;
            return;
        }

        let had_fuel = !self.is_out_of_fuel();
        let mut next = rk4_step(
            t,
            dt,
            &self.state,
            &self.throttle,
            &self.params,
            &self.environment,
        );
        if next.mass < self.params.dry_mass {
            next.mass = self.params.dry_mass;
        }
        self.state = next;

        if had_fuel && self.is_out_of_fuel() {
            debug!(time = t + dt, "propellant exhausted");
        }
    }
}
