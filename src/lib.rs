pub mod constants;
pub mod control;
pub mod errors;
pub mod simulation_system;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::Environment;
pub use control::guidance::{Autopilot, ManualControl, Stabilizer};
pub use control::programs::ThrustProgram;
pub use control::propulsion::{Nozzle, Throttle};
pub use control::rocket::{BoundingBox, Rocket, RocketState, StateDerivative};
pub use control::structure::{Geometry, RocketParameters};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::dynamics::derivatives;
pub use trajectory_system::integrator::rk4_step;
pub use trajectory_system::terminal::{classify, is_into_ground, is_landed, FlightStatus};

// Re-export commonly used items from simulation_system
pub use simulation_system::driver::{score, SimulationDriver, StepAccounting};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
