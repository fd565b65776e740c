// Physical Constants
pub const GRAVITY: f64 = 9.82; // m/s²

// Propulsion (main, left, right)
pub const SPECIFIC_IMPULSE: [f64; 3] = [100.0, 50.0, 50.0]; // s
pub const MAX_MASS_FLOW: [f64; 3] = [20.0, 1.0, 1.0]; // kg/s

// Rocket Constants
pub const ROCKET_LENGTH: f64 = 10.0; // m
pub const ROCKET_DIAMETER: f64 = 1.0; // m
pub const DRY_MASS: f64 = 250.0; // kg
pub const PROPELLANT_MASS: f64 = 250.0; // kg

// Aerodynamic Constants
pub const DRAG_COEFFICIENT_FORWARD: f64 = 0.40;
pub const DRAG_COEFFICIENT_BACKWARD: f64 = 2.00;
pub const LIFT_COEFFICIENT: f64 = 1.17;

// Environmental Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 10.4e3; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.005; // s
pub const REFRESH_RATE: f64 = 50.0; // ticks per second
pub const MAX_SIMULATION_TIME: f64 = 600.0; // s
pub const MAX_STEPS_PER_TICK: usize = 100_000; // integrator steps per driver tick
pub const LAUNCH_CLEARANCE: f64 = 0.05; // m above resting height

// Terminal tolerances
pub const LANDING_HEIGHT_TOLERANCE: f64 = 0.025; // m
pub const LANDING_TILT_TOLERANCE: f64 = 0.05; // |cos(theta)|
pub const LANDING_SPEED_LIMIT: f64 = 2.0; // m/s
pub const LANDING_SPIN_LIMIT: f64 = 0.10; // rad/s
pub const IMPACT_SPEED_SCALE: f64 = 100.0; // m/s

// Stabilizer
pub const STABILIZER_THRUST: f64 = 0.50;
pub const STABILIZER_HEADING_GUARD: f64 = 0.010 * 2.0 * std::f64::consts::PI / 360.0; // rad
pub const STABILIZER_RATE_GUARD: f64 = 0.030; // rad/s
