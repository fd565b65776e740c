pub mod aerodynamics;
pub mod dynamics;
pub mod integrator;
pub mod terminal;
