pub mod environment;
pub mod guidance;
pub mod programs;
pub mod propulsion;
pub mod rocket;
pub mod structure;
