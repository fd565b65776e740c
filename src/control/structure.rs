use crate::constants::{
    DRY_MASS, GRAVITY, MAX_MASS_FLOW, PROPELLANT_MASS, ROCKET_DIAMETER, ROCKET_LENGTH,
    SPECIFIC_IMPULSE,
};
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::Aerodynamics;

use super::propulsion::Nozzle;

// Derived quantities are computed once in `Geometry::new`; the fields
// are private so a changed length or diameter always goes through the
// constructor again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    length: f64,
    diameter: f64,
    reference_area: f64,
    cross_section: f64,
    pressure_offset: f64,
    thrust_arm: f64,
}

impl Geometry {
    pub fn new(length: f64, diameter: f64) -> Self {
        let radius = diameter / 2.0;
        Geometry {
            length,
            diameter,
            reference_area: length * diameter,
            cross_section: std::f64::consts::PI * radius * radius,
            pressure_offset: diameter,
            thrust_arm: length * 0.5,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    // Side-on area `S = L * d`, used for lift.
    pub fn reference_area(&self) -> f64 {
        self.reference_area
    }

    // Frontal area `A = pi * (d/2)^2`, used for drag.
    pub fn cross_section(&self) -> f64 {
        self.cross_section
    }

    pub fn pressure_offset(&self) -> f64 {
        self.pressure_offset
    }

    pub fn thrust_arm(&self) -> f64 {
        self.thrust_arm
    }

    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }

    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        mass * (self.length * self.length / 12.0 + self.diameter * self.diameter / 16.0)
    }

    pub fn with_length(&self, length: f64) -> Self {
        Geometry::new(length, self.diameter)
    }

    pub fn with_diameter(&self, diameter: f64) -> Self {
        Geometry::new(self.length, diameter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocketParameters {
    pub specific_impulse: [f64; 3],
    pub max_mass_flow: [f64; 3],
    pub geometry: Geometry,
    pub dry_mass: f64,
    pub propellant_mass: f64,
    pub gravity: f64,
    pub aerodynamics: Aerodynamics,
}

impl Default for RocketParameters {
    fn default() -> Self {
        RocketParameters {
            specific_impulse: SPECIFIC_IMPULSE,
            max_mass_flow: MAX_MASS_FLOW,
            geometry: Geometry::new(ROCKET_LENGTH, ROCKET_DIAMETER),
            dry_mass: DRY_MASS,
            propellant_mass: PROPELLANT_MASS,
            gravity: GRAVITY,
            aerodynamics: Aerodynamics::default(),
        }
    }
}

impl RocketParameters {
    pub fn wet_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass
    }

    pub fn isp(&self, nozzle: Nozzle) -> f64 {
        self.specific_impulse[nozzle.index()]
    }

    pub fn mdot_max(&self, nozzle: Nozzle) -> f64 {
        self.max_mass_flow[nozzle.index()]
    }

    pub fn max_thrust(&self, nozzle: Nozzle) -> f64 {
        self.gravity * self.isp(nozzle) * self.mdot_max(nozzle)
    }

    // Main-engine throttle at which thrust equals weight for `mass`, capped at 1.
    pub fn hover_throttle(&self, mass: f64) -> f64 {
        let balance = mass / (self.isp(Nozzle::Main) * self.mdot_max(Nozzle::Main));
        balance.min(1.0)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimulationError::InvalidParameter(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )))
            }
        };
        let non_negative = |name: &str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SimulationError::InvalidParameter(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )))
            }
        };

        positive("length", self.geometry.length())?;
        positive("diameter", self.geometry.diameter())?;
        positive("dry mass", self.dry_mass)?;
        positive("gravity", self.gravity)?;
        non_negative("propellant mass", self.propellant_mass)?;
        for nozzle in Nozzle::ALL {
            non_negative("specific impulse", self.isp(nozzle))?;
            non_negative("max mass flow", self.mdot_max(nozzle))?;
        }
        non_negative("forward drag coefficient", self.aerodynamics.drag_forward)?;
        non_negative("backward drag coefficient", self.aerodynamics.drag_backward)?;
        non_negative("lift coefficient", self.aerodynamics.lift)?;
        Ok(())
    }
}
