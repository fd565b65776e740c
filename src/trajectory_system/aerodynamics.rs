use crate::constants::{DRAG_COEFFICIENT_BACKWARD, DRAG_COEFFICIENT_FORWARD, LIFT_COEFFICIENT};
use crate::control::structure::Geometry;
use crate::utils::vector2d::Vector2D;

// Velocity relative to the surrounding air, resolved in the body frame.
// `along` is positive when the rocket moves nose-first, `across` is the
// component along the body's left-hand perpendicular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAirflow {
    pub along: f64,
    pub across: f64,
}

impl BodyAirflow {
    pub fn new(velocity: Vector2D, wind: Vector2D, along_axis: Vector2D, across_axis: Vector2D) -> Self {
        let relative_air = wind - velocity;
        BodyAirflow {
            along: -along_axis.dot(&relative_air),
            across: -across_axis.dot(&relative_air),
        }
    }

    pub fn speed(&self) -> f64 {
        (self.along * self.along + self.across * self.across).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub drag: f64,
    pub lift: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_forward: f64,
    pub drag_backward: f64,
    pub lift: f64,
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics::new(
            DRAG_COEFFICIENT_FORWARD,
            DRAG_COEFFICIENT_BACKWARD,
            LIFT_COEFFICIENT,
        )
    }
}

impl Aerodynamics {
    pub fn new(drag_forward: f64, drag_backward: f64, lift: f64) -> Self {
        Aerodynamics {
            drag_forward,
            drag_backward,
            lift,
        }
    }

    // `v^2 * C_D`: forward coefficient when flying nose-first, backward
    // coefficient tail-first, blended by the along-axis share of the flow.
    pub fn drag_term(&self, airflow: &BodyAirflow) -> f64 {
        let z1 = airflow.along;
        let mean = (self.drag_backward + self.drag_forward) / 2.0;
        let skew = (self.drag_backward - self.drag_forward) / 2.0;
        (mean * airflow.speed() - skew * z1) * z1
    }

    // `v^2 * C_L`, quadratic and sign-preserving in the cross flow.
    pub fn lift_term(&self, airflow: &BodyAirflow) -> f64 {
        self.lift * airflow.speed() * airflow.across
    }

    pub fn forces(&self, airflow: &BodyAirflow, air_density: f64, geometry: &Geometry) -> AeroForces {
        AeroForces {
            drag: 0.5 * air_density * self.drag_term(airflow) * geometry.cross_section(),
            lift: 0.5 * air_density * self.lift_term(airflow) * geometry.reference_area(),
        }
    }
}
