use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
        }
    }
}

impl Environment {
    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    // Ambient wind. Calm everywhere for now; disturbances would plug in here.
    pub fn wind(&self, _time: f64, _position: Vector2D) -> Vector2D {
        Vector2D::ZERO
    }
}
