use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    // Unit vector along a heading angle (radians, counter-clockwise from +x).
    pub fn from_heading(theta: f64) -> Self {
        Vector2D::new(theta.cos(), theta.sin())
    }

    pub fn perpendicular(&self) -> Self {
        Vector2D::new(-self.y, self.x)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        Vector2D::new(self * vector.x, self * vector.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_heading_and_perpendicular_form_right_handed_frame() {
        let along = Vector2D::from_heading(PI / 3.0);
        let across = along.perpendicular();

        assert_relative_eq!(along.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(across.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(along.dot(&across), 0.0, epsilon = 1e-12);
        // cross product along x across is +1
        assert_relative_eq!(along.x * across.y - along.y * across.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_upright_heading_points_up() {
        let along = Vector2D::from_heading(PI / 2.0);
        assert_relative_eq!(along.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(along.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(along.perpendicular().x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -1.0);
        assert_eq!(a + b, Vector2D::new(4.0, 1.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a.dot(&b), 1.0);
    }
}
