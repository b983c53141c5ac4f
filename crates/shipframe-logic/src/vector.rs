//! 2D vector value type shared by every pipeline stage.

use serde::{Deserialize, Serialize};

/// Immutable 2D vector (value semantics, every operation returns a new one).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// Fixed "up" axis the forward vector is aligned against.
    pub const UP: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D scalar cross product (z component of the 3D cross).
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn distance(self, other: Vector2) -> f64 {
        self.sub(other).magnitude()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Vector2 {
        let mag = self.magnitude();
        if mag == 0.0 {
            Vector2::ZERO
        } else {
            self.scale(1.0 / mag)
        }
    }

    pub fn lerp(self, other: Vector2, t: f64) -> Vector2 {
        self.add(other.sub(self).scale(t))
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Signed angle that rotates `self` onto `other` (counter-clockwise positive).
    pub fn angle_to(self, other: Vector2) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vector2::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!((v.x - 0.0).abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_angle_to_is_signed() {
        let right = Vector2::new(1.0, 0.0);
        let up = Vector2::UP;
        assert!((right.angle_to(up) - std::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!((up.angle_to(right) + std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_rotate_by_angle_to_aligns() {
        let a = Vector2::new(3.0, -2.0);
        let b = Vector2::new(-1.0, 4.0);
        let rotated = a.rotate(a.angle_to(b)).normalize();
        let target = b.normalize();
        assert!((rotated.x - target.x).abs() < 1e-9);
        assert!((rotated.y - target.y).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector2::new(1.0, 2.0));
    }
}
