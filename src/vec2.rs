use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A position on the track.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A displacement or a per-turn velocity.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn dist(self, other: Point) -> f64 {
        (other - self).len()
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point {
            x: self.x + v.dx,
            y: self.y + v.dy,
        }
    }
}

impl Vector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Vector { dx, dy }
    }

    /// Unit vector with the same direction. Must not be called on a zero vector.
    pub fn norm(self) -> Vector {
        let len = self.len();
        debug_assert!(len > 0.0, "normalizing a zero-length vector");
        Vector {
            dx: self.dx / len,
            dy: self.dy / len,
        }
    }

    /// Rotated by 90 degrees: `(dx, dy) -> (dy, -dx)`.
    pub fn perpendicular(self) -> Vector {
        Vector {
            dx: self.dy,
            dy: -self.dx,
        }
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    pub fn len(self) -> f64 {
        self.len2().sqrt()
    }

    pub fn len2(self) -> f64 {
        self.dot(self)
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, f: f64) -> Vector {
        Vector {
            dx: self.dx * f,
            dy: self.dy * f,
        }
    }
}

// The referee reads integer coordinates; fractions are truncated.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x as i64, self.y as i64)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dx as i64, self.dy as i64)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
    }

    fn coord() -> impl Strategy<Value = f64> {
        -20000.0..20000.0f64
    }

    #[test]
    fn point_plus_vector() {
        assert_eq!(
            Point::new(3.0, 5.0),
            Point::new(1.0, 2.0) + Vector::new(2.0, 3.0)
        );
        assert_eq!(
            Point::new(3.0, 3.0),
            Point::new(-1.0, 4.0) + Vector::new(4.0, -1.0)
        );
    }

    #[test]
    fn point_minus_point() {
        assert_eq!(
            Vector::new(1.0, 1.0),
            Point::new(2.0, 3.0) - Point::new(1.0, 2.0)
        );
        assert_eq!(
            Vector::new(-5.0, 5.0),
            Point::new(-1.0, 4.0) - Point::new(4.0, -1.0)
        );
    }

    #[test]
    fn vector_len() {
        assert_eq!(2.0, Vector::new(2.0, 0.0).len());
        assert_eq!(4.0, Vector::new(0.0, -4.0).len());
        assert!(close(std::f64::consts::SQRT_2, Vector::new(1.0, 1.0).len()));
        assert_eq!(25.0, Vector::new(3.0, -4.0).len2());
    }

    #[test]
    fn perpendicular_handedness() {
        assert_eq!(Vector::new(0.0, -1.0), Vector::new(1.0, 0.0).perpendicular());
        assert_eq!(Vector::new(3.0, -2.0), Vector::new(2.0, 3.0).perpendicular());
    }

    #[test]
    fn norm_keeps_direction() {
        let v = Vector::new(3.0, 4.0).norm();
        assert!(close(0.6, v.dx));
        assert!(close(0.8, v.dy));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn norm_of_zero_panics_in_debug() {
        Vector::default().norm();
    }

    #[test]
    fn display_truncates() {
        assert_eq!("1 2", Point::new(1.0, 2.0).to_string());
        assert_eq!("92 74", Point::new(92.9, 74.2).to_string());
        assert_eq!("-3 7", Vector::new(-3.7, 7.5).to_string());
    }

    proptest! {
        #[test]
        fn dot_commutes(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
            let (u, v) = (Vector::new(ax, ay), Vector::new(bx, by));
            prop_assert_eq!(u.dot(v), v.dot(u));
        }

        #[test]
        fn perpendicular_is_orthogonal(x in coord(), y in coord()) {
            let u = Vector::new(x, y);
            prop_assert!(u.perpendicular().dot(u).abs() < TOLERANCE);
        }

        #[test]
        fn scaling_scales_len2(x in coord(), y in coord(), f in -100.0..100.0f64) {
            let u = Vector::new(x, y);
            prop_assert!(close((u * f).len2(), u.len2() * f * f));
        }

        #[test]
        fn difference_round_trips(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
            let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
            let back = p2 + (p1 - p2);
            prop_assert!((back.x - p1.x).abs() < TOLERANCE);
            prop_assert!((back.y - p1.y).abs() < TOLERANCE);
        }

        #[test]
        fn norm_has_unit_len(x in coord(), y in coord()) {
            let v = Vector::new(x, y);
            prop_assume!(v.len() > 1e-6);
            prop_assert!(close(v.norm().len(), 1.0));
        }
    }
}
