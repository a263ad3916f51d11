use num_traits::Zero;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Vector {
  pub fn norm(&self) -> f64 {
    self.0[0].hypot(self.0[1])
  }

  /// 2D cross product (z component of the 3D cross product).
  pub fn cross(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  /// Angle from the positive x axis, in `(-pi, pi]`.
  pub fn angle(&self) -> f64 {
    self.0[1].atan2(self.0[0])
  }
}

impl<'a> From<&'a Point> for &'a Vector {
  fn from(point: &'a Point) -> &'a Vector {
    // Safe because both types are #[repr(transparent)] wrappers around [f64; 2].
    unsafe { &*(point as *const Point as *const Vector) }
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl Add for Vector {
  type Output = Vector;
  fn add(self, other: Vector) -> Vector {
    Vector([self.0[0] + other.0[0], self.0[1] + other.0[1]])
  }
}

impl Mul<f64> for Vector {
  type Output = Vector;
  fn mul(self, scale: f64) -> Vector {
    Vector([self.0[0] * scale, self.0[1] * scale])
  }
}

impl Div<f64> for Vector {
  type Output = Vector;
  fn div(self, scale: f64) -> Vector {
    Vector([self.0[0] / scale, self.0[1] / scale])
  }
}

impl Neg for Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    Vector([-self.0[0], -self.0[1]])
  }
}

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0, 0.0])
  }
  fn is_zero(&self) -> bool {
    self.0[0] == 0.0 && self.0[1] == 0.0
  }
}

impl Sum for Vector {
  fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
    iter.fold(Vector::zero(), Add::add)
  }
}
