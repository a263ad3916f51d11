use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::Orientation;

/// A point in the plane, x to the right and y up.
///
/// Equality is exact coordinate equality. It is only meaningful for
/// duplicate detection of sampled points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> &f64 {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &f64 {
    &self.array[1]
  }

  pub fn as_vec(&self) -> &Vector {
    self.into()
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Linear interpolation towards `other`, computed as `self + (other - self) * t`.
  ///
  /// Coordinates that are equal in both endpoints are reproduced exactly.
  pub fn lerp(&self, other: &Point, t: f64) -> Point {
    self + &((other - self) * t)
  }

  pub fn distance(&self, other: &Point) -> f64 {
    (other - self).norm()
  }

  /// Lexicographic order on (x, y). NaN sorts after every number.
  pub fn lex_cmp(&self, other: &Point) -> Ordering {
    self.lex_key().cmp(&other.lex_key())
  }

  pub(crate) fn lex_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (OrderedFloat(self.array[0]), OrderedFloat(self.array[1]))
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<(i32, i32)> for Point {
  fn from(point: (i32, i32)) -> Point {
    Point {
      array: [f64::from(point.0), f64::from(point.1)],
    }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;
