use std::ops::Sub;

use super::Point;
use super::Vector;

// &point - &point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self: &'b Point, other: &'a Point) -> Self::Output {
    Vector([self.array[0] - other.array[0], self.array[1] - other.array[1]])
  }
}

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self: Point, other: Point) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
