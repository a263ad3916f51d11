use std::ops::Add;
use std::ops::AddAssign;

use super::Point;
use super::Vector;

// &point + &vector = point
impl<'a, 'b> Add<&'a Vector> for &'b Point {
  type Output = Point;

  fn add(self: &'b Point, other: &'a Vector) -> Self::Output {
    Point {
      array: [self.array[0] + other.0[0], self.array[1] + other.0[1]],
    }
  }
}

// point + vector = point
impl Add<Vector> for Point {
  type Output = Point;

  fn add(self: Point, other: Vector) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point += &vector
impl<'a> AddAssign<&'a Vector> for Point {
  fn add_assign(&mut self, other: &'a Vector) {
    self.array[0] += other.0[0];
    self.array[1] += other.0[1];
  }
}

// point += vector
impl AddAssign<Vector> for Point {
  fn add_assign(&mut self, other: Vector) {
    self.add_assign(&other)
  }
}
