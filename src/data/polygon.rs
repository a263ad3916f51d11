use std::collections::BTreeSet;

use crate::data::Point;
use crate::data::Vector;
use crate::Error;

mod iter;
pub use iter::*;

mod convex;
pub use convex::*;

mod braille;
pub use braille::BraillePrinter;

/// Distance (in coordinate units) within which a point counts as lying on an edge.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// A simple polygon stored as an implicitly closed ring of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) vertices: Vec<Point>,
}

impl Polygon {
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  pub fn new(points: Vec<Point>) -> Result<Polygon, Error> {
    let mut p = Self::new_unchecked(points);
    p.ensure_ccw();
    p.validate()?;
    Ok(p)
  }

  // Validate that the ring is usable as a polygon: no repeated vertices,
  // at least three of them, counter-clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      if !seen.insert(pt.lex_key()) {
        return Err(Error::DuplicatePoints);
      }
    }

    self.validate_weakly()
  }

  pub fn validate_weakly(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if self.signed_area_2x() <= 0.0 {
      return Err(Error::ClockWiseViolation);
    }
    Ok(())
  }

  /// Arithmetic mean of the vertex coordinates.
  ///
  /// Unlike the area centroid this is well defined for every non-empty
  /// ring, including degenerate ones.
  pub fn vertex_centroid(&self) -> Option<Point> {
    vertex_centroid(&self.vertices)
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| edge.src.as_vec().cross(edge.dst.as_vec()))
      .sum()
  }

  /// Reverse the vertex order if the ring is clockwise.
  pub fn ensure_ccw(&mut self) {
    if self.signed_area_2x() < 0.0 {
      self.vertices.reverse();
    }
  }

  /// Smallest and largest coordinates, or `None` for an empty ring.
  pub fn bounding_box(&self) -> Option<(Point, Point)> {
    let first = *self.vertices.first()?;
    Some(self.iter().fold((first, first), |(min, max), pt| {
      (
        Point::new([min[0].min(pt[0]), min[1].min(pt[1])]),
        Point::new([max[0].max(pt[0]), max[1].max(pt[1])]),
      )
    }))
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point {
    &self.vertices[idx]
  }

  pub fn points(&self) -> &[Point] {
    &self.vertices
  }

  pub fn into_points(self) -> Vec<Point> {
    self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  pub fn cursor(&self, position: usize) -> Cursor<'_> {
    Cursor {
      polygon: self,
      position,
    }
  }

  pub fn iter_boundary(&self) -> CursorIter<'_> {
    CursorIter {
      polygon: self,
      next: 0,
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      iter: self.iter_boundary(),
    }
  }

  /// The closed outline: every vertex followed by the first one again.
  ///
  /// Suitable for line-strip primitives that don't close loops themselves.
  pub fn outline(&self) -> impl Iterator<Item = &Point> + '_ {
    self.vertices.iter().chain(self.vertices.first())
  }

  /// Vertex markers, one per vertex.
  pub fn markers(&self) -> &[Point] {
    &self.vertices
  }

  /// Same ring of points, possibly starting at a different vertex.
  pub fn equals(&self, other: &Polygon) -> bool {
    let n = self.len();
    if n != other.len() {
      return false;
    }
    if n == 0 {
      return true;
    }
    (0..n).any(|offset| (0..n).all(|i| self.vertices[(i + offset) % n] == other.vertices[i]))
  }
}

pub(crate) fn vertex_centroid(points: &[Point]) -> Option<Point> {
  if points.is_empty() {
    return None;
  }
  let total: Vector = points.iter().map(|pt| *pt.as_vec()).sum();
  Some(Point::from(total / points.len() as f64))
}

impl From<Polygon> for Vec<Point> {
  fn from(polygon: Polygon) -> Vec<Point> {
    polygon.vertices
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn square() -> Vec<Point> {
    vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([2.0, 2.0]),
      Point::new([0.0, 2.0]),
    ]
  }

  #[test]
  fn new_orients_ccw() {
    let mut pts = square();
    pts.reverse();
    let poly = assert_ok!(Polygon::new(pts));
    assert_eq!(poly.signed_area(), 4.0);
    assert!(poly.equals(&Polygon::new_unchecked(square())));
  }

  #[test]
  fn validation_errors() {
    assert_err_eq!(
      Polygon::new(square()[..2].to_vec()),
      Error::InsufficientVertices
    );
    let mut dup = square();
    dup.push(Point::new([2.0, 0.0]));
    assert_err_eq!(Polygon::new(dup), Error::DuplicatePoints);
    let mut cw = Polygon::new_unchecked(square());
    cw.vertices.reverse();
    assert_err_eq!(cw.validate(), Error::ClockWiseViolation);
  }

  #[test]
  fn outline_is_closed() {
    let poly = Polygon::new_unchecked(square());
    let outline: Vec<&Point> = poly.outline().collect();
    assert_eq!(outline.len(), 5);
    assert_eq!(outline.first(), outline.last());
    assert_eq!(poly.markers().len(), 4);
    assert_eq!(Polygon::new_unchecked(vec![]).outline().count(), 0);
  }

  #[test]
  fn centroid_and_bbox() {
    let poly = Polygon::new_unchecked(square());
    assert_eq!(poly.vertex_centroid(), Some(Point::new([1.0, 1.0])));
    assert_eq!(
      poly.bounding_box(),
      Some((Point::new([0.0, 0.0]), Point::new([2.0, 2.0])))
    );
    assert_eq!(Polygon::new_unchecked(vec![]).bounding_box(), None);
  }

  #[test]
  fn equals_ignores_rotation() {
    let poly = Polygon::new_unchecked(square());
    let mut rotated = square();
    rotated.rotate_left(3);
    assert!(poly.equals(&Polygon::new_unchecked(rotated)));
    let mut swapped = square();
    swapped.swap(0, 1);
    assert!(!poly.equals(&Polygon::new_unchecked(swapped)));
  }
}
