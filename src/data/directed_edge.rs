use super::Point;
use super::Vector;
use crate::orientation::cross;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, Clone, Copy, PartialEq)]
// Directed edge from A to B, including A and excluding B.
pub struct DirectedEdge<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl<'a> DirectedEdge<'a> {
  pub fn new(src: &'a Point, dst: &'a Point) -> DirectedEdge<'a> {
    DirectedEdge { src, dst }
  }

  pub fn vector(&self) -> Vector {
    self.dst - self.src
  }

  pub fn length(&self) -> f64 {
    self.src.distance(self.dst)
  }

  pub fn is_horizontal(&self) -> bool {
    self.src.y_coord() == self.dst.y_coord()
  }

  /// Signed distance of `pt` from the supporting line. Positive on the left.
  ///
  /// Zero-length edges report zero for every point.
  pub fn signed_distance(&self, pt: &Point) -> f64 {
    let length = self.length();
    if length == 0.0 {
      return 0.0;
    }
    cross(self.src, self.dst, pt) / length
  }
}
