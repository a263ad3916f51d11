use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::Point;
use crate::data::PointLocation;
use crate::Error;
use crate::Orientation;

use super::Polygon;
use super::BOUNDARY_EPSILON;

/// A counter-clockwise polygon in which no vertex turns clockwise.
///
/// Colinear vertices are allowed: padding a hull up to a vertex count
/// places extra vertices on its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConvex(Polygon);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl PolygonConvex {
  /// $O(n)$ Validate that a polygon is convex.
  pub fn new(poly: Polygon) -> Result<PolygonConvex, Error> {
    let convex = PolygonConvex(poly);
    convex.validate()?;
    Ok(convex)
  }

  /// $O(1)$ Assume that a polygon is convex.
  ///
  /// Only checked in debug builds.
  pub fn new_unchecked(poly: Polygon) -> PolygonConvex {
    let convex = PolygonConvex(poly);
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    locate_ccw(&self.0, pt)
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    self.0.validate()?;
    for cursor in self.0.iter_boundary() {
      if cursor.turn() == Orientation::ClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon {
    self.into()
  }
}

// Side test against every directed edge of a counter-clockwise ring. The
// interior is on the left of each edge; points within BOUNDARY_EPSILON of an
// edge line count as on the boundary.
pub(crate) fn locate_ccw(polygon: &Polygon, pt: &Point) -> PointLocation {
  if polygon.len() < 3 {
    return PointLocation::Outside;
  }
  let mut on_boundary = false;
  for edge in polygon.iter_boundary_edges() {
    let distance = edge.signed_distance(pt);
    if distance < -BOUNDARY_EPSILON {
      return PointLocation::Outside;
    }
    if distance <= BOUNDARY_EPSILON {
      on_boundary = true;
    }
  }
  if on_boundary {
    PointLocation::OnBoundary
  } else {
    PointLocation::Inside
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl Deref for PolygonConvex {
  type Target = Polygon;
  fn deref(&self) -> &Self::Target {
    self.polygon()
  }
}

impl From<PolygonConvex> for Polygon {
  fn from(convex: PolygonConvex) -> Polygon {
    convex.0
  }
}

impl<'a> From<&'a PolygonConvex> for &'a Polygon {
  fn from(convex: &'a PolygonConvex) -> &'a Polygon {
    &convex.0
  }
}
