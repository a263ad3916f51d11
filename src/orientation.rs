use crate::data::Point;

/// Relative tolerance used when deciding whether a turn is colinear.
///
/// Interpolated boundary points are only exact up to rounding, so a turn at
/// such a point may come out marginally clockwise. A turn counts as colinear
/// when `|cross| <= TOLERANCE * |pq| * |qr|`.
pub const TOLERANCE: f64 = 1e-9;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// Twice the signed area of the triangle `o, a, b`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise, y pointing up).
/// The sign is exact; it is computed with the adaptive `orient2d` predicate.
pub fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
  geometry_predicates::predicates::orient2d(o.array, a.array, b.array)
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use convex_raster::data::Point;
  /// # use convex_raster::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::from_cross(cross(p1, p2, p3), 0.0)
  }

  /// Like [`Orientation::new`] but turns within [`TOLERANCE`] (relative to the
  /// lengths of both edges) are reported as [`Orientation::CoLinear`].
  pub fn new_with_tolerance(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let scale = p1.distance(p2) * p2.distance(p3);
    Orientation::from_cross(cross(p1, p2, p3), TOLERANCE * scale)
  }

  fn from_cross(value: f64, slack: f64) -> Orientation {
    if value > slack {
      Orientation::CounterClockWise
    } else if value < -slack {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
