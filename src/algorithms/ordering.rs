use ordered_float::OrderedFloat;

use crate::data::polygon::vertex_centroid;
use crate::data::Point;
use crate::Orientation;

/// $O(n \log n)$ Sort points that lie on a convex boundary into one
/// counter-clockwise traversal.
///
/// Points are sorted by their angle around the vertex centroid (the mean of
/// all points), starting just above the negative x axis. Afterwards every
/// consecutive triple is checked; if clockwise turns outnumber
/// counter-clockwise ones the sequence is reversed. Turns within
/// [`TOLERANCE`](crate::TOLERANCE) count as colinear and don't vote.
///
/// Fewer than three points are returned unchanged.
///
/// ```rust
/// # use convex_raster::algorithms::order_counter_clockwise;
/// # use convex_raster::data::Point;
/// let ordered = order_counter_clockwise(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([0.0, 2.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([2.0, 0.0]),
/// ]);
/// assert_eq!(ordered, vec![
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 2.0]),
/// ]);
/// ```
pub fn order_counter_clockwise(mut points: Vec<Point>) -> Vec<Point> {
  let centroid = match vertex_centroid(&points) {
    Some(centroid) if points.len() >= 3 => centroid,
    _ => return points,
  };

  points.sort_by_cached_key(|pt| {
    let offset = pt - &centroid;
    (OrderedFloat(offset.angle()), OrderedFloat(offset.norm()))
  });

  if is_mostly_clockwise(&points) {
    points.reverse();
  }
  points
}

fn is_mostly_clockwise(points: &[Point]) -> bool {
  let n = points.len();
  let mut balance: isize = 0;
  for i in 0..n {
    let turn = Orientation::new_with_tolerance(&points[i], &points[(i + 1) % n], &points[(i + 2) % n]);
    match turn {
      Orientation::CounterClockWise => balance += 1,
      Orientation::ClockWise => balance -= 1,
      Orientation::CoLinear => {}
    }
  }
  balance < 0
}
