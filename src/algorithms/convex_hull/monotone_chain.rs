use crate::data::Point;
use crate::Orientation;

/// Convex hull of a set of points using the monotone chain algorithm.
///
/// <hr>
///
/// Computes the convex hull in $O(n \log n)$ time, dominated by sorting the
/// points lexicographically. The lower chain is built left to right and the
/// upper chain right to left; a point is only kept while the chain turns
/// strictly left, so colinear boundary points are dropped.
///
/// The result is counter-clockwise and starts at the lexicographically
/// smallest point. Exact duplicates are removed first. If fewer than three
/// distinct points remain they are returned as they are: a one or two point
/// "hull" is degenerate and the caller has to deal with it. All-colinear
/// input likewise yields just the two extreme points.
///
/// # Examples
///
/// ```rust
/// # use convex_raster::algorithms::convex_hull;
/// # use convex_raster::data::Point;
/// let points = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 2.0]),
/// ];
/// let hull = convex_hull(points);
/// assert_eq!(hull, vec![
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 2.0]),
/// ]);
/// ```
pub fn convex_hull(mut pts: Vec<Point>) -> Vec<Point> {
  pts.sort_unstable_by(Point::lex_cmp);
  pts.dedup();
  if pts.len() < 3 {
    return pts;
  }

  let mut hull: Vec<Point> = Vec::with_capacity(pts.len() + 1);

  // Lower chain.
  for pt in pts.iter() {
    while hull.len() >= 2 && !turns_left(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) {
      hull.pop();
    }
    hull.push(*pt);
  }

  // Upper chain. Never pop into the lower chain.
  let lower_len = hull.len() + 1;
  for pt in pts.iter().rev().skip(1) {
    while hull.len() >= lower_len && !turns_left(&hull[hull.len() - 2], &hull[hull.len() - 1], pt)
    {
      hull.pop();
    }
    hull.push(*pt);
  }

  // The last point is the first one again.
  hull.pop();
  hull
}

fn turns_left(p1: &Point, p2: &Point, p3: &Point) -> bool {
  Orientation::new(p1, p2, p3) == Orientation::CounterClockWise
}
