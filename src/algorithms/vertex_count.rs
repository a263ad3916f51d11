use crate::data::Point;
use crate::{Error, MIN_VERTICES};

/// $O(n)$ Pad a convex hull with boundary points until it has exactly `n` vertices.
///
/// The `n - h` extra points are spread over the `h` hull edges as evenly as
/// possible: every edge gets `(n - h) / h` points and the first
/// `(n - h) % h` edges get one more. An edge with `k` extra points receives
/// them at `t = j / (k + 1)` for `j = 1..=k`, strictly between its end points,
/// so the boundary (and therefore convexity) is unchanged.
///
/// Hull vertices are kept in place and in order; inserted points follow the
/// vertex that starts their edge.
///
/// # Errors
///
/// * [`Error::InvalidVertexCount`] if `n < 3`.
/// * [`Error::InsufficientVertices`] if the hull has fewer than three vertices.
/// * [`Error::HullOversized`] if the hull already has more than `n` vertices.
///   Dropping hull vertices is not attempted; the caller should resample.
///
/// ```rust
/// # use convex_raster::algorithms::adjust_vertex_count;
/// # use convex_raster::data::Point;
/// let square = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([4.0, 0.0]),
///   Point::new([4.0, 4.0]),
///   Point::new([0.0, 4.0]),
/// ];
/// let padded = adjust_vertex_count(&square, 6).unwrap();
/// assert_eq!(padded[1], Point::new([2.0, 0.0]));
/// assert_eq!(padded[3], Point::new([4.0, 2.0]));
/// ```
pub fn adjust_vertex_count(hull: &[Point], n: usize) -> Result<Vec<Point>, Error> {
  if n < MIN_VERTICES {
    return Err(Error::InvalidVertexCount { requested: n });
  }
  let h = hull.len();
  if h < 3 {
    return Err(Error::InsufficientVertices);
  }
  if h > n {
    return Err(Error::HullOversized {
      requested: n,
      hull: h,
    });
  }

  let need = n - h;
  let mut boundary = Vec::with_capacity(n);
  for (i, src) in hull.iter().enumerate() {
    let dst = &hull[(i + 1) % h];
    let k = need / h + usize::from(i < need % h);
    boundary.push(*src);
    for j in 1..=k {
      boundary.push(src.lerp(dst, j as f64 / (k + 1) as f64));
    }
  }
  debug_assert_eq!(boundary.len(), n);
  Ok(boundary)
}
