//! Pixel coverage of polygons.
//!
//! A pixel `(x, y)` is covered when its center `(x + 0.5, y + 0.5)` lies
//! inside the polygon or on its boundary. Coverage is binary; there is no
//! anti-aliasing.
//!
//! Two rasterizers are provided:
//!   - [`ScanlineRasterizer`] walks an active edge table one scanline at a
//!     time and fills the spans between pairs of edge crossings. It is the
//!     one to use.
//!   - [`PointInPolygonRasterizer`] tests every pixel center in the bounding
//!     box against every edge. It is slow and exists to cross-check the
//!     scanline fill.
//!
//! Both agree on every pixel of the polygons this crate generates. They
//! differ on one boundary case: a scanline that passes exactly through the
//! topmost vertex or along a horizontal top edge is not filled by the
//! scanline rasterizer (edges are active on half-open ranges), while the
//! point test counts those centers as on the boundary.
use crate::data::{CanvasBounds, PixelSet, Polygon};

mod point_in_polygon;
mod scanline;

pub use point_in_polygon::PointInPolygonRasterizer;
pub use scanline::ScanlineRasterizer;

/// Slack, in pixels, for centers that lie on an edge up to rounding.
pub const COVERAGE_EPSILON: f64 = crate::data::polygon::BOUNDARY_EPSILON;

/// Basic rasterizer interface
pub trait Rasterizer {
  /// Pixels covered by `polygon`, restricted to `clip` when given.
  ///
  /// Rings with fewer than three vertices cover nothing. A polygon entirely
  /// outside `clip` yields an empty set.
  fn fill(&self, polygon: &Polygon, clip: Option<&CanvasBounds>) -> PixelSet;

  /// Name of the rasterizer (useful for debugging)
  fn name(&self) -> &str;
}

impl<'a, R: Rasterizer + ?Sized> Rasterizer for &'a R {
  fn fill(&self, polygon: &Polygon, clip: Option<&CanvasBounds>) -> PixelSet {
    (**self).fill(polygon, clip)
  }

  fn name(&self) -> &str {
    (**self).name()
  }
}

impl Rasterizer for Box<dyn Rasterizer> {
  fn fill(&self, polygon: &Polygon, clip: Option<&CanvasBounds>) -> PixelSet {
    (**self).fill(polygon, clip)
  }

  fn name(&self) -> &str {
    (**self).name()
  }
}

// Inclusive integer range of pixel indices whose centers may fall in
// [lo, hi], intersected with the clip range. None if empty or not finite.
pub(crate) fn pixel_range(lo: f64, hi: f64, clip: Option<(i32, i32)>) -> Option<(i32, i32)> {
  if !lo.is_finite() || !hi.is_finite() {
    return None;
  }
  let mut first = (lo - 0.5).floor() as i32;
  let mut last = (hi - 0.5).ceil() as i32;
  if let Some((clip_lo, clip_hi)) = clip {
    first = first.max(clip_lo);
    last = last.min(clip_hi);
  }
  (first <= last).then_some((first, last))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::{Pixel, Point};

  fn right_triangle() -> Polygon {
    Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ])
    .unwrap()
  }

  // Centers (x + 0.5, y + 0.5) with x, y >= 0 and x + y <= 3. The centers with
  // x + y == 3 sit exactly on the hypotenuse and are included.
  fn right_triangle_pixels() -> PixelSet {
    (0..4)
      .flat_map(|y| (0..4 - y).map(move |x| Pixel::new(x, y)))
      .collect()
  }

  fn rasterizers() -> Vec<Box<dyn Rasterizer>> {
    vec![
      Box::new(ScanlineRasterizer),
      Box::new(PointInPolygonRasterizer),
    ]
  }

  #[test]
  fn right_triangle_exact_pixels() {
    for rasterizer in rasterizers() {
      let pixels = rasterizer.fill(&right_triangle(), None);
      assert_eq!(pixels.len(), 10, "{}", rasterizer.name());
      assert_eq!(pixels, right_triangle_pixels(), "{}", rasterizer.name());
    }
  }

  #[test]
  fn degenerate_rings_cover_nothing() {
    let segment = Polygon::new_unchecked(vec![Point::new([0.0, 0.0]), Point::new([5.0, 5.0])]);
    for rasterizer in rasterizers() {
      assert!(rasterizer.fill(&segment, None).is_empty());
      assert!(rasterizer.fill(&Polygon::new_unchecked(vec![]), None).is_empty());
    }
  }

  #[test]
  fn clipped_away() {
    let canvas = CanvasBounds::new(100, 200, 100, 200).unwrap();
    for rasterizer in rasterizers() {
      assert!(rasterizer.fill(&right_triangle(), Some(&canvas)).is_empty());
    }
  }

  #[test]
  fn clipped_partially() {
    let canvas = CanvasBounds::new(1, 10, 1, 10).unwrap();
    let expected: PixelSet = vec![Pixel::new(1, 1), Pixel::new(2, 1), Pixel::new(1, 2)].into();
    for rasterizer in rasterizers() {
      assert_eq!(rasterizer.fill(&right_triangle(), Some(&canvas)), expected);
    }
  }

  #[test]
  fn far_below_the_canvas() {
    // Thinner than a pixel by the time it reaches row 0.
    let spike = Polygon::new(vec![
      Point::new([0.0, -3e9]),
      Point::new([10.0, -3e9]),
      Point::new([5.0, 100.0]),
    ])
    .unwrap();
    let canvas = CanvasBounds::default();
    for rasterizer in rasterizers() {
      assert!(rasterizer.fill(&spike, Some(&canvas)).is_empty(), "{}", rasterizer.name());
    }
  }

  #[test]
  fn larger_than_the_canvas() {
    let canvas = CanvasBounds::default();
    let huge = Polygon::new(vec![
      Point::new([-1e7, -1e7]),
      Point::new([1e7, -1e7]),
      Point::new([0.0, 1e7]),
    ])
    .unwrap();
    let by_scan = ScanlineRasterizer.fill(&huge, Some(&canvas));
    let by_point = PointInPolygonRasterizer.fill(&huge, Some(&canvas));
    assert_eq!(by_scan.len() as u64, canvas.lattice_size());
    assert_eq!(by_scan, by_point);
    assert!(by_scan.iter().all(|pixel| canvas.contains_pixel(pixel)));

    // Crosses the canvas diagonally, with vertices outside the i32 range.
    let slab = Polygon::new(vec![
      Point::new([-5e9, -5e9 + 100.0]),
      Point::new([-5e9 + 100.0, -5e9]),
      Point::new([5e9, 5e9 - 100.0]),
      Point::new([5e9 - 100.0, 5e9]),
    ])
    .unwrap();
    let by_scan = ScanlineRasterizer.fill(&slab, Some(&canvas));
    let by_point = PointInPolygonRasterizer.fill(&slab, Some(&canvas));
    assert!(!by_scan.is_empty());
    assert_eq!(by_scan, by_point);
    assert!(by_scan.iter().all(|pixel| canvas.contains_pixel(pixel)));
  }

  #[test]
  fn canvas_at_the_top_of_i32() {
    let top = f64::from(i32::MAX);
    let canvas = CanvasBounds::new(0, 10, i32::MAX - 20, i32::MAX).unwrap();
    let square = Polygon::new(vec![
      Point::new([0.0, top - 10.0]),
      Point::new([4.0, top - 10.0]),
      Point::new([4.0, top]),
      Point::new([0.0, top]),
    ])
    .unwrap();
    for rasterizer in rasterizers() {
      assert_eq!(rasterizer.fill(&square, Some(&canvas)).len(), 40, "{}", rasterizer.name());
    }
  }

  // Pins the one known disagreement: a horizontal top edge exactly on a row
  // of pixel centers.
  #[test]
  fn half_integer_square() {
    let square = Polygon::new(vec![
      Point::new([0.5, 0.5]),
      Point::new([2.5, 0.5]),
      Point::new([2.5, 2.5]),
      Point::new([0.5, 2.5]),
    ])
    .unwrap();
    let by_scan = ScanlineRasterizer.fill(&square, None);
    let by_point = PointInPolygonRasterizer.fill(&square, None);
    let bottom_rows: PixelSet = (0..2)
      .flat_map(|y| (0..3).map(move |x| Pixel::new(x, y)))
      .collect();
    assert_eq!(by_scan, bottom_rows);
    assert_eq!(by_point.len(), 9);
    let extra: Vec<Pixel> = by_point.difference(&by_scan).copied().collect();
    assert_eq!(extra, vec![Pixel::new(0, 2), Pixel::new(1, 2), Pixel::new(2, 2)]);
  }

  #[test]
  fn pixel_range_rounding() {
    assert_eq!(pixel_range(0.0, 4.0, None), Some((-1, 4)));
    assert_eq!(pixel_range(0.0, 4.0, Some((0, 2))), Some((0, 2)));
    assert_eq!(pixel_range(0.0, 4.0, Some((5, 9))), None);
    assert_eq!(pixel_range(f64::NAN, 4.0, None), None);
  }
}
