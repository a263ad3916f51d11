use super::{pixel_range, Rasterizer};
use crate::data::polygon::locate_ccw;
use crate::data::{CanvasBounds, Pixel, PixelSet, PointLocation, Polygon};

/// Brute force coverage: every pixel center in the bounding box is tested
/// against every edge.
///
/// A center is covered when it is on the left of, or on, every directed edge
/// of the counter-clockwise ring. Clockwise rings are tested in reverse.
///
/// $O(w \cdot h \cdot n)$. Use [`ScanlineRasterizer`](super::ScanlineRasterizer)
/// for anything but cross-checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointInPolygonRasterizer;

impl Rasterizer for PointInPolygonRasterizer {
  fn fill(&self, polygon: &Polygon, clip: Option<&CanvasBounds>) -> PixelSet {
    if polygon.len() < 3 {
      return PixelSet::new();
    }
    let reversed;
    let polygon = if polygon.signed_area_2x() < 0.0 {
      let mut ring = polygon.clone();
      ring.vertices.reverse();
      reversed = ring;
      &reversed
    } else {
      polygon
    };
    let Some((min, max)) = polygon.bounding_box() else {
      return PixelSet::new();
    };
    let x_clip = clip.map(|canvas| (canvas.x_min(), canvas.x_max()));
    let y_clip = clip.map(|canvas| (canvas.y_min(), canvas.y_max()));
    let (Some((x_first, x_last)), Some((y_first, y_last))) = (
      pixel_range(min[0], max[0], x_clip),
      pixel_range(min[1], max[1], y_clip),
    ) else {
      return PixelSet::new();
    };

    let mut pixels = Vec::new();
    for y in y_first..=y_last {
      for x in x_first..=x_last {
        let pixel = Pixel::new(x, y);
        if locate_ccw(polygon, &pixel.center()) != PointLocation::Outside {
          pixels.push(pixel);
        }
      }
    }
    PixelSet::from(pixels)
  }

  fn name(&self) -> &str {
    "point-in-polygon"
  }
}
