use log::trace;

use super::{Rasterizer, COVERAGE_EPSILON};
use crate::data::{CanvasBounds, Pixel, PixelSet, Point, Polygon};

/// Active-edge-table scanline fill.
///
/// Edges are sorted by the first pixel row whose center line they cross.
/// Each row activates the edges that start there, drops edges that ended,
/// sorts by the current crossing and fills between consecutive pairs.
/// Crossings are then advanced by `dx/dy` for the next row. Rows without
/// active edges are skipped.
///
/// With a clip rectangle only the rows inside it are swept; edges that start
/// below the clip are entered at its first row.
///
/// $O(n \log n + p)$ for $n$ edges and $p$ covered pixels (plus one pass over
/// the rows spanned by the polygon).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer;

// An edge as seen by the sweep. Active for rows `start..end`.
#[derive(Debug, Clone, Copy)]
struct Edge {
  start: i64,
  end: i64,
  // Crossing with the center line of the current row.
  x: f64,
  dx_dy: f64,
}

impl Edge {
  // None for horizontal edges and edges that cross no row center at or
  // above `first_row`.
  fn new(p1: &Point, p2: &Point, first_row: i64) -> Option<Edge> {
    if p1.y_coord() == p2.y_coord() {
      return None;
    }
    let (lo, hi) = if p1.y_coord() < p2.y_coord() {
      (p1, p2)
    } else {
      (p2, p1)
    };
    // Row y samples the line Y = y + 0.5; the edge covers lo.y <= Y < hi.y.
    let start = ((lo[1] - 0.5).ceil() as i64).max(first_row);
    let end = (hi[1] - 0.5).ceil() as i64;
    if start >= end {
      return None;
    }
    let dx_dy = (hi[0] - lo[0]) / (hi[1] - lo[1]);
    let x = lo[0] + (start as f64 + 0.5 - lo[1]) * dx_dy;
    Some(Edge {
      start,
      end,
      x,
      dx_dy,
    })
  }
}

impl Rasterizer for ScanlineRasterizer {
  fn fill(&self, polygon: &Polygon, clip: Option<&CanvasBounds>) -> PixelSet {
    if polygon.len() < 3 {
      return PixelSet::new();
    }
    let Some((min, max)) = polygon.bounding_box() else {
      return PixelSet::new();
    };
    let Some((y_first, y_last)) = row_range(min[1], max[1], clip) else {
      return PixelSet::new();
    };

    let mut table: Vec<Edge> = polygon
      .iter_boundary_edges()
      .filter_map(|edge| Edge::new(edge.src, edge.dst, y_first))
      .filter(|edge| edge.start < y_last)
      .collect();
    table.sort_by_key(|edge| edge.start);
    trace!(
      "edge table: {} edges over rows {}..{}",
      table.len(),
      y_first,
      y_last
    );

    let x_clip = clip.map(|canvas| (canvas.x_min(), canvas.x_max()));
    let mut pixels = Vec::new();
    let mut active: Vec<Edge> = Vec::new();
    let mut pending = table.into_iter().peekable();
    let mut y = y_first;
    while y < y_last {
      if active.is_empty() {
        match pending.peek() {
          Some(edge) => y = y.max(edge.start),
          None => break,
        }
      }
      while let Some(edge) = pending.next_if(|edge| edge.start <= y) {
        active.push(edge);
      }
      active.retain(|edge| edge.end > y);
      active.sort_by(|a, b| a.x.total_cmp(&b.x));

      let Ok(row) = i32::try_from(y) else {
        break;
      };
      for pair in active.chunks_exact(2) {
        if let Some((x_start, x_end)) = span(pair[0].x, pair[1].x, x_clip) {
          pixels.extend((x_start..=x_end).map(|x| Pixel::new(x, row)));
        }
      }

      for edge in active.iter_mut() {
        edge.x += edge.dx_dy;
      }
      y += 1;
    }
    PixelSet::from(pixels)
  }

  fn name(&self) -> &str {
    "scanline"
  }
}

// Half-open range of rows that may hold covered centers, limited to the clip
// (or to the i32 range pixels can address).
fn row_range(lo: f64, hi: f64, clip: Option<&CanvasBounds>) -> Option<(i64, i64)> {
  if !(lo.is_finite() && hi.is_finite()) {
    return None;
  }
  let (clip_lo, clip_hi) = match clip {
    Some(canvas) => (canvas.y_min(), canvas.y_max()),
    None => (i32::MIN, i32::MAX),
  };
  let first = (lo.floor() as i64).max(i64::from(clip_lo));
  let last = (hi.ceil() as i64).min(i64::from(clip_hi) + 1);
  (first < last).then_some((first, last))
}

// Columns whose centers lie in [left, right], up to COVERAGE_EPSILON.
fn span(left: f64, right: f64, clip: Option<(i32, i32)>) -> Option<(i32, i32)> {
  let mut first = (left - 0.5 - COVERAGE_EPSILON).ceil() as i32;
  let mut last = (right - 0.5 + COVERAGE_EPSILON).floor() as i32;
  if let Some((clip_lo, clip_hi)) = clip {
    first = first.max(clip_lo);
    last = last.min(clip_hi);
  }
  (first <= last).then_some((first, last))
}
