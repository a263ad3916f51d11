use crate::data::{PixelSet, Polygon};
use std::fmt;

/// A pretty-printer for a polygon and its fill using Braille Unicode symbols.
///
/// Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns, so each
/// character shows a 2-pixel-wide by 4-pixel-tall cell. Filled pixels and
/// the polygon outline both become dots. Rows are printed top-down with y
/// pointing up, so the output is oriented like the canvas.
///
/// # Braille Dot Numbering
///
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use convex_raster::algorithms::{Rasterizer, ScanlineRasterizer};
/// use convex_raster::data::{BraillePrinter, Point, Polygon};
///
/// let triangle = Polygon::new(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([5.0, 8.0]),
/// ]).unwrap();
/// let fill = ScanlineRasterizer.fill(&triangle, None);
///
/// let braille = BraillePrinter::new(&triangle).with_fill(&fill);
/// println!("{}", braille);
/// ```
pub struct BraillePrinter<'a> {
  polygon: &'a Polygon,
  fill: Option<&'a PixelSet>,
  scale: i32,
}

impl<'a> BraillePrinter<'a> {
  /// Create a new Braille printer for a polygon outline.
  pub fn new(polygon: &'a Polygon) -> Self {
    BraillePrinter {
      polygon,
      fill: None,
      scale: 1,
    }
  }

  /// Also draw these pixels.
  pub fn with_fill(mut self, fill: &'a PixelSet) -> Self {
    self.fill = Some(fill);
    self
  }

  /// Draw one dot per `scale` by `scale` block of canvas pixels.
  pub fn with_scale(mut self, scale: u32) -> Self {
    self.scale = i32::try_from(scale.max(1)).unwrap_or(i32::MAX);
    self
  }

  /// Render the polygon to a string using Braille characters.
  ///
  /// An empty polygon renders as an empty string.
  pub fn render(&self) -> String {
    let Some((min, max)) = self.polygon.bounding_box() else {
      return String::new();
    };
    let min_x = min[0].floor() as i32;
    let min_y = min[1].floor() as i32;
    let max_y = max[1].ceil() as i32;
    let max_x = max[0].ceil() as i32;

    // One cell of padding on every side.
    let width = ((max_x - min_x) / self.scale + 3) as usize;
    let height = ((max_y - min_y) / self.scale + 3) as usize;
    let to_grid =
      |x: i32, y: i32| ((x - min_x) / self.scale + 1, (max_y - y) / self.scale + 1);

    let mut grid = vec![vec![false; width]; height];
    let mut plot = |x: i32, y: i32| {
      if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        grid[y as usize][x as usize] = true;
      }
    };

    if let Some(fill) = self.fill {
      for pixel in fill {
        let (x, y) = to_grid(pixel.x, pixel.y);
        plot(x, y);
      }
    }

    for edge in self.polygon.iter_boundary_edges() {
      let (x0, y0) = to_grid(edge.src[0].round() as i32, edge.src[1].round() as i32);
      let (x1, y1) = to_grid(edge.dst[0].round() as i32, edge.dst[1].round() as i32);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }

    grid_to_braille(&grid)
  }
}

impl<'a> fmt::Display for BraillePrinter<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

/// Convert a pixel grid to Braille characters.
fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = if height > 0 { grid[0].len() } else { 0 };

  let braille_rows = height.div_ceil(4);
  let braille_cols = width.div_ceil(2);

  // Bit for each (column, row) of a cell, in Unicode order.
  const DOTS: [[u8; 4]; 2] = [
    [0b0000_0001, 0b0000_0010, 0b0000_0100, 0b0100_0000],
    [0b0000_1000, 0b0001_0000, 0b0010_0000, 0b1000_0000],
  ];

  let mut result = String::new();
  for row in 0..braille_rows {
    for col in 0..braille_cols {
      let mut dots = 0u8;
      for (dx, column) in DOTS.iter().enumerate() {
        for (dy, bit) in column.iter().enumerate() {
          if get_pixel(grid, col * 2 + dx, row * 4 + dy) {
            dots |= bit;
          }
        }
      }
      result.push(char::from_u32(0x2800 + u32::from(dots)).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

/// Get a pixel from the grid, returning false if out of bounds.
fn get_pixel(grid: &[Vec<bool>], x: usize, y: usize) -> bool {
  grid
    .get(y)
    .and_then(|row| row.get(x))
    .copied()
    .unwrap_or(false)
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
