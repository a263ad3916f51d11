use super::{Pixel, Point};
use crate::Error;

/// Inclusive integer extents of a drawing surface.
///
/// Used both as the region points are sampled from and as the clip rectangle
/// for rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasBounds {
  x_min: i32,
  x_max: i32,
  y_min: i32,
  y_max: i32,
}

impl CanvasBounds {
  pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Result<CanvasBounds, Error> {
    if x_min > x_max || y_min > y_max {
      return Err(Error::InvalidBounds);
    }
    Ok(CanvasBounds {
      x_min,
      x_max,
      y_min,
      y_max,
    })
  }

  pub(crate) const fn new_unchecked(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> CanvasBounds {
    CanvasBounds {
      x_min,
      x_max,
      y_min,
      y_max,
    }
  }

  /// Canvas of `width` by `height` pixels with its origin at (0,0).
  pub fn with_size(width: u32, height: u32) -> Result<CanvasBounds, Error> {
    let x_max = i32::try_from(width).map_err(|_| Error::InvalidBounds)? - 1;
    let y_max = i32::try_from(height).map_err(|_| Error::InvalidBounds)? - 1;
    CanvasBounds::new(0, x_max, 0, y_max)
  }

  pub fn x_min(&self) -> i32 {
    self.x_min
  }

  pub fn x_max(&self) -> i32 {
    self.x_max
  }

  pub fn y_min(&self) -> i32 {
    self.y_min
  }

  pub fn y_max(&self) -> i32 {
    self.y_max
  }

  pub fn width(&self) -> u64 {
    (i64::from(self.x_max) - i64::from(self.x_min) + 1) as u64
  }

  pub fn height(&self) -> u64 {
    (i64::from(self.y_max) - i64::from(self.y_min) + 1) as u64
  }

  /// Number of integer points inside the bounds.
  pub fn lattice_size(&self) -> u64 {
    self.width().saturating_mul(self.height())
  }

  pub fn contains(&self, pt: &Point) -> bool {
    let (x, y) = (*pt.x_coord(), *pt.y_coord());
    f64::from(self.x_min) <= x
      && x <= f64::from(self.x_max)
      && f64::from(self.y_min) <= y
      && y <= f64::from(self.y_max)
  }

  pub fn contains_pixel(&self, pixel: &Pixel) -> bool {
    (self.x_min..=self.x_max).contains(&pixel.x) && (self.y_min..=self.y_max).contains(&pixel.y)
  }

  /// Whether `other` lies entirely within these bounds.
  pub fn contains_bounds(&self, other: &CanvasBounds) -> bool {
    self.x_min <= other.x_min
      && other.x_max <= self.x_max
      && self.y_min <= other.y_min
      && other.y_max <= self.y_max
  }

  /// Shrink every side by `margin`.
  pub fn inset(&self, margin: i32) -> Result<CanvasBounds, Error> {
    CanvasBounds::new(
      self.x_min.checked_add(margin).ok_or(Error::InvalidBounds)?,
      self.x_max.checked_sub(margin).ok_or(Error::InvalidBounds)?,
      self.y_min.checked_add(margin).ok_or(Error::InvalidBounds)?,
      self.y_max.checked_sub(margin).ok_or(Error::InvalidBounds)?,
    )
  }
}

impl Default for CanvasBounds {
  /// The 640x480 window the polygons were originally drawn in.
  fn default() -> CanvasBounds {
    CanvasBounds::new_unchecked(0, 639, 0, 479)
  }
}
