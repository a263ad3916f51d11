use std::cmp::Ordering;

use super::Point;

/// An integer pixel coordinate. Its sample point is the pixel center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
  pub x: i32,
  pub y: i32,
}

impl Pixel {
  pub const fn new(x: i32, y: i32) -> Pixel {
    Pixel { x, y }
  }

  /// The point `(x + 0.5, y + 0.5)`.
  pub fn center(&self) -> Point {
    Point::new([f64::from(self.x) + 0.5, f64::from(self.y) + 0.5])
  }
}

// Row-major: by scanline first, then by column.
impl Ord for Pixel {
  fn cmp(&self, other: &Pixel) -> Ordering {
    (self.y, self.x).cmp(&(other.y, other.x))
  }
}

impl PartialOrd for Pixel {
  fn partial_cmp(&self, other: &Pixel) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl From<(i32, i32)> for Pixel {
  fn from((x, y): (i32, i32)) -> Pixel {
    Pixel { x, y }
  }
}

/// A sorted, duplicate free set of pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelSet {
  pixels: Vec<Pixel>,
}

impl PixelSet {
  pub fn new() -> PixelSet {
    PixelSet::default()
  }

  pub fn len(&self) -> usize {
    self.pixels.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
    self.pixels.iter()
  }

  pub fn as_slice(&self) -> &[Pixel] {
    &self.pixels
  }

  pub fn contains(&self, pixel: &Pixel) -> bool {
    self.pixels.binary_search(pixel).is_ok()
  }

  /// Pixels in `self` that are not in `other`, in order.
  pub fn difference<'a>(&'a self, other: &'a PixelSet) -> impl Iterator<Item = &'a Pixel> + 'a {
    self.pixels.iter().filter(move |pixel| !other.contains(pixel))
  }

  pub fn into_vec(self) -> Vec<Pixel> {
    self.pixels
  }
}

impl From<Vec<Pixel>> for PixelSet {
  fn from(mut pixels: Vec<Pixel>) -> PixelSet {
    pixels.sort_unstable();
    pixels.dedup();
    PixelSet { pixels }
  }
}

impl FromIterator<Pixel> for PixelSet {
  fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> PixelSet {
    PixelSet::from(iter.into_iter().collect::<Vec<_>>())
  }
}

impl<'a> IntoIterator for &'a PixelSet {
  type Item = &'a Pixel;
  type IntoIter = std::slice::Iter<'a, Pixel>;
  fn into_iter(self) -> Self::IntoIter {
    self.pixels.iter()
  }
}

impl IntoIterator for PixelSet {
  type Item = Pixel;
  type IntoIter = std::vec::IntoIter<Pixel>;
  fn into_iter(self) -> Self::IntoIter {
    self.pixels.into_iter()
  }
}
