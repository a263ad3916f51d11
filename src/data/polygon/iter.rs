use crate::data::DirectedEdge;
use crate::data::Point;
use crate::data::Polygon;
use crate::Orientation;

/// A position on the boundary ring of a polygon.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
  pub(crate) polygon: &'a Polygon,
  pub(crate) position: usize,
}

impl<'a> Cursor<'a> {
  pub fn position(self) -> usize {
    self.position
  }

  pub fn prev(mut self) -> Cursor<'a> {
    self.move_prev();
    self
  }

  pub fn next(mut self) -> Cursor<'a> {
    self.move_next();
    self
  }

  pub fn point(self: Cursor<'a>) -> &'a Point {
    self.polygon.point(self.position)
  }

  pub fn move_next(&mut self) {
    self.position = (self.position + 1) % self.polygon.len();
  }

  pub fn move_prev(&mut self) {
    let n = self.polygon.len();
    self.position = (self.position + n - 1) % n;
  }

  /// Turn made at this vertex when walking prev -> this -> next.
  pub fn orientation(&self) -> Orientation {
    Orientation::new(self.prev().point(), self.point(), self.next().point())
  }

  /// Like [`Cursor::orientation`], with interpolation noise treated as colinear.
  pub fn turn(&self) -> Orientation {
    Orientation::new_with_tolerance(self.prev().point(), self.point(), self.next().point())
  }
}

pub struct CursorIter<'a> {
  pub(crate) polygon: &'a Polygon,
  pub(crate) next: usize,
}

impl<'a> Iterator for CursorIter<'a> {
  type Item = Cursor<'a>;
  fn next(&mut self) -> Option<Cursor<'a>> {
    if self.next >= self.polygon.len() {
      return None;
    }
    let cursor = self.polygon.cursor(self.next);
    self.next += 1;
    Some(cursor)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.polygon.len().saturating_sub(self.next);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for CursorIter<'_> {}

pub struct EdgeIter<'a> {
  pub(crate) iter: CursorIter<'a>,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = DirectedEdge<'a>;
  fn next(&mut self) -> Option<Self::Item> {
    let cursor = self.iter.next()?;
    Some(DirectedEdge {
      src: cursor.point(),
      dst: cursor.next().point(),
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl ExactSizeIterator for EdgeIter<'_> {}
