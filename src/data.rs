mod canvas;
mod directed_edge;
mod pixel;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use canvas::CanvasBounds;
pub use directed_edge::DirectedEdge;
pub use pixel::{Pixel, PixelSet};
pub use point::Point;
pub use vector::Vector;

#[doc(inline)]
pub use crate::data::polygon::{BraillePrinter, Polygon, PolygonConvex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
