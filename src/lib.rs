// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Random convex polygons with an exact vertex count, and the pixels they cover.
//!
//! The pipeline is: sample distinct points, take their convex hull, pad the
//! hull with boundary points until it has the requested number of vertices,
//! and order the result counter-clockwise. The resulting [`PolygonConvex`]
//! can then be filled with a scanline [`Rasterizer`].
//!
//! ```
//! use convex_raster::GenerationContext;
//!
//! let mut ctx = GenerationContext::default();
//! let polygon = ctx.regenerate(12, 42).unwrap();
//! assert_eq!(polygon.len(), 12);
//! assert!(!ctx.rasterize().is_empty());
//! ```
//!
//! [`PolygonConvex`]: data::PolygonConvex
//! [`Rasterizer`]: algorithms::Rasterizer

pub mod algorithms;
mod config;
pub mod data;
mod generator;
mod orientation;

pub use config::{GeneratorConfig, Sampling, CANVAS_MARGIN, MAX_SLIDER_VERTICES, MIN_VERTICES};
pub use generator::{generate_convex_polygon, GenerationContext};
pub use orientation::{cross, Orientation, TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three vertices were requested.
  InvalidVertexCount {
    requested: usize,
  },
  /// Sampling could not find enough distinct points within its attempt ceiling.
  GenerationExhausted {
    requested: usize,
    attempts: usize,
  },
  /// Every retry produced a hull with more vertices than requested.
  HullOversized {
    requested: usize,
    hull: usize,
  },
  InsufficientVertices,
  DuplicatePoints,
  /// Two consecutive line segments are oriented clockwise.
  ConvexViolation,
  ClockWiseViolation,
  InvalidBounds,
  InvalidConfig,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidVertexCount { requested } => write!(
        f,
        "Invalid vertex count {}: a polygon requires at least {} vertices",
        requested, MIN_VERTICES
      ),
      Error::GenerationExhausted {
        requested,
        attempts,
      } => write!(
        f,
        "Could not sample {} distinct points in {} attempts",
        requested, attempts
      ),
      Error::HullOversized { requested, hull } => write!(
        f,
        "Convex hull has {} vertices but only {} were requested",
        hull, requested
      ),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::InvalidBounds => write!(f, "Invalid canvas bounds"),
      Error::InvalidConfig => write!(f, "Invalid generator configuration"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
