use crate::data::CanvasBounds;
use crate::Error;

/// Smallest vertex count a polygon can have.
pub const MIN_VERTICES: usize = 3;

/// Upper end of the vertex count slider hosts usually offer. Not enforced.
pub const MAX_SLIDER_VERTICES: usize = 1000;

/// Distance kept between sampled points and the edge of the default canvas.
pub const CANVAS_MARGIN: i32 = 20;

/// How candidate points are drawn from the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
  /// Integer coordinates only.
  #[default]
  Lattice,
  /// Uniform real coordinates.
  Continuous,
}

/// Knobs for [`generate_convex_polygon`](crate::generate_convex_polygon).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
  /// Region points are sampled from.
  pub bounds: CanvasBounds,
  pub sampling: Sampling,
  /// Sampling gives up after `n * attempts_per_point` candidates.
  pub attempts_per_point: usize,
  /// How many point clouds are tried before a hull that is too large (or
  /// degenerate) is reported as an error.
  pub max_hull_retries: usize,
}

impl GeneratorConfig {
  pub fn with_bounds(mut self, bounds: CanvasBounds) -> Self {
    self.bounds = bounds;
    self
  }

  pub fn with_sampling(mut self, sampling: Sampling) -> Self {
    self.sampling = sampling;
    self
  }

  pub fn with_attempts_per_point(mut self, attempts: usize) -> Self {
    self.attempts_per_point = attempts;
    self
  }

  pub fn with_max_hull_retries(mut self, retries: usize) -> Self {
    self.max_hull_retries = retries;
    self
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.attempts_per_point == 0 || self.max_hull_retries == 0 {
      return Err(Error::InvalidConfig);
    }
    Ok(())
  }
}

impl Default for GeneratorConfig {
  /// Integer points within the default 640x480 canvas, inset by [`CANVAS_MARGIN`].
  fn default() -> GeneratorConfig {
    let canvas = CanvasBounds::default();
    GeneratorConfig {
      bounds: CanvasBounds::new_unchecked(
        canvas.x_min() + CANVAS_MARGIN,
        canvas.x_max() - CANVAS_MARGIN,
        canvas.y_min() + CANVAS_MARGIN,
        canvas.y_max() - CANVAS_MARGIN,
      ),
      sampling: Sampling::Lattice,
      attempts_per_point: 32,
      max_hull_retries: 16,
    }
  }
}
