use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::{
  adjust_vertex_count, convex_hull, order_counter_clockwise, random_points, Rasterizer,
  ScanlineRasterizer,
};
use crate::data::{CanvasBounds, PixelSet, Polygon, PolygonConvex};
use crate::{Error, GeneratorConfig, MIN_VERTICES};

/// Random convex polygon with exactly `n` vertices.
///
/// Samples `n` distinct points, takes their convex hull, pads the hull with
/// points on its edges until it has `n` vertices and orders the result
/// counter-clockwise. All vertices lie within `config.bounds`.
///
/// When the hull comes out with more than `n` vertices, or degenerates
/// because every point is colinear, a fresh point cloud is drawn, up to
/// `config.max_hull_retries` times in total.
///
/// Identical `rng` states give identical polygons.
///
/// ```
/// use convex_raster::{generate_convex_polygon, GeneratorConfig};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let polygon = generate_convex_polygon(50, &GeneratorConfig::default(), &mut rng).unwrap();
/// assert_eq!(polygon.len(), 50);
/// ```
pub fn generate_convex_polygon<R>(
  n: usize,
  config: &GeneratorConfig,
  rng: &mut R,
) -> Result<PolygonConvex, Error>
where
  R: Rng + ?Sized,
{
  if n < MIN_VERTICES {
    return Err(Error::InvalidVertexCount { requested: n });
  }
  config.validate()?;

  let mut last_err = Error::InsufficientVertices;
  for attempt in 1..=config.max_hull_retries {
    let hull = convex_hull(random_points(n, config, rng)?);
    match adjust_vertex_count(&hull, n) {
      Ok(boundary) => {
        debug!(
          "generated {}-gon from a {}-vertex hull (attempt {})",
          n,
          hull.len(),
          attempt
        );
        let ordered = order_counter_clockwise(boundary);
        return Ok(PolygonConvex::new_unchecked(Polygon::new_unchecked(ordered)));
      }
      Err(err @ (Error::HullOversized { .. } | Error::InsufficientVertices)) => {
        warn!("attempt {}: {}; resampling", attempt, err);
        last_err = err;
      }
      Err(err) => return Err(err),
    }
  }
  Err(last_err)
}

/// Host-facing state: the current polygon and the vertex count it was made for.
///
/// A host regenerates when the requested count changes and rasterizes on
/// every redraw. Regeneration either replaces the polygon completely or, on
/// error, leaves the previous one untouched.
#[derive(Debug, Clone)]
pub struct GenerationContext {
  config: GeneratorConfig,
  canvas: CanvasBounds,
  requested: Option<usize>,
  polygon: Option<PolygonConvex>,
}

impl GenerationContext {
  /// Fails with [`Error::InvalidBounds`] unless `config.bounds` lies within
  /// `canvas`, so every generated vertex is on the canvas.
  pub fn new(config: GeneratorConfig, canvas: CanvasBounds) -> Result<GenerationContext, Error> {
    config.validate()?;
    if !canvas.contains_bounds(&config.bounds) {
      return Err(Error::InvalidBounds);
    }
    Ok(GenerationContext {
      config,
      canvas,
      requested: None,
      polygon: None,
    })
  }

  /// Generate a new polygon with `count` vertices from `seed`.
  pub fn regenerate(&mut self, count: usize, seed: u64) -> Result<&PolygonConvex, Error> {
    debug!("regenerating {} vertices from seed {}", count, seed);
    self.regenerate_with_rng(count, &mut StdRng::seed_from_u64(seed))
  }

  /// Generate a new polygon with `count` vertices from a caller supplied
  /// random source.
  pub fn regenerate_with_rng<R>(&mut self, count: usize, rng: &mut R) -> Result<&PolygonConvex, Error>
  where
    R: Rng + ?Sized,
  {
    let polygon = generate_convex_polygon(count, &self.config, rng)?;
    self.requested = Some(count);
    Ok(self.polygon.insert(polygon))
  }

  /// Pixels covered by the current polygon within the canvas.
  pub fn rasterize(&self) -> PixelSet {
    self.rasterize_with(&ScanlineRasterizer)
  }

  pub fn rasterize_with(&self, rasterizer: &dyn Rasterizer) -> PixelSet {
    match &self.polygon {
      Some(polygon) => rasterizer.fill(polygon, Some(&self.canvas)),
      None => PixelSet::new(),
    }
  }

  pub fn polygon(&self) -> Option<&PolygonConvex> {
    self.polygon.as_ref()
  }

  pub fn requested_vertices(&self) -> Option<usize> {
    self.requested
  }

  pub fn config(&self) -> &GeneratorConfig {
    &self.config
  }

  pub fn canvas(&self) -> &CanvasBounds {
    &self.canvas
  }

  pub fn clear(&mut self) {
    self.polygon = None;
    self.requested = None;
  }
}

impl Default for GenerationContext {
  fn default() -> GenerationContext {
    GenerationContext {
      config: GeneratorConfig::default(),
      canvas: CanvasBounds::default(),
      requested: None,
      polygon: None,
    }
  }
}
