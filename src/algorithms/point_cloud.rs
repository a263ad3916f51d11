use log::trace;
use rand::Rng;

use crate::data::{CanvasBounds, Point};
use crate::{Error, GeneratorConfig, Sampling, MIN_VERTICES};

/// $O(n^2)$ Sample `n` pairwise distinct points uniformly within the
/// configured bounds.
///
/// Candidates that exactly match an already accepted point are rejected and
/// resampled. At most `n * config.attempts_per_point` candidates are drawn;
/// running out fails with [`Error::GenerationExhausted`] instead of looping
/// forever. Identical seeds produce identical point sets.
///
/// ```
/// use convex_raster::algorithms::random_points;
/// use convex_raster::GeneratorConfig;
/// use rand::SeedableRng;
///
/// let config = GeneratorConfig::default();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let pts = random_points(10, &config, &mut rng).unwrap();
/// assert_eq!(pts.len(), 10);
/// ```
pub fn random_points<R>(n: usize, config: &GeneratorConfig, rng: &mut R) -> Result<Vec<Point>, Error>
where
  R: Rng + ?Sized,
{
  if n < MIN_VERTICES {
    return Err(Error::InvalidVertexCount { requested: n });
  }
  let max_attempts = n.saturating_mul(config.attempts_per_point);
  let bounds = &config.bounds;
  if config.sampling == Sampling::Lattice && (n as u64) > bounds.lattice_size() {
    return Err(Error::GenerationExhausted {
      requested: n,
      attempts: 0,
    });
  }

  let mut pts: Vec<Point> = Vec::with_capacity(n);
  let mut attempts = 0;
  while pts.len() < n {
    if attempts == max_attempts {
      return Err(Error::GenerationExhausted {
        requested: n,
        attempts,
      });
    }
    attempts += 1;
    let candidate = sample(bounds, config.sampling, rng);
    if !pts.contains(&candidate) {
      pts.push(candidate);
    }
  }
  trace!("sampled {} distinct points in {} attempts", n, attempts);
  Ok(pts)
}

fn sample<R>(bounds: &CanvasBounds, sampling: Sampling, rng: &mut R) -> Point
where
  R: Rng + ?Sized,
{
  match sampling {
    Sampling::Lattice => Point::from((
      rng.gen_range(bounds.x_min()..=bounds.x_max()),
      rng.gen_range(bounds.y_min()..=bounds.y_max()),
    )),
    Sampling::Continuous => Point::new([
      rng.gen_range(f64::from(bounds.x_min())..=f64::from(bounds.x_max())),
      rng.gen_range(f64::from(bounds.y_min())..=f64::from(bounds.y_max())),
    ]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn tiny_config() -> GeneratorConfig {
    GeneratorConfig::default().with_bounds(CanvasBounds::new(0, 1, 0, 1).unwrap())
  }

  #[test]
  fn rejects_small_counts() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_err_eq!(
      random_points(2, &GeneratorConfig::default(), &mut rng),
      Error::InvalidVertexCount { requested: 2 }
    );
  }

  #[test]
  fn fills_a_tiny_lattice() {
    // Four lattice points, four requested: every point must be found.
    let mut rng = StdRng::seed_from_u64(3);
    let pts = assert_ok!(random_points(4, &tiny_config(), &mut rng));
    for corner in [(0, 0), (0, 1), (1, 0), (1, 1)] {
      assert!(pts.contains(&Point::from(corner)));
    }
  }

  #[test]
  fn lattice_too_small() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_err_eq!(
      random_points(5, &tiny_config(), &mut rng),
      Error::GenerationExhausted {
        requested: 5,
        attempts: 0
      }
    );
  }

  #[test]
  fn attempt_ceiling() {
    // A single attempt per point can't avoid collisions on a 2x2 lattice forever.
    let config = tiny_config().with_attempts_per_point(1);
    let failed = (0..64).any(|seed| {
      let mut rng = StdRng::seed_from_u64(seed);
      matches!(
        random_points(4, &config, &mut rng),
        Err(Error::GenerationExhausted { attempts: 4, .. })
      )
    });
    assert!(failed);
  }

  #[test]
  fn continuous_sampling_in_bounds() {
    let config = GeneratorConfig::default().with_sampling(Sampling::Continuous);
    let mut rng = StdRng::seed_from_u64(11);
    let pts = random_points(200, &config, &mut rng).unwrap();
    assert!(pts.iter().all(|pt| config.bounds.contains(pt)));
    assert!(pts.iter().any(|pt| pt[0].fract() != 0.0));
  }

  #[proptest]
  fn distinct_and_in_bounds(#[strategy(3usize..200)] n: usize, seed: u64) {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let pts = random_points(n, &config, &mut rng).unwrap();
    assert_eq!(pts.len(), n);
    for (i, pt) in pts.iter().enumerate() {
      assert!(config.bounds.contains(pt));
      assert!(!pts[i + 1..].contains(pt));
    }
  }

  #[proptest]
  fn reproducible(#[strategy(3usize..50)] n: usize, seed: u64) {
    let config = GeneratorConfig::default();
    let first = random_points(n, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
    let second = random_points(n, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
    assert_eq!(first, second);
  }
}
