// This module contains strategies for:
//  * points on a small integer lattice
//  * point sets
//  * generated convex polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PolygonConvex};
use crate::{generate_convex_polygon, GeneratorConfig};

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Points

// Small coordinates make colinear and duplicate points common.
pub fn any_lattice() -> impl Strategy<Value = Point> {
  (-50i32..=50, -50i32..=50).prop_map(Point::from)
}

pub fn lattice_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_lattice(), size)
}

pub fn any_vertex_count() -> impl Strategy<Value = usize> {
  3usize..100
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary convex polygons

impl Arbitrary for PolygonConvex {
  type Strategy = Map<(Range<usize>, StrategyFor<u64>), fn(_: (usize, u64)) -> PolygonConvex>;
  type Parameters = Range<usize>;
  fn arbitrary_with(mut range: Self::Parameters) -> Self::Strategy {
    if range.is_empty() {
      range = 3usize..100;
    }
    (range, any::<u64>()).prop_map(|(n, seed)| {
      let rng = &mut StdRng::seed_from_u64(seed);
      match generate_convex_polygon(n.max(3), &GeneratorConfig::default(), rng) {
        Ok(polygon) => polygon,
        Err(err) => panic!("default configuration failed to generate {} vertices: {}", n, err),
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::assert_ok;
  use test_strategy::proptest;

  #[proptest]
  fn arbitrary_polygons_are_valid(poly: PolygonConvex) {
    assert_ok!(poly.validate());
    prop_assert!(poly.len() >= 3);
  }
}
