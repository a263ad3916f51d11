mod pipeline {
  use convex_raster::algorithms::*;
  use convex_raster::data::*;
  use convex_raster::*;

  use claims::{assert_err_eq, assert_ok};
  use rand::SeedableRng;

  #[test]
  fn triangle_is_its_own_hull() -> Result<(), Error> {
    let pts = vec![
      Point::new([10.0, 0.0]),
      Point::new([0.0, 10.0]),
      Point::new([0.0, 0.0]),
    ];
    let hull = convex_hull(pts.clone());
    assert_eq!(hull.len(), 3);
    let adjusted = adjust_vertex_count(&hull, 3)?;
    assert_eq!(adjusted, hull);
    let ordered = order_counter_clockwise(adjusted);
    let polygon = PolygonConvex::new(Polygon::new(ordered)?)?;
    assert!(polygon.equals(&Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([0.0, 10.0]),
    ])));
    Ok(())
  }

  #[test]
  fn square_padded_to_six() -> Result<(), Error> {
    let square = vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ];
    let padded = adjust_vertex_count(&square, 6)?;
    assert_eq!(padded.len(), 6);
    for corner in &square {
      assert!(padded.contains(corner));
    }
    let polygon = PolygonConvex::new(Polygon::new(order_counter_clockwise(padded))?)?;
    assert_eq!(polygon.signed_area(), 16.0);
    Ok(())
  }

  #[test]
  fn right_triangle_coverage() {
    let triangle = Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ]);
    let expected: PixelSet = (0..4)
      .flat_map(|y| (0..4 - y).map(move |x| Pixel::new(x, y)))
      .collect();
    assert_eq!(expected.len(), 10);
    assert_eq!(ScanlineRasterizer.fill(&triangle, None), expected);
    assert_eq!(PointInPolygonRasterizer.fill(&triangle, None), expected);
  }

  #[test]
  fn two_vertices_rejected() {
    let mut ctx = GenerationContext::default();
    assert_err_eq!(ctx.regenerate(2, 7), Error::InvalidVertexCount { requested: 2 });
    assert!(ctx.polygon().is_none());
    assert!(ctx.rasterize().is_empty());
  }

  #[test]
  fn regenerate_is_deterministic() {
    let mut ctx = GenerationContext::default();
    let first = assert_ok!(ctx.regenerate(64, 2024)).clone();
    let first_fill = ctx.rasterize();
    let second = assert_ok!(ctx.regenerate(64, 2024)).clone();
    assert_eq!(first, second);
    assert_eq!(first_fill, ctx.rasterize());
  }

  #[test]
  fn fill_stays_on_canvas() {
    let mut ctx = GenerationContext::default();
    ctx.regenerate(200, 3).unwrap();
    let fill = ctx.rasterize();
    assert!(!fill.is_empty());
    assert!(fill.iter().all(|pixel| ctx.canvas().contains_pixel(pixel)));
  }

  #[test]
  fn generated_polygons_match_reference_fill() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(11);
    let config = GeneratorConfig::default()
      .with_bounds(CanvasBounds::new(0, 120, 0, 90).unwrap());
    for n in [3, 4, 5, 17, 60, 250] {
      let polygon = generate_convex_polygon(n, &config, &mut rng).unwrap();
      assert_eq!(polygon.len(), n);
      assert_eq!(
        ScanlineRasterizer.fill(&polygon, None),
        PointInPolygonRasterizer.fill(&polygon, None),
        "rasterizers disagree on {}-gon",
        n
      );
    }
  }

  #[test]
  fn boxed_rasterizers() {
    let rasterizers: Vec<Box<dyn Rasterizer>> =
      vec![Box::new(ScanlineRasterizer), Box::new(PointInPolygonRasterizer)];
    let square = Polygon::new_unchecked(vec![
      Point::new([1.0, 1.0]),
      Point::new([3.0, 1.0]),
      Point::new([3.0, 3.0]),
      Point::new([1.0, 3.0]),
    ]);
    for rasterizer in &rasterizers {
      let fill = rasterizer.fill(&square, None);
      assert_eq!(fill.len(), 4, "{}", rasterizer.name());
    }
  }
}
