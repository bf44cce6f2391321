use {
  super::*,
  crate::error::Result
};

#[test] fn empty_canvas_is_rejected() {
  assert!(matches!(Canvas::new(0, 480), Err(Error::InvalidConfiguration(_))));
  assert!(matches!(Canvas::new(640, 0), Err(Error::InvalidConfiguration(_))));
}

#[test] fn zero_resolution_is_rejected() -> Result<()> {
  let canvas = Canvas::new(4, 4)?;
  assert!(matches!(canvas.with_resolution(0), Err(Error::InvalidConfiguration(_))));
  Ok(())
}

#[test] fn half_open_grid() -> Result<()> {
  let canvas = Canvas::new(3, 2)?;
  let points = canvas.sample_points().collect::<Vec<_>>();
  assert_eq!(canvas.sample_count(), 6);
  assert_eq!(points.len(), 6);
  // columns first
  assert_eq!(points[0], P2::new(0, 0));
  assert_eq!(points[1], P2::new(0, 1));
  assert_eq!(points[2], P2::new(1, 0));
  assert_eq!(*points.last().unwrap(), P2::new(2, 1));
  Ok(())
}

#[test] fn inclusive_grid_reaches_the_edge() -> Result<()> {
  let canvas = Canvas::new(3, 2)?.with_boundary(Boundary::Inclusive);
  let points = canvas.sample_points().collect::<Vec<_>>();
  assert_eq!(canvas.sample_count(), 12);
  assert_eq!(points.len(), 12);
  assert_eq!(*points.last().unwrap(), P2::new(3, 2));
  Ok(())
}

#[test] fn grid_is_stepped_by_resolution() -> Result<()> {
  let canvas = Canvas::new(10, 7)?.with_resolution(4)?;
  let points = canvas.sample_points().collect::<Vec<_>>();
  // x: 0 4 8, y: 0 4
  assert_eq!(canvas.sample_count(), 6);
  assert_eq!(points, vec![
    P2::new(0, 0), P2::new(0, 4),
    P2::new(4, 0), P2::new(4, 4),
    P2::new(8, 0), P2::new(8, 4),
  ]);
  Ok(())
}

#[test] fn dist_point_ordering() {
  let near = DistPoint { distance: 1.0, point: P2::new(5.0, 5.0) };
  let far = DistPoint { distance: 2.0, point: P2::new(0.0, 0.0) };
  assert!(near < far);
  assert_eq!(near, DistPoint { distance: 1.0, point: P2::new(0.0, 0.0) });
}

#[test] fn inclusive_edge_of_the_widest_canvas() -> Result<()> {
  let canvas = Canvas::new(u32::MAX, 1)?
    .with_boundary(Boundary::Inclusive)
    .with_resolution(u32::MAX)?;
  let points = canvas.sample_points().collect::<Vec<_>>();
  assert_eq!(canvas.sample_count(), 2);
  assert_eq!(points, vec![P2::new(0, 0), P2::new(u32::MAX, 0)]);
  Ok(())
}
