use {
  crate::{
    geometry::{DistPoint, P2},
    seeds::SeedSet
  },
  num_traits::Float
};

/// Unsigned distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: P2<T>) -> T;
}

/// Distance to the closest point. Brute force, every point is visited.
/// Empty set is infinitely far away.
impl<T: Float> SDF<T> for [P2<T>] {
  fn sdf(&self, pixel: P2<T>) -> T {
    self.iter()
      .fold(T::infinity(), |min, point| min.min(point.distance_to(pixel)))
  }}

impl SDF<f64> for SeedSet {
  fn sdf(&self, pixel: P2<f64>) -> f64 {
    self.as_slice().sdf(pixel)
  }}

impl SeedSet {
  /// Index and location of the closest seed, the first one wins on ties.
  pub fn nearest(&self, pixel: P2<f64>) -> Option<(usize, DistPoint<f64, f64>)> {
    self.iter()
      .map(|seed| DistPoint { distance: seed.distance_to(pixel), point: *seed })
      .enumerate()
      .fold(None, |best, (i, current)| match best {
        Some((_, ref b)) if *b <= current => best,
        _ => Some((i, current))
      })
  }
}
