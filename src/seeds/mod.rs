use {
  crate::{
    error::{Error, Result},
    geometry::{P2, PixelSpace}
  },
  euclid::Size2D,
  rand::Rng,
  std::ops::Deref
};


/// Attractors of the distance field. Created once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSet {
  points: Vec<P2<f64>>
}

impl SeedSet {
  /// Scatter `count` seeds uniformly over `[1, width - 1] x [1, height - 1]`, on integer positions.
  /// The edge rows and columns are never picked.
  pub fn generate(
    count: usize,
    size: Size2D<u32, PixelSpace>,
    rng: &mut impl Rng
  ) -> Result<Self> {
    if count == 0 {
      return Err(Error::invalid_configuration("at least one seed is required"));
    }
    if size.width < 2 || size.height < 2 {
      return Err(Error::invalid_configuration(format!(
        "canvas {}x{} leaves no room for seeds, both sides must be at least 2",
        size.width, size.height
      )));
    }

    let points = (0..count)
      .map(|_| P2::new(
        rng.gen_range(1..=size.width - 1) as f64,
        rng.gen_range(1..=size.height - 1) as f64
      ))
      .collect::<Vec<_>>();
    log::debug!("generated {} seeds on {}x{}", points.len(), size.width, size.height);
    Ok(Self { points })
  }

  pub fn as_slice(&self) -> &[P2<f64>] {
    &self.points
  }
}

/// Explicit layout; emptiness is reported by the evaluator, not here.
impl From<Vec<P2<f64>>> for SeedSet {
  fn from(points: Vec<P2<f64>>) -> Self {
    Self { points }
  }
}

impl FromIterator<P2<f64>> for SeedSet {
  fn from_iter<I: IntoIterator<Item = P2<f64>>>(iter: I) -> Self {
    Self { points: iter.into_iter().collect() }
  }
}

impl Deref for SeedSet {
  type Target = [P2<f64>];

  fn deref(&self) -> &Self::Target {
    &self.points
  }
}
