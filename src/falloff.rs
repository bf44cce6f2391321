use {
  crate::error::{Error, Result},
  num_traits::Float
};

pub const DEFAULT_THRESH: f64 = 50.0;

/// Linear ramp from full white on a seed down to black at `thresh`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Falloff<T> {
  thresh: T
}

impl Default for Falloff<f64> {
  fn default() -> Self {
    Self { thresh: DEFAULT_THRESH }
  }}

impl<T: Float> Falloff<T> {
  pub fn new(thresh: T) -> Result<Self> {
    if !thresh.is_finite() || thresh <= T::zero() {
      return Err(Error::invalid_configuration("falloff threshold must be positive and finite"));
    }
    Ok(Self { thresh })
  }

  pub fn thresh(&self) -> T {
    self.thresh
  }

  /// `(1 - distance / thresh) * 255` inside the threshold, 0 past it; always in `[0, 255]`.
  pub fn intensity(&self, distance: T) -> T {
    let max = T::from(255.0).unwrap_or_else(T::one);
    if !(distance <= self.thresh) {
      return T::zero();
    }
    ((-T::one() / self.thresh * distance + T::one()) * max)
      .max(T::zero())
      .min(max)
  }

  /// Intensity truncated toward zero, as handed to the pixel sink.
  pub fn gray_level(&self, distance: T) -> u8 {
    self.intensity(distance).to_u8().unwrap_or(0)
  }
}
