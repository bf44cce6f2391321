//! .
//!
//! The origin of coordinate system is in top-left corner, one unit is one pixel.
//! Seeds live on integer positions but are stored as `f64`, samples are taken on an integer grid.

use {
  euclid::{Point2D, Size2D},
  crate::error::{Error, Result}
};

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2<T> = Point2D<T, PixelSpace>;

/// Upper bound of the sample grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Boundary {
  /// `[0, dimension)`
  #[default]
  HalfOpen,
  /// `[0, dimension]`, one row and one column past the last pixel. Pixel-compatible with the
  /// legacy renderer, the extra samples are clipped by image sinks.
  Inclusive,
}

impl Boundary {
  /// Number of integer positions along an axis of length `dimension`.
  pub fn span(self, dimension: u32) -> u64 {
    match self {
      Boundary::HalfOpen => dimension as u64,
      Boundary::Inclusive => dimension as u64 + 1,
    }}}

/// Drawing surface the field is swept over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
  size: Size2D<u32, PixelSpace>,
  resolution: u32,
  boundary: Boundary,
}

impl Canvas {
  pub fn new(width: u32, height: u32) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::invalid_configuration(
        format!("canvas must not be empty, got {}x{}", width, height)
      ));
    }
    Ok(Self {
      size: Size2D::new(width, height),
      resolution: 1,
      boundary: Boundary::default(),
    })
  }

  /// Side of the square cell drawn for every sample; the grid is stepped by the same amount.
  pub fn with_resolution(mut self, resolution: u32) -> Result<Self> {
    if resolution == 0 {
      return Err(Error::invalid_configuration("resolution must be at least 1"));
    }
    self.resolution = resolution;
    Ok(self)
  }

  pub fn with_boundary(mut self, boundary: Boundary) -> Self {
    self.boundary = boundary;
    self
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }
  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn resolution(&self) -> u32 { self.resolution }
  pub fn boundary(&self) -> Boundary { self.boundary }

  /// Number of samples in one sweep.
  pub fn sample_count(&self) -> u64 {
    let steps = |dimension| {
      let span = self.boundary.span(dimension);
      (span + self.resolution as u64 - 1) / self.resolution as u64
    };
    steps(self.size.width) * steps(self.size.height)
  }

  /// Top-left corners of all sample cells, columns first: `x` is the outer loop.
  pub fn sample_points(&self) -> impl Iterator<Item = P2<u32>> {
    let step = self.resolution as usize;
    let last = |dimension: u32| match self.boundary {
      Boundary::HalfOpen => dimension - 1,
      Boundary::Inclusive => dimension,
    };
    let xs = (0..=last(self.size.width)).step_by(step);
    let ys = (0..=last(self.size.height)).step_by(step);
    itertools::iproduct!(xs, ys)
      .map(|(x, y)| P2::new(x, y))
  }
}

/// A distance, and the point it was measured to.
#[derive(Copy, Clone, Debug)]
pub struct DistPoint<D, P> {
  pub distance: D,
  pub point: P2<P>
}

impl<D: PartialEq, P> PartialEq for DistPoint<D, P> {
  fn eq(&self, other: &Self) -> bool {
    self.distance.eq(&other.distance)
  }
}

impl<D: PartialOrd, P> PartialOrd for DistPoint<D, P> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    self.distance.partial_cmp(&other.distance)
  }
}
