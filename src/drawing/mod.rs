//! Output side of a sweep.
//!
//! The evaluator only knows [`PixelSink`]: it is handed one [`FillRect`] per sample, and the
//! orchestrator calls [`PixelSink::present`] once the sweep is complete. Image backed sinks
//! require the `drawing` feature.

use {
  crate::{
    error::Result,
    geometry::{P2, PixelSpace}
  },
  euclid::{Box2D, Point2D}
};

#[cfg(feature = "drawing")]
mod impl_draw_rgbaimage;
#[cfg(feature = "drawing")]
pub use impl_draw_rgbaimage::ImageSink;

/// Filled square of side `size` at top-left `origin`, `gray` on all three channels, fully opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FillRect {
  pub origin: P2<u32>,
  pub size: u32,
  pub gray: u8
}

impl FillRect {
  pub fn to_box2d(&self) -> Box2D<u32, PixelSpace> {
    Box2D::new(
      self.origin,
      Point2D::new(
        self.origin.x.saturating_add(self.size),
        self.origin.y.saturating_add(self.size)
      ))}}

pub trait PixelSink {
  fn fill_rect(&mut self, rect: FillRect);

  /// Called once per completed sweep.
  fn present(&mut self) -> Result<()> { Ok(()) }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
  fn fill_rect(&mut self, rect: FillRect) { (**self).fill_rect(rect) }
  fn present(&mut self) -> Result<()> { (**self).present() }
}

/// Records draw commands.
impl PixelSink for Vec<FillRect> {
  fn fill_rect(&mut self, rect: FillRect) {
    self.push(rect)
  }}
