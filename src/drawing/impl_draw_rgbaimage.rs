use {
  std::path::{Path, PathBuf},
  euclid::{Box2D, Size2D},
  image::{Luma, Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{FillRect, PixelSink},
    error::Result,
    geometry::PixelSpace
  }
};

/// Cells are clipped to the image; anything past the right or bottom edge is dropped.
impl PixelSink for RgbaImage {
  fn fill_rect(&mut self, rect: FillRect) {
    let bounds = Box2D::from_size(Size2D::<_, PixelSpace>::from(self.dimensions()));
    let area = match rect.to_box2d().intersection(&bounds) {
      Some(x) => x,
      None => return // sample cell lies entirely outside of the image
    };
    let color = Luma([rect.gray]).to_rgba();

    itertools::iproduct!(area.y_range(), area.x_range())
      .for_each(|(y, x)| self.put_pixel(x, y, color));
  }
}

/// Framebuffer which is written to a PNG file on every [`PixelSink::present`].
pub struct ImageSink {
  frame: RgbaImage,
  output: Option<PathBuf>,
  presented: u64
}

impl ImageSink {
  /// Opaque black framebuffer.
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    Self {
      frame: RgbaImage::from_pixel(size.width, size.height, Rgba([0, 0, 0, 255])),
      output: None,
      presented: 0
    }
  }

  pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
    self.output = Some(path.into());
    self
  }

  pub fn output(&self) -> Option<&Path> {
    self.output.as_deref()
  }

  pub fn frame(&self) -> &RgbaImage {
    &self.frame
  }

  pub fn into_frame(self) -> RgbaImage {
    self.frame
  }

  /// Frames presented so far.
  pub fn presented(&self) -> u64 {
    self.presented
  }

  /// Memory held by the framebuffer.
  pub fn byte_size(&self) -> usize {
    self.frame.as_raw().len()
  }
}

impl PixelSink for ImageSink {
  fn fill_rect(&mut self, rect: FillRect) {
    self.frame.fill_rect(rect)
  }

  fn present(&mut self) -> Result<()> {
    if let Some(path) = &self.output {
      self.frame.save(path)?;
      log::info!("frame #{} written to {}", self.presented, path.display());
    }
    self.presented += 1;
    Ok(())
  }
}
