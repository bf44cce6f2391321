use {
  crate::{
    drawing::{FillRect, PixelSink},
    error::{Error, Result},
    falloff::Falloff,
    geometry::{Canvas, P2},
    sdf::SDF,
    seeds::SeedSet
  }
};


/// Distance from a sample to the nearest seed, and how bright it is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldSample {
  pub point: P2<u32>,
  pub distance: f64,
  pub intensity: f64,
  pub gray: u8
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SweepStats {
  /// Draw calls issued
  pub samples: u64,
  /// Samples with a non-black gray level
  pub lit: u64
}

/// Brute force distance field over a canvas.
///
/// Stateless: the seed set is borrowed for the duration of one sweep, so repeated sweeps over
/// the same seeds are bit-identical.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DistanceField {
  canvas: Canvas,
  falloff: Falloff<f64>
}

impl DistanceField {
  pub fn new(canvas: Canvas, falloff: Falloff<f64>) -> Self {
    Self { canvas, falloff }
  }

  pub fn canvas(&self) -> &Canvas {
    &self.canvas
  }

  pub fn falloff(&self) -> &Falloff<f64> {
    &self.falloff
  }

  /// Evaluate a single grid position.
  pub fn sample(&self, seeds: &SeedSet, point: P2<u32>) -> FieldSample {
    let distance = seeds.sdf(point.to_f64());
    FieldSample {
      point,
      distance,
      intensity: self.falloff.intensity(distance),
      gray: self.falloff.gray_level(distance)
    }
  }

  /// Lazily evaluate every sample of the canvas, in sweep order.
  pub fn samples<'a>(&'a self, seeds: &'a SeedSet)
    -> Result<impl Iterator<Item = FieldSample> + 'a>
  {
    if seeds.is_empty() {
      return Err(Error::invalid_configuration("distance field needs at least one seed"));
    }
    Ok(self.canvas.sample_points()
      .map(move |point| self.sample(seeds, point)))
  }

  /// One full sweep: a `resolution`-sized cell per sample is handed to `sink`.
  /// Nothing is drawn if the seed set is empty.
  pub fn evaluate(&self, seeds: &SeedSet, sink: &mut impl PixelSink) -> Result<SweepStats> {
    let samples = self.samples(seeds)?;
    let size = self.canvas.resolution();

    let stats = crate::profile!("sweep", samples
      .fold(SweepStats::default(), |mut stats, sample| {
        sink.fill_rect(FillRect { origin: sample.point, size, gray: sample.gray });
        stats.samples += 1;
        if sample.gray > 0 { stats.lit += 1; }
        stats
      }));
    log::debug!(
      "sweep over {} seeds: {} samples, {} lit",
      seeds.len(), stats.samples, stats.lit
    );
    Ok(stats)
  }
}
