//! Runtime configuration. Defaults reproduce the stock renderer: 100 seeds on a 640x480 canvas,
//! one sample per pixel, glow radius of 50 pixels.

use {
  crate::{
    error::{Error, Result},
    falloff::{Falloff, DEFAULT_THRESH},
    geometry::{Boundary, Canvas}
  },
  clap::Parser,
  std::path::PathBuf
};

/// Command line of the renderer.
#[derive(Debug, Clone, Parser)]
#[command(name = "seed-glow", about = "Grayscale glow around randomly scattered seed points")]
pub struct Args {
  /// Number of seeds
  #[arg(long = "points", default_value_t = 100)]
  pub num_points: usize,
  /// Side of a sample cell in pixels
  #[arg(long, default_value_t = 1)]
  pub resolution: u32,
  /// Glow radius in pixels
  #[arg(long, default_value_t = DEFAULT_THRESH, allow_hyphen_values = true)]
  pub thresh: f64,
  /// Canvas size, WxH
  #[arg(long, value_parser = parse_size, default_value = "640x480")]
  pub size: (u32, u32),
  /// Seed of the random generator, random if omitted
  #[arg(long)]
  pub seed: Option<u64>,
  /// PNG written on every presented frame
  #[arg(long, default_value = "out.png")]
  pub output: PathBuf,
  /// Sweeps to run before quitting
  #[arg(long, default_value_t = 1)]
  pub frames: u64,
  /// Also sample the row and column at x = width, y = height
  #[arg(long)]
  pub inclusive_edge: bool,
}

fn parse_size(size: &str) -> std::result::Result<(u32, u32), String> {
  let (w, h) = size.split_once('x')
    .ok_or_else(|| format!("expected WxH, got {:?}", size))?;
  let side = |s: &str| s.parse::<u32>().map_err(|e| format!("{:?}: {}", s, e));
  Ok((side(w)?, side(h)?))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub num_points: usize,
  pub resolution: u32,
  pub thresh: f64,
  pub width: u32,
  pub height: u32,
  pub boundary: Boundary,
  pub seed: Option<u64>,
  pub output: PathBuf,
  pub frames: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      num_points: 100,
      resolution: 1,
      thresh: DEFAULT_THRESH,
      width: 640,
      height: 480,
      boundary: Boundary::HalfOpen,
      seed: None,
      output: "out.png".into(),
      frames: 1,
    }}}

impl From<Args> for Config {
  fn from(args: Args) -> Self {
    Self {
      num_points: args.num_points,
      resolution: args.resolution,
      thresh: args.thresh,
      width: args.size.0,
      height: args.size.1,
      boundary: if args.inclusive_edge { Boundary::Inclusive } else { Boundary::HalfOpen },
      seed: args.seed,
      output: args.output,
      frames: args.frames,
    }}}

impl Config {
  /// Parse command line arguments, program name excluded. `--help` is reported as an error
  /// carrying the rendered help text.
  pub fn from_args<I, S>(args: I) -> Result<Config>
    where I: IntoIterator<Item = S>,
          S: Into<String> {
    let args = std::iter::once("seed-glow".to_string())
      .chain(args.into_iter().map(Into::into));
    Args::try_parse_from(args)
      .map(Config::from)
      .map_err(|e| Error::invalid_argument(e.to_string()))
  }

  /// Reject anything a sweep can't be run with, before any work is done.
  pub fn validate(&self) -> Result<()> {
    if self.num_points == 0 {
      return Err(Error::invalid_configuration("number of seeds must be at least 1"));
    }
    if self.frames == 0 {
      return Err(Error::invalid_configuration("at least one frame must be rendered"));
    }
    if self.width < 2 || self.height < 2 {
      return Err(Error::invalid_configuration(format!(
        "canvas {}x{} is too small, both sides must be at least 2",
        self.width, self.height
      )));
    }
    self.canvas()?;
    self.falloff()?;
    Ok(())
  }

  pub fn canvas(&self) -> Result<Canvas> {
    Ok(Canvas::new(self.width, self.height)?
      .with_resolution(self.resolution)?
      .with_boundary(self.boundary))
  }

  pub fn falloff(&self) -> Result<Falloff<f64>> {
    Falloff::new(self.thresh)
  }
}
