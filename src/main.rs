use {
  seed_glow::{
    app::{App, FrameLimit},
    config::{Args, Config},
    drawing::ImageSink,
    geometry::Boundary,
    profile,
    util
  },
  anyhow::{Context, Result},
  clap::Parser,
  rand::prelude::*
};

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let config = Config::from(Args::parse());

  // always log the seed, so that any run can be reproduced with --seed
  let seed = config.seed
    .unwrap_or_else(|| rand_pcg::Pcg64::from_entropy().gen());
  log::info!("rng seed {}", seed);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);

  let app = App::new(&config, &mut rng)?;
  let canvas = app.field().canvas();
  if canvas.boundary() == Boundary::Inclusive {
    log::warn!("inclusive edge: the last sample row and column fall outside of the image");
  }

  let mut sink = ImageSink::new(canvas.size())
    .with_output(&config.output);
  log::info!("framebuffer {}x{}, {}", canvas.width(), canvas.height(), util::byte_size(sink.byte_size()));

  let frames = profile!("run", app.run(&mut sink, &mut FrameLimit::new(config.frames)))
    .with_context(|| format!("failed to render {}", config.output.display()))?;
  log::info!("{} frame(s) presented to {}", frames, config.output.display());
  Ok(())
}
