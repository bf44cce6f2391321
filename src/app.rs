//! Render loop: sweep, present, then look at pending input before the next frame.

use {
  crate::{
    config::Config,
    drawing::PixelSink,
    error::Result,
    field::DistanceField,
    seeds::SeedSet
  },
  rand::Rng,
  std::collections::VecDeque
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
  Escape,
  Other
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
  Quit,
  KeyDown(Key),
  KeyUp(Key)
}

impl Event {
  pub fn is_quit(&self) -> bool {
    matches!(self, Event::Quit | Event::KeyDown(Key::Escape))
  }
}

/// Input collaborator. Polled between frames only.
pub trait EventSource {
  fn poll_event(&mut self) -> Option<Event>;
}

/// Scripted input.
impl EventSource for VecDeque<Event> {
  fn poll_event(&mut self) -> Option<Event> {
    self.pop_front()
  }}

/// Headless input: asks to quit once `limit` frames were polled for.
#[derive(Debug, Copy, Clone)]
pub struct FrameLimit {
  limit: u64,
  polled: u64
}

impl FrameLimit {
  pub fn new(limit: u64) -> Self {
    Self { limit, polled: 0 }
  }
}

impl EventSource for FrameLimit {
  fn poll_event(&mut self) -> Option<Event> {
    self.polled += 1;
    (self.polled >= self.limit).then(|| Event::Quit)
  }}

/// Owns the seed set for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct App {
  seeds: SeedSet,
  field: DistanceField
}

impl App {
  /// Fails before any seed is generated if the configuration is unusable.
  pub fn new(config: &Config, rng: &mut impl Rng) -> Result<Self> {
    config.validate()?;
    let canvas = config.canvas()?;
    let seeds = SeedSet::generate(config.num_points, canvas.size(), rng)?;
    log::info!(
      "{} seeds on {}x{}, resolution {}, thresh {}",
      seeds.len(), canvas.width(), canvas.height(), canvas.resolution(), config.thresh
    );
    Ok(Self::with_seeds(seeds, DistanceField::new(canvas, config.falloff()?)))
  }

  pub fn with_seeds(seeds: SeedSet, field: DistanceField) -> Self {
    Self { seeds, field }
  }

  pub fn seeds(&self) -> &SeedSet {
    &self.seeds
  }

  pub fn field(&self) -> &DistanceField {
    &self.field
  }

  /// Render and present frames until a quit event arrives. Every frame is a full sweep.
  /// Returns the number of frames presented.
  pub fn run(&self, sink: &mut impl PixelSink, events: &mut impl EventSource) -> Result<u64> {
    let mut frames = 0;
    loop {
      let stats = self.field.evaluate(&self.seeds, sink)?;
      sink.present()?;
      frames += 1;
      log::debug!("frame #{} presented, {} of {} samples lit", frames, stats.lit, stats.samples);

      // pending events up to the first quit request
      if std::iter::from_fn(|| events.poll_event())
        .inspect(|event| log::trace!("event {:?}", event))
        .any(|event| event.is_quit()) {
        break;
      }
    }
    Ok(frames)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{
      drawing::FillRect,
      error::Error,
      falloff::Falloff,
      geometry::{Canvas, P2}
    },
    rand::prelude::*
  };

  fn rng() -> rand_pcg::Pcg64 {
    rand_pcg::Pcg64::seed_from_u64(0)
  }

  fn small_config() -> Config {
    Config { width: 16, height: 12, num_points: 5, ..Default::default() }
  }

  #[derive(Default)]
  struct CountingSink {
    cells: u64,
    presented: Vec<u64>
  }

  impl PixelSink for CountingSink {
    fn fill_rect(&mut self, _: FillRect) { self.cells += 1; }
    fn present(&mut self) -> Result<()> {
      self.presented.push(self.cells);
      Ok(())
    }
  }

  #[test] fn invalid_configuration_fails_fast() {
    let config = Config { num_points: 0, ..small_config() };
    assert!(matches!(App::new(&config, &mut rng()), Err(Error::InvalidConfiguration(_))));
    let config = Config { resolution: 0, ..small_config() };
    assert!(matches!(App::new(&config, &mut rng()), Err(Error::InvalidConfiguration(_))));
  }

  #[test] fn seeds_follow_the_configuration() -> Result<()> {
    let app = App::new(&small_config(), &mut rng())?;
    assert_eq!(app.seeds().len(), 5);
    assert_eq!(app.field().canvas().size(), euclid::Size2D::new(16, 12));
    assert_eq!(app.field().falloff().thresh(), 50.0);
    Ok(())
  }

  #[test] fn quits_after_the_first_frame() -> Result<()> {
    let app = App::new(&small_config(), &mut rng())?;
    let mut sink = CountingSink::default();
    let mut events = VecDeque::from(vec![Event::KeyUp(Key::Other), Event::Quit]);
    assert_eq!(app.run(&mut sink, &mut events)?, 1);
    assert_eq!(sink.presented, vec![16 * 12]);
    Ok(())
  }

  #[test] fn events_after_quit_are_left_pending() -> Result<()> {
    let app = App::new(&small_config(), &mut rng())?;
    let mut sink = CountingSink::default();
    let mut events = VecDeque::from(vec![Event::Quit, Event::KeyDown(Key::Other)]);
    assert_eq!(app.run(&mut sink, &mut events)?, 1);
    assert_eq!(events, VecDeque::from(vec![Event::KeyDown(Key::Other)]));
    Ok(())
  }

  #[test] fn escape_quits() -> Result<()> {
    let app = App::new(&small_config(), &mut rng())?;
    let mut sink = CountingSink::default();
    let mut events = VecDeque::from(vec![Event::KeyDown(Key::Escape)]);
    assert_eq!(app.run(&mut sink, &mut events)?, 1);
    Ok(())
  }

  // a full sweep is presented before every poll
  #[test] fn frame_limit() -> Result<()> {
    let app = App::new(&small_config(), &mut rng())?;
    let mut sink = CountingSink::default();
    assert_eq!(app.run(&mut sink, &mut FrameLimit::new(3))?, 3);
    assert_eq!(sink.presented, vec![192, 384, 576]);
    Ok(())
  }

  #[test] fn empty_seed_set_is_reported() {
    let field = DistanceField::new(Canvas::new(4, 4).unwrap(), Falloff::default());
    let app = App::with_seeds(SeedSet::default(), field);
    let mut sink = CountingSink::default();
    let ret = app.run(&mut sink, &mut FrameLimit::new(1));
    assert!(matches!(ret, Err(Error::InvalidConfiguration(_))));
    assert!(sink.presented.is_empty());
  }

  #[test] fn frames_are_identical() -> Result<()> {
    let app = App::with_seeds(
      SeedSet::from(vec![P2::new(3.0, 3.0), P2::new(9.0, 5.0)]),
      DistanceField::new(Canvas::new(12, 8)?, Falloff::new(4.0)?)
    );
    let mut sink: Vec<FillRect> = vec![];
    app.run(&mut sink, &mut FrameLimit::new(2))?;
    let (first, second) = sink.split_at(12 * 8);
    assert_eq!(first, second);
    Ok(())
  }
}
