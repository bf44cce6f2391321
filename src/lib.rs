//! Grayscale glow around a set of randomly scattered seed points.
//!
//! Every sample of the canvas is lit according to its distance to the nearest seed: full white
//! on a seed, fading linearly to black at a fixed threshold. The crate is split into
//! [`seeds`] (where the attractors are), [`field`] (evaluating the distance field over a
//! [`Canvas`](geometry::Canvas)), and [`drawing`], which is the only thing the evaluator writes to.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   seed_glow::{
//! #     error::Result,
//! #     drawing::ImageSink,
//! #     falloff::Falloff,
//! #     field::DistanceField,
//! #     geometry::Canvas,
//! #     seeds::SeedSet,
//! #     drawing::PixelSink
//! #   },
//! #   rand::prelude::*
//! # };
//! # fn main() -> Result<()> {
//! let canvas = Canvas::new(640, 480)?;
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! // 100 seeds, never on the outermost pixels
//! let seeds = SeedSet::generate(100, canvas.size(), &mut rng)?;
//!
//! // glow radius of 50 pixels
//! let field = DistanceField::new(canvas, Falloff::new(50.0)?);
//!
//! let mut sink = ImageSink::new(canvas.size()).with_output("out.png");
//! field.evaluate(&seeds, &mut sink)?;
//! sink.present()?; // writes out.png
//! #   Ok(())
//! # }
//! ```
//!
//! Single samples are available too, without any sink:
//! ```
//! # use seed_glow::{field::DistanceField, falloff::Falloff, geometry::{Canvas, P2}, seeds::SeedSet};
//! # fn main() -> seed_glow::error::Result<()> {
//! let field = DistanceField::new(Canvas::new(4, 4)?, Falloff::new(2.0)?);
//! let seeds = SeedSet::from(vec![P2::new(2.0, 2.0)]);
//!
//! assert_eq!(field.sample(&seeds, P2::new(2, 2)).gray, 255);
//! assert_eq!(field.sample(&seeds, P2::new(2, 1)).gray, 127);
//! assert_eq!(field.sample(&seeds, P2::new(0, 0)).gray, 0);
//! #   Ok(())
//! # }
//! ```

pub mod util;
pub mod error;
pub mod geometry;
pub mod seeds;
pub mod sdf;
pub mod falloff;
pub mod field;
pub mod drawing;
pub mod config;
pub mod app;
