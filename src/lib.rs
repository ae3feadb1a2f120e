#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Stripebrot renderer
//!
//! The Mandelbrot set takes a point on the complex plane and
//! repeatedly squares it and adds the original point back, measuring
//! how quickly that number goes to infinity.  The classic rendering
//! colors each pixel by how many iterations that took, which gives
//! hard bands of color.
//!
//! This renderer does three things differently.  It averages a
//! periodic function of the angle of each iterate (the "stripe
//! average"), and blends the last two averages by the fractional
//! part of the smooth iteration count, so the bands melt into each
//! other.  It carries the derivative of the iteration along with the
//! iteration itself, which tells us roughly how far each point is
//! from the set; anything closer than a fraction of a pixel is drawn
//! as a bright border.  And it treats the direction of that
//! derivative as the normal of a surface, lighting it from a single
//! angle so the exterior looks embossed.
//!
//! Every pixel is a pure function of its coordinates and the
//! RenderConfig, so rendering parallelises trivially by rows.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
extern crate num;
#[macro_use]
extern crate tracing;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod colorize;
pub mod config;
pub mod error;
pub mod escape;
pub mod output;
pub mod planes;
pub mod render;
pub mod shading;
pub mod shape;
pub mod smooth;

pub use colorize::{color_point, compute_pixel, ColorResult};
pub use config::RenderConfig;
pub use error::RenderError;
pub use output::{write_image, Channels};
pub use planes::{Pixel, PlaneMapper};
pub use render::StripeRenderer;
