// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a render can be refused before it starts, or fail while
//! its result is being saved.  The per-pixel pipeline itself never
//! fails; everything here belongs to setting up a render or writing
//! it out.

use std::io;

/// Everything that can go wrong when building a renderer or writing
/// its image.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// One or both of the image dimensions is zero.
    #[fail(display = "Image dimensions must be non-zero, got {}x{}", _0, _1)]
    EmptyImage(usize, usize),

    /// The left lower corner of the complex window is not strictly
    /// left of and below the right upper corner.
    #[fail(display = "The left lower corner must be to the left of and below the right upper corner")]
    InvertedWindow,

    /// The escape radius is too small for the distance estimate and
    /// the smooth iteration count to be meaningful.
    #[fail(display = "Escape radius must be greater than 2, got {}", _0)]
    EscapeRadiusTooSmall(f64),

    /// There would be no iterations left to average after skipping.
    #[fail(display = "Skip count {} must be less than the iteration limit {}", _0, _1)]
    SkipCountTooLarge(usize, usize),

    /// An iteration limit of zero renders nothing.
    #[fail(display = "Iteration limit must be at least 1")]
    ZeroIterations,

    /// The border thinness divisor must be a positive, finite number.
    #[fail(display = "Border thinness must be positive, got {}", _0)]
    BadThinness(f64),

    /// The image could not be written.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),

    /// The image encoder refused the pixel buffer.
    #[fail(display = "Could not encode image: {}", _0)]
    Image(#[cause] image::ImageError),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}
