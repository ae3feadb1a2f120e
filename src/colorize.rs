// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The end of the per-pixel pipeline.  `compute_pixel` runs a pixel
//! through the mapper, the iterator, the smoother and the shader, and
//! the resulting ColorResult decides which byte goes into the row.

use num::Complex;

use config::RenderConfig;
use escape::iterate;
use planes::{Pixel, PlaneMapper};
use shading::reflectance;
use smooth::{smooth, Smoothed};

/// The final coloring decision for one pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorResult {
    /// Inside the set: black.
    Interior,
    /// On the boundary of the set: white.
    Border,
    /// Outside the set, shaded by the stripe average and the light.
    Exterior {
        /// Interpolated stripe average, in [0, 1].
        average: f64,
        /// Normal-map reflectance, in [0, 1].
        reflectance: f64,
    },
}

impl ColorResult {
    /// The 8-bit grayscale intensity of this result.
    pub fn intensity(&self) -> u8 {
        match *self {
            ColorResult::Interior => 0,
            ColorResult::Border => 255,
            ColorResult::Exterior {
                average,
                reflectance,
            } => {
                let b = ((254.0 - 100.0 * average) * reflectance).round();
                // NaN falls through both comparisons and casts to 0.
                if b > 255.0 {
                    255
                } else if b < 0.0 {
                    0
                } else {
                    b as u8
                }
            }
        }
    }
}

/// Color a single point of the complex plane.  `pixel_width` sets
/// the scale of the border.
pub fn color_point(c: Complex<f64>, pixel_width: f64, config: &RenderConfig) -> ColorResult {
    let orbit = iterate(c, config);
    match smooth(&orbit, pixel_width, config) {
        Smoothed::Interior => ColorResult::Interior,
        Smoothed::Border => ColorResult::Border,
        Smoothed::Exterior { average, z, dc } => ColorResult::Exterior {
            average,
            reflectance: reflectance(z, dc, config),
        },
    }
}

/// Run a single pixel through the whole pipeline.
pub fn compute_pixel(pixel: &Pixel, plane: &PlaneMapper, config: &RenderConfig) -> ColorResult {
    color_point(plane.pixel_to_point(pixel), plane.pixel_width(), config)
}

/// Write the intensity of a result into every channel of the given
/// column of a row buffer.
pub fn paint(row: &mut [u8], column: usize, channels: usize, result: &ColorResult) {
    let b = result.intensity();
    let start = column * channels;
    for slot in &mut row[start..start + channels] {
        *slot = b;
    }
}
