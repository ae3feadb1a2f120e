// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The RenderConfig describes everything a render needs to know: the
//! window onto the complex plane, the size of the image, and the
//! knobs and dials of the iteration, striping, border and lighting
//! stages.  Once built it is never mutated, and every pixel reads
//! from the same copy.

use num::Complex;
use std::str::FromStr;

use error::RenderError;

/// The complete, immutable description of a render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Width of the image, in pixels.
    pub width: usize,
    /// Height of the image, in pixels.
    pub height: usize,
    /// The left-lower corner of the window onto the complex plane:
    /// (xMin, yMin).
    pub leftlower: Complex<f64>,
    /// The right-upper corner of the window onto the complex plane:
    /// (xMax, yMax).
    pub rightupper: Complex<f64>,
    /// The maximum number of iterations before a point is declared
    /// part of the set.
    pub max_iterations: usize,
    /// The bail-out radius.  This is deliberately huge: the distance
    /// estimate and the smooth iteration count are only accurate once
    /// |z| is far from the set.
    pub escape_radius: f64,
    /// Multiplier on arg(z) in the stripe addend.  Higher is more
    /// dense.
    pub stripe_density: f64,
    /// Iterations with an index at or below this are excluded from
    /// the stripe average.
    pub skip: usize,
    /// The border is drawn where the distance estimate falls below
    /// `pixel_width / thinness`.  Bigger is thinner.
    pub thinness: f64,
    /// Direction of the incoming light, as a fraction of a full turn.
    pub light_angle: f64,
    /// Height of the incoming light above the plane.  Bigger values
    /// flatten the relief.
    pub height_factor: f64,
    /// Skip iteration for points inside the main cardioid and the
    /// period-2 bulb.  Only worth it when those are on screen.
    pub shape_check: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1000,
            height: 1000,
            leftlower: Complex::new(-2.2, -1.5),
            rightupper: Complex::new(0.8, 1.5),
            max_iterations: 1000,
            escape_radius: 1_000_000.0,
            stripe_density: 7.0,
            skip: 1,
            thinness: 3.0,
            light_angle: 45.0 / 360.0,
            height_factor: 1.5,
            shape_check: true,
        }
    }
}

impl RenderConfig {
    /// Confirm that the configuration describes a render the pipeline
    /// can perform without dividing by zero or taking the log of
    /// something it shouldn't.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage(self.width, self.height));
        }
        if self.rightupper.re <= self.leftlower.re || self.rightupper.im <= self.leftlower.im {
            return Err(RenderError::InvertedWindow);
        }
        if self.max_iterations == 0 {
            return Err(RenderError::ZeroIterations);
        }
        // NaN fails this comparison too.
        if !(self.escape_radius > 2.0) {
            return Err(RenderError::EscapeRadiusTooSmall(self.escape_radius));
        }
        if self.skip >= self.max_iterations {
            return Err(RenderError::SkipCountTooLarge(self.skip, self.max_iterations));
        }
        if !(self.thinness > 0.0) || !self.thinness.is_finite() {
            return Err(RenderError::BadThinness(self.thinness));
        }
        Ok(())
    }
}

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_image_is_refused() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        match config.validate() {
            Err(RenderError::EmptyImage(0, 1000)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn inverted_window_is_refused() {
        let config = RenderConfig {
            leftlower: Complex::new(0.8, 1.5),
            rightupper: Complex::new(-2.2, -1.5),
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn small_escape_radius_is_refused() {
        let config = RenderConfig {
            escape_radius: 2.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
        let config = RenderConfig {
            escape_radius: std::f64::NAN,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn skip_must_leave_iterations_to_average() {
        let config = RenderConfig {
            skip: 1000,
            ..RenderConfig::default()
        };
        match config.validate() {
            Err(RenderError::SkipCountTooLarge(1000, 1000)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn thinness_must_be_positive() {
        let config = RenderConfig {
            thinness: 0.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_pair_reads_sizes_and_points() {
        assert_eq!(parse_pair::<usize>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<usize>("800x", 'x'), None);
        assert_eq!(parse_pair::<usize>("800", 'x'), None);
        assert_eq!(parse_complex("-2.2,1.5"), Some(Complex::new(-2.2, 1.5)));
        assert_eq!(parse_complex("-2.2;1.5"), None);
    }
}
