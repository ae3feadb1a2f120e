// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns the raw end state of an orbit into something that can be
//! colored.  Escaped points close enough to the set to be under a
//! fraction of a pixel away are declared border; the rest get their
//! stripe sums averaged and interpolated by the fractional part of
//! the smooth iteration count, which hides the banding that integer
//! escape counts would produce.

use num::Complex;
use std::f64::consts::LN_2;

use config::RenderConfig;
use escape::{IterationState, Orbit};

/// An orbit, sorted into the three ways it can be colored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Smoothed {
    /// Never escaped.  Stands in for an average of -1.
    Interior,
    /// Escaped, but within the border width of the set.
    Border,
    /// Escaped far enough from the set to be shaded.
    Exterior {
        /// The interpolated stripe average, in [0, 1].
        average: f64,
        /// The final iterate, for the normal map.
        z: Complex<f64>,
        /// The final derivative, for the normal map.
        dc: Complex<f64>,
    },
}

/// Estimate the distance from the orbit's starting point to the
/// boundary of the set: 2 |z| ln|z| / |dz/dc|.  A vanishing derivative
/// gives an infinite distance rather than a division by zero.
pub fn distance_estimate(state: &IterationState) -> f64 {
    let dc = state.dc.norm();
    if dc == 0.0 {
        return ::std::f64::INFINITY;
    }
    2.0 * state.r * state.r.ln() / dc
}

/// The fractional part of the smooth iteration count,
/// i + 1 + log2(ln(ER) / ln(R)).  Used as the weight between the last
/// two stripe averages.
pub fn smooth_fraction(state: &IterationState, escape_radius: f64) -> f64 {
    let d = (state.i as f64) + 1.0 + (escape_radius.ln() / state.r.ln()).ln() / LN_2;
    d.fract()
}

/// Average both stripe sums over the iterations that contributed to
/// them and blend them by the smooth iteration fraction.  A sum that
/// had no iterations to average over is used as accumulated, which is
/// zero.
pub fn interpolated_average(state: &IterationState, config: &RenderConfig) -> f64 {
    let counted = state.i as i64 - config.skip as i64;
    let a = if counted > 0 {
        state.a / (counted as f64)
    } else {
        state.a
    };
    let prev_a = if counted - 1 > 0 {
        state.prev_a / ((counted - 1) as f64)
    } else {
        state.prev_a
    };
    let d = smooth_fraction(state, config.escape_radius);
    d * a + (1.0 - d) * prev_a
}

/// Sort an orbit into interior, border, or shaded exterior.  The border
/// is anything whose distance estimate is under `pixel_width / thinness`.
pub fn smooth(orbit: &Orbit, pixel_width: f64, config: &RenderConfig) -> Smoothed {
    match *orbit {
        Orbit::Interior => Smoothed::Interior,
        Orbit::Escaped(ref state) => {
            if distance_estimate(state) < pixel_width / config.thinness {
                return Smoothed::Border;
            }
            Smoothed::Exterior {
                average: interpolated_average(state, config),
                z: state.z,
                dc: state.dc,
            }
        }
    }
}
