// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iterator.  This is our classic iteration of
//! z <- z^2 + c, carrying along two extra passengers: the derivative
//! of z with respect to c, which later gives us both a distance
//! estimate and a surface normal, and a running sum of the stripe
//! addend, which gives us the banded texture.

use num::Complex;

use config::RenderConfig;
use shape::in_main_shapes;

/// Everything the later stages need to know about a point's orbit at
/// the moment it escaped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IterationState {
    /// The point being iterated.
    pub c: Complex<f64>,
    /// The iterate.
    pub z: Complex<f64>,
    /// dz/dc.
    pub dc: Complex<f64>,
    /// The index of the iteration on which |z| passed the escape
    /// radius.
    pub i: usize,
    /// The running stripe sum, A(n).
    pub a: f64,
    /// The stripe sum one iteration earlier, A(n-1).
    pub prev_a: f64,
    /// |z| on the final iteration.
    pub r: f64,
}

impl IterationState {
    fn new(c: Complex<f64>) -> Self {
        IterationState {
            c,
            z: Complex::new(0.0, 0.0),
            dc: Complex::new(0.0, 0.0),
            i: 0,
            a: 0.0,
            prev_a: 0.0,
            r: 0.0,
        }
    }
}

/// How the iteration of a single point ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Orbit {
    /// The point either sits inside one of the main shapes or ran to
    /// the iteration limit without escaping.
    Interior,
    /// The point escaped; here is its final state.
    Escaped(IterationState),
}

/// The stripe addend: maps the angle of z onto [0, 1] with a sine
/// wave of the given density.
#[inline]
pub fn stripe_term(z: Complex<f64>, density: f64) -> f64 {
    0.5 + 0.5 * (density * z.arg()).sin()
}

/// Iterate a single point to escape or to the iteration limit.
pub fn iterate(c: Complex<f64>, config: &RenderConfig) -> Orbit {
    if config.shape_check && in_main_shapes(c) {
        return Orbit::Interior;
    }

    let mut state = IterationState::new(c);
    for i in 0..config.max_iterations {
        // dc must be advanced with the z from before this iteration.
        state.dc = state.dc * state.z * 2.0 + 1.0;
        state.z = state.z * state.z + c;

        if i > config.skip {
            state.a += stripe_term(state.z, config.stripe_density);
        }

        state.r = state.z.norm();
        if state.r > config.escape_radius {
            state.i = i;
            return Orbit::Escaped(state);
        }
        state.prev_a = state.a;
    }
    Orbit::Interior
}
