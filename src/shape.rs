// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Closed-form membership tests for the two biggest pieces of the
//! Mandelbrot set: the main cardioid and the period-2 bulb to its
//! left.  Together they hold about 91% of the interior at the usual
//! zoom, and every point in them would otherwise run all the way to
//! the iteration limit.

use num::Complex;

const D4: f64 = 1.0 / 4.0;
const D16: f64 = D4 / 4.0;

/// True if the point is strictly inside the main cardioid.
#[inline]
pub fn in_cardioid(c: Complex<f64>) -> bool {
    let y = c.im * c.im;
    let q = (c.re - D4) * (c.re - D4) + y;
    q * (q + (c.re - D4)) < D4 * y
}

/// True if the point is strictly inside the period-2 bulb, the disk of
/// radius 1/4 centred on -1.
#[inline]
pub fn in_period2_bulb(c: Complex<f64>) -> bool {
    c.re * c.re + 2.0 * c.re + 1.0 + c.im * c.im < D16
}

/// If this returns true the point is guaranteed to be inside the
/// Mandelbrot set and need not be iterated.  If it returns false,
/// nothing is known.
#[inline]
pub fn in_main_shapes(c: Complex<f64>) -> bool {
    in_period2_bulb(c) || in_cardioid(c)
}
