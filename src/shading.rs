// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Normal mapping.  z / (dz/dc) points away from the set, so if we
//! pretend the exterior is a surface rising toward the set, that
//! direction is its normal, and a single distant light source gives
//! each point a brightness.

use num::Complex;
use std::f64::consts::PI;

use config::RenderConfig;

/// The dot product of two complex numbers treated as 2D vectors.
#[inline]
pub fn dot(a: Complex<f64>, b: Complex<f64>) -> f64 {
    a.re * b.re + a.im * b.im
}

/// The unit vector pointing toward the light, `angle` turns
/// counterclockwise from the positive real axis.
pub fn light_direction(angle: f64) -> Complex<f64> {
    Complex::new(0.0, 2.0 * PI * angle).exp()
}

/// How much of the light the surface at this point reflects, in
/// [0, 1].  The light sits `height_factor` above the plane; the result
/// is rescaled so a normal pointing straight at it gives 1.  A zero
/// derivative has no normal and reflects nothing.
pub fn reflectance(z: Complex<f64>, dc: Complex<f64>, config: &RenderConfig) -> f64 {
    if dc.norm_sqr() == 0.0 {
        return 0.0;
    }
    let u = z / dc;
    let u = u / u.norm();
    if !u.re.is_finite() || !u.im.is_finite() {
        return 0.0;
    }
    let h = config.height_factor;
    let v = light_direction(config.light_angle);
    let reflection = (dot(u, v) + h) / (1.0 + h);
    if reflection < 0.0 {
        0.0
    } else {
        reflection
    }
}
