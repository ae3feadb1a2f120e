// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper-left, and a rectangle on the real plane with an
//! arbitrary pair of corners defining the leftlower and rightupper
//! corners of the real plane.  Image rows run downward while the
//! imaginary axis runs upward, so row 0 maps to the top edge of the
//! complex window.
use num::Complex;

use config::RenderConfig;
use error::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// The column and row of a pixel in an image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of the image to points of the complex window.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The width and height of the image.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // The width and height of one pixel on the complex plane.
    pixel_size: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the image, and two points
    /// describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage(width, height));
        }

        if rightupper.re <= leftlower.re || rightupper.im <= leftlower.im {
            return Err(RenderError::InvertedWindow);
        }

        let pixel_size = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            pixel_size,
        })
    }

    /// Build the mapper described by a render configuration.
    pub fn from_config(config: &RenderConfig) -> Result<PlaneMapper, RenderError> {
        PlaneMapper::new(
            config.width,
            config.height,
            config.leftlower,
            config.rightupper,
        )
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The width of one pixel, measured on the complex plane.  The
    /// border test is scaled by this.
    pub fn pixel_width(&self) -> f64 {
        self.pixel_size.0
    }

    /// The height of one pixel, measured on the complex plane.
    pub fn pixel_height(&self) -> f64 {
        self.pixel_size.1
    }

    /// The difference between the aspect ratio of the image and that
    /// of the complex window.  Anything but zero stretches the set.
    pub fn distortion(&self) -> f64 {
        let pixels = (self.integral_plane.0 as f64) / (self.integral_plane.1 as f64);
        let world = (self.complex_plane.1.re - self.complex_plane.0.re)
            / (self.complex_plane.1.im - self.complex_plane.0.im);
        pixels - world
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// corresponding point on the complex plane: xMin plus some
    /// pixel widths, yMax minus some pixel heights.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.pixel_size.0,
            self.complex_plane.1.im - (pixel.1 as f64) * self.pixel_size.1,
        )
    }

    /// Given a point on the complex plane, find the pixel whose
    /// corner point lies nearest to it, or None if the point is off
    /// the image.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re - self.complex_plane.0.re) / self.pixel_size.0).round();
        let top = ((self.complex_plane.1.im - point.im) / self.pixel_size.1).round();
        if left < 0.0
            || left >= (self.integral_plane.0 as f64)
            || top < 0.0
            || top >= (self.integral_plane.1 as f64)
        {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}
