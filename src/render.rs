// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the per-pixel pipeline over a whole image.  Every pixel is
//! independent of every other, so the multi-threaded version simply
//! hands out rows to whichever worker is free; each row is a disjoint
//! slice of the output buffer, so the image comes out in row order
//! whatever order the rows were finished in.

use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use colorize::{compute_pixel, paint};
use config::RenderConfig;
use error::RenderError;
use output::Channels;
use planes::{Pixel, PlaneMapper};

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u8>>>>;

/// Holds a validated configuration and the plane it describes, and
/// renders it.
pub struct StripeRenderer {
    config: RenderConfig,
    plane: PlaneMapper,
}

impl StripeRenderer {
    /// Validates the configuration and builds the mapping between the
    /// image and the complex window.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let plane = PlaneMapper::from_config(&config)?;
        Ok(StripeRenderer { config, plane })
    }

    /// The configuration being rendered.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The mapping between pixels and the complex plane.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    fn stride(&self, channels: Channels) -> usize {
        self.plane.integral_plane.0 * channels.count()
    }

    /// Fill a single row buffer.
    pub fn render_row(&self, row: usize, channels: Channels, buffer: &mut [u8]) {
        assert!(buffer.len() == self.stride(channels));
        for column in 0..self.plane.integral_plane.0 {
            let result = compute_pixel(&Pixel(column, row), &self.plane, &self.config);
            paint(buffer, column, channels.count(), &result);
        }
    }

    /// Render the whole image on the calling thread.
    pub fn render_single(&self, channels: Channels) -> Vec<u8> {
        let stride = self.stride(channels);
        let mut pixels = vec![0 as u8; self.plane.len() * channels.count()];
        for (row, column) in iproduct!(0..self.plane.integral_plane.1, 0..self.plane.integral_plane.0)
        {
            let result = compute_pixel(&Pixel(column, row), &self.plane, &self.config);
            paint(
                &mut pixels[row * stride..(row + 1) * stride],
                column,
                channels.count(),
                &result,
            );
        }
        pixels
    }

    /// Render the whole image, spreading rows over the given number
    /// of threads.  The result is byte-for-byte the same as
    /// `render_single`.
    pub fn render(&self, threads: usize, channels: Channels) -> Vec<u8> {
        let threads = threads.max(1);
        let stride = self.stride(channels);
        let mut pixels = vec![0 as u8; self.plane.len() * channels.count()];
        debug!(
            threads = threads,
            rows = self.plane.integral_plane.1,
            "dispatching rows"
        );
        {
            let rows: RowQueue = Arc::new(Mutex::new(pixels.chunks_mut(stride).enumerate()));
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    let rows = rows.clone();
                    spawner.spawn(move |_| loop {
                        let next = { rows.lock().unwrap().next() };
                        match next {
                            Some((row, buffer)) => self.render_row(row, channels, buffer),
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .unwrap();
        }
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorize::ColorResult;
    use num::Complex;

    fn small() -> RenderConfig {
        RenderConfig {
            width: 48,
            height: 32,
            leftlower: Complex::new(-2.2, -1.1),
            rightupper: Complex::new(0.8, 0.9),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn invalid_configs_are_refused() {
        let config = RenderConfig {
            height: 0,
            ..small()
        };
        assert!(StripeRenderer::new(config).is_err());
        let config = RenderConfig {
            skip: 2000,
            ..small()
        };
        assert!(StripeRenderer::new(config).is_err());
    }

    #[test]
    fn single_and_threaded_renders_agree() {
        let renderer = StripeRenderer::new(small()).unwrap();
        let single = renderer.render_single(Channels::Rgb);
        assert_eq!(single.len(), 48 * 32 * 3);
        for threads in 1..5 {
            assert_eq!(renderer.render(threads, Channels::Rgb), single);
        }
        assert_eq!(renderer.render(0, Channels::Rgb), single);
    }

    #[test]
    fn gray_is_the_first_channel_of_rgb() {
        let renderer = StripeRenderer::new(small()).unwrap();
        let rgb = renderer.render(2, Channels::Rgb);
        let gray = renderer.render(2, Channels::Gray);
        assert_eq!(gray.len(), 48 * 32);
        for (i, chunk) in rgb.chunks(3).enumerate() {
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
            assert_eq!(chunk[0], gray[i]);
        }
    }

    #[test]
    fn rows_come_out_in_order() {
        let renderer = StripeRenderer::new(small()).unwrap();
        let pixels = renderer.render(3, Channels::Gray);
        for (row, buffer) in pixels.chunks(48).enumerate() {
            let mut expected = vec![0 as u8; 48];
            renderer.render_row(row, Channels::Gray, &mut expected);
            assert_eq!(buffer, &expected[..]);
        }
    }

    #[test]
    fn two_by_two_has_exterior_and_interior() {
        let config = RenderConfig {
            width: 2,
            height: 2,
            ..RenderConfig::default()
        };
        let renderer = StripeRenderer::new(config).unwrap();
        let plane = renderer.plane();

        let corner = Pixel(0, 0);
        assert_eq!(plane.pixel_to_point(&corner), Complex::new(-2.2, 1.5));
        match compute_pixel(&corner, plane, &config) {
            result @ ColorResult::Exterior { .. } => assert!(result.intensity() > 0),
            other => panic!("unexpected {:?}", other),
        }

        let body = plane.point_to_pixel(&Complex::new(-1.0, 0.0)).unwrap();
        let result = compute_pixel(&body, plane, &config);
        assert_eq!(result, ColorResult::Interior);
        assert_eq!(result.intensity(), 0);

        let pixels = renderer.render_single(Channels::Gray);
        assert!(pixels[0] > 0);
        assert_eq!(pixels[body.1 * 2 + body.0], 0);
    }
}
