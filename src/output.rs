// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Serialises a finished pixel buffer.  Binary PNM is the native
//! format: the renderer's rows are already laid out as a P5 or P6
//! body.  A `.png` extension is honoured for convenience.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::Path;

use error::RenderError;

/// How many bytes each pixel occupies in the buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Channels {
    /// One byte per pixel; written as a graymap.
    Gray,
    /// Three identical bytes per pixel; written as a pixmap.
    Rgb,
}

impl Channels {
    /// The number of bytes per pixel.
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }

    fn color_type(self) -> ColorType {
        match self {
            Channels::Gray => ColorType::Gray(8),
            Channels::Rgb => ColorType::RGB(8),
        }
    }

    fn pnm_subtype(self) -> PNMSubtype {
        match self {
            Channels::Gray => PNMSubtype::Graymap(SampleEncoding::Binary),
            Channels::Rgb => PNMSubtype::Pixmap(SampleEncoding::Binary),
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

/// Write the buffer to the named file.  The buffer must hold exactly
/// `width * height * channels` bytes, in row order.
pub fn write_image<P: AsRef<Path>>(
    outfile: P,
    pixels: &[u8],
    bounds: (usize, usize),
    channels: Channels,
) -> Result<(), RenderError> {
    let path = outfile.as_ref();
    assert!(pixels.len() == bounds.0 * bounds.1 * channels.count());
    if is_png(path) {
        image::save_buffer(
            path,
            pixels,
            bounds.0 as u32,
            bounds.1 as u32,
            channels.color_type(),
        )?;
        return Ok(());
    }
    let output = File::create(path)?;
    let mut encoder = PNMEncoder::new(output).with_subtype(channels.pnm_subtype());
    encoder.encode(
        pixels,
        bounds.0 as u32,
        bounds.1 as u32,
        channels.color_type(),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_a_binary_pixmap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let pixels = vec![0, 0, 0, 255, 255, 255, 10, 10, 10, 20, 20, 20];
        write_image(&path, &pixels, (2, 2), Channels::Rgb).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert!(bytes.ends_with(&pixels));
    }

    #[test]
    fn writes_a_binary_graymap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pgm");
        let pixels = vec![0, 255, 10, 20, 30, 40];
        write_image(&path, &pixels, (3, 2), Channels::Gray).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P5"));
        assert!(bytes.ends_with(&pixels));
    }

    #[test]
    fn honours_the_png_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_image(&path, &[0, 128, 255, 64], (2, 2), Channels::Gray).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn unwritable_paths_are_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.ppm");
        match write_image(&path, &[0, 0, 0], (1, 1), Channels::Rgb) {
            Err(RenderError::Io(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
