// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate num;
extern crate predicates;
extern crate stripebrot;
extern crate tempfile;

use assert_cmd::prelude::*;
use num::Complex;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

use stripebrot::{Channels, RenderConfig, StripeRenderer};

fn stripebrot() -> Command {
    Command::cargo_bin("stripebrot").unwrap()
}

#[test]
fn renders_a_pixmap_matching_the_library() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mandel.ppm");
    stripebrot()
        .args(&["-o", path.to_str().unwrap(), "-s", "40x40", "-t", "1"])
        .assert()
        .success();

    let config = RenderConfig {
        width: 40,
        height: 40,
        ..RenderConfig::default()
    };
    let expected = StripeRenderer::new(config)
        .unwrap()
        .render_single(Channels::Rgb);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6"));
    assert!(bytes.ends_with(&expected));
}

#[test]
fn renders_a_graymap_of_a_custom_window() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seahorse.pgm");
    stripebrot()
        .args(&[
            "-o",
            path.to_str().unwrap(),
            "-s",
            "32x32",
            "-l",
            "-0.8,0.0",
            "-r",
            "-0.7,0.1",
            "-i",
            "500",
            "-d",
            "5",
            "-b",
            "2",
            "-a",
            "-30",
            "-g",
        ])
        .assert()
        .success();

    let config = RenderConfig {
        width: 32,
        height: 32,
        leftlower: Complex::new(-0.8, 0.0),
        rightupper: Complex::new(-0.7, 0.1),
        max_iterations: 500,
        stripe_density: 5.0,
        thinness: 2.0,
        light_angle: -30.0 / 360.0,
        ..RenderConfig::default()
    };
    let expected = StripeRenderer::new(config)
        .unwrap()
        .render_single(Channels::Gray);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5"));
    assert!(bytes.ends_with(&expected));
}

#[test]
fn writes_png_when_asked() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mandel.png");
    stripebrot()
        .args(&["-o", path.to_str().unwrap(), "-s", "16x16", "--no-shape-check"])
        .assert()
        .success();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn warns_about_stretched_images() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.ppm");
    stripebrot()
        .args(&["-o", path.to_str().unwrap(), "-s", "20x10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("aspect ratios differ"));
}

#[test]
fn refuses_an_empty_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.ppm");
    stripebrot()
        .args(&["-o", path.to_str().unwrap(), "-s", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
    assert!(!path.exists());
}

#[test]
fn refuses_a_skip_that_eats_every_iteration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("skipped.ppm");
    stripebrot()
        .args(&["-o", path.to_str().unwrap(), "-s", "4x4", "-i", "10", "-k", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skip count"));
}

#[test]
fn refuses_a_malformed_size() {
    stripebrot()
        .args(&["-o", "never.ppm", "-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn requires_an_output_file() {
    stripebrot().args(&["-s", "4x4"]).assert().failure();
}
