// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate num_cpus;
extern crate stripebrot;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, Arg, ArgMatches};
use std::str::FromStr;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use stripebrot::config::{parse_complex, parse_pair};
use stripebrot::{write_image, Channels, RenderConfig, StripeRenderer};

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const ESCAPE: &str = "escape-radius";
const DENSITY: &str = "stripe-density";
const SKIP: &str = "skip";
const THINNESS: &str = "thinness";
const ANGLE: &str = "light-angle";
const HEIGHT: &str = "light-height";
const GRAY: &str = "gray";
const NO_SHAPE_CHECK: &str = "no-shape-check";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("stripebrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Stripe-average, normal-mapped Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; .png writes a PNG, anything else a binary PNM"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.2,-1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.8,1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver; defaults to one per CPU"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        2,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 2 and 1000000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(ESCAPE)
                .required(false)
                .long(ESCAPE)
                .short("e")
                .takes_value(true)
                .default_value("1000000")
                .validator(|s| {
                    validate_range(
                        &s,
                        4.0,
                        1e150,
                        "Could not parse escape radius",
                        "Escape radius must be between 4 and 1e150",
                    )
                })
                .help("Bail-out radius; big values give a better distance estimate"),
        )
        .arg(
            Arg::with_name(DENSITY)
                .required(false)
                .long(DENSITY)
                .short("d")
                .takes_value(true)
                .default_value("7")
                .validator(|s| {
                    validate_range(
                        &s,
                        0.0,
                        1000.0,
                        "Could not parse stripe density",
                        "Stripe density must be between 0 and 1000",
                    )
                })
                .help("Number of stripes per turn of the iterate"),
        )
        .arg(
            Arg::with_name(SKIP)
                .required(false)
                .long(SKIP)
                .short("k")
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        1_000_000,
                        "Could not parse skip count",
                        "Skip count must be between 0 and 1000000",
                    )
                })
                .help("Iterations at or below this index are left out of the stripe average"),
        )
        .arg(
            Arg::with_name(THINNESS)
                .required(false)
                .long(THINNESS)
                .short("b")
                .takes_value(true)
                .default_value("3")
                .validator(|s| {
                    validate_range(
                        &s,
                        0.01,
                        1000.0,
                        "Could not parse border thinness",
                        "Border thinness must be between 0.01 and 1000",
                    )
                })
                .help("Divides the pixel width to give the border width; bigger is thinner"),
        )
        .arg(
            Arg::with_name(ANGLE)
                .required(false)
                .long(ANGLE)
                .short("a")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("45")
                .validator(|s| {
                    validate_range(
                        &s,
                        -360.0,
                        360.0,
                        "Could not parse light angle",
                        "Light angle must be between -360 and 360 degrees",
                    )
                })
                .help("Direction of the incoming light, in degrees"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .required(false)
                .long(HEIGHT)
                .short("H")
                .takes_value(true)
                .default_value("1.5")
                .validator(|s| {
                    validate_range(
                        &s,
                        0.0,
                        100.0,
                        "Could not parse light height",
                        "Light height must be between 0 and 100",
                    )
                })
                .help("Height of the incoming light; bigger is flatter"),
        )
        .arg(
            Arg::with_name(GRAY)
                .long(GRAY)
                .short("g")
                .help("Write a one-channel graymap instead of an RGB pixmap"),
        )
        .arg(
            Arg::with_name(NO_SHAPE_CHECK)
                .long(NO_SHAPE_CHECK)
                .help("Iterate the main cardioid and period-2 bulb instead of skipping them"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("Could not parse {}", name);
            std::process::exit(1);
        }
    }
}

fn config_from(matches: &ArgMatches) -> RenderConfig {
    let (width, height): (u16, u16) =
        parse_pair(matches.value_of(SIZE).unwrap_or_default(), 'x').unwrap_or((0, 0));
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap_or_default());
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap_or_default());
    let defaults = RenderConfig::default();
    RenderConfig {
        width: width as usize,
        height: height as usize,
        leftlower: leftlower.unwrap_or(defaults.leftlower),
        rightupper: rightupper.unwrap_or(defaults.rightupper),
        max_iterations: value(matches, ITERATIONS),
        escape_radius: value(matches, ESCAPE),
        stripe_density: value(matches, DENSITY),
        skip: value(matches, SKIP),
        thinness: value(matches, THINNESS),
        light_angle: value::<f64>(matches, ANGLE) / 360.0,
        height_factor: value(matches, HEIGHT),
        shape_check: !matches.is_present(NO_SHAPE_CHECK),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = args();
    let config = config_from(&matches);
    let outfile = matches.value_of(OUTPUT).unwrap_or_default().to_string();
    let threads = if matches.is_present(THREADS) {
        value(&matches, THREADS)
    } else {
        num_cpus::get()
    };
    let channels = if matches.is_present(GRAY) {
        Channels::Gray
    } else {
        Channels::Rgb
    };

    let renderer = match StripeRenderer::new(config) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    let distortion = renderer.plane().distortion();
    debug!(
        width = config.width,
        height = config.height,
        iterations = config.max_iterations,
        escape_radius = config.escape_radius,
        "rendering"
    );
    if distortion.abs() > 1e-9 {
        warn!(
            distortion = distortion,
            "pixel and world aspect ratios differ; the image will be stretched"
        );
    }

    let begin = Instant::now();
    let pixels = renderer.render(threads, channels);
    if let Err(e) = write_image(&outfile, &pixels, (config.width, config.height), channels) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
    info!(
        file = outfile.as_str(),
        elapsed = ?begin.elapsed(),
        "saved"
    );
}
