extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate fractal_viewer;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use fractal_viewer::output::write_image;
use fractal_viewer::{FractalConfig, InputState, Navigator, Renderer, Viewport};
use itertools::Itertools;
use num::clamp;
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (l, r) = s.splitn(2, separator).collect_tuple()?;
    match (T::from_str(l), T::from_str(r)) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

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
const FRACTAL: &str = "fractal";
const WORKERS: &str = "workers";
const ITERATIONS: &str = "iterations";
const OFFSET: &str = "offset";
const SCALE: &str = "scale";
const ZOOM_AT: &str = "zoom-at";
const ZOOM_STEPS: &str = "zoom-steps";

fn args<'a>() -> ArgMatches<'a> {
    App::new("fractal")
        .version("0.1.0")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.png, .ppm or .pnm)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1280x720")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrot")
                .help("Fractal to render"),
        )
        .arg(
            Arg::with_name(WORKERS)
                .long(WORKERS)
                .short("w")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse worker count",
                        "Worker count must be at least 1",
                    )
                })
                .help("Number of workers to use (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum iterations for escape time"),
        )
        .arg(
            Arg::with_name(OFFSET)
                .long(OFFSET)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse offset"))
                .help("Pan offset X,Y in unzoomed screen pixels"),
        )
        .arg(
            Arg::with_name(SCALE)
                .long(SCALE)
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        ::std::f64::MAX,
                        "Could not parse scale",
                        "Scale must be positive",
                    )
                })
                .help("Zoom scale; larger values magnify"),
        )
        .arg(
            Arg::with_name(ZOOM_AT)
                .long(ZOOM_AT)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse zoom cursor"))
                .help("Screen position PX,PY to zoom about"),
        )
        .arg(
            Arg::with_name(ZOOM_STEPS)
                .long(ZOOM_STEPS)
                .takes_value(true)
                .allow_hyphen_values(true)
                .requires(ZOOM_AT)
                .validator(|s| {
                    validate_range(
                        &s,
                        -10_000,
                        10_000,
                        "Could not parse zoom step count",
                        "Zoom step count must be between -10000 and 10000",
                    )
                })
                .help("Scroll steps at the zoom cursor (default 0); positive scrolls up, negative down"),
        )
        .get_matches()
}

// Every value below has already passed its validator.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| err_msg(format!("Missing value for --{}", name)))?;
    T::from_str(raw).map_err(|_| err_msg(format!("Could not parse --{} {}", name, raw)))
}

fn pair<T: FromStr>(matches: &ArgMatches, name: &str, separator: char) -> Result<(T, T), Error> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| err_msg(format!("Missing value for --{}", name)))?;
    parse_pair(raw, separator).ok_or_else(|| err_msg(format!("Could not parse --{} {}", name, raw)))
}

fn run() -> Result<(), Error> {
    let matches = args();
    let (width, height) = pair::<u16>(&matches, SIZE, 'x')?;
    let (width, height) = (width as usize, height as usize);
    let iterations = value::<u32>(&matches, ITERATIONS)?;
    let requested = match matches.value_of(WORKERS) {
        Some(_) => value::<usize>(&matches, WORKERS)?,
        None => num_cpus::get(),
    };
    let workers = clamp(requested, 1, height.max(1));
    if workers != requested {
        warn!(
            "Using {} workers instead of {}: each worker needs at least one row",
            workers, requested
        );
    }

    let config = FractalConfig::new(
        matches.value_of(FRACTAL).unwrap_or_default(),
        width,
        height,
        workers,
        iterations,
    )?;
    let renderer = Renderer::new(config).map_err(err_msg)?;

    let (offset_x, offset_y) = pair::<f64>(&matches, OFFSET, ',')?;
    let mut viewport = Viewport::new(offset_x, offset_y, value(&matches, SCALE)?)?;
    if matches.is_present(ZOOM_AT) {
        let cursor = pair::<f64>(&matches, ZOOM_AT, ',')?;
        let steps = match matches.value_of(ZOOM_STEPS) {
            Some(_) => value::<i32>(&matches, ZOOM_STEPS)?,
            None => 0,
        };
        let mut navigator = Navigator::default();
        let input = InputState {
            cursor,
            scroll: f64::from(steps.signum()),
            ..InputState::default()
        };
        for _ in 0..steps.abs() {
            navigator.apply(&mut viewport, &input);
        }
    }

    let ul = renderer.screen_to_point(&viewport, 0.0, 0.0);
    let lr = renderer.screen_to_point(&viewport, width as f64, height as f64);
    info!(
        "Rendering {} at {}x{}, {} iterations, {} workers, re [{}, {}] im [{}, {}]",
        config.kind().name(),
        width,
        height,
        iterations,
        workers,
        ul.re,
        lr.re,
        lr.im,
        ul.im
    );

    let start = Instant::now();
    let image = renderer.render(&viewport);
    info!("Render time: {:?}", start.elapsed());

    write_image(matches.value_of(OUTPUT).unwrap_or_default(), &image)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        for cause in e.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
