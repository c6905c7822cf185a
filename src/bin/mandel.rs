extern crate clap;
extern crate env_logger;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::timing;
use mandelbrot::{render_to_file, RenderConfig};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

const PRESET: &str = "preset";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const REAL: &str = "real";
const IMAGINARY: &str = "imaginary";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .default_value("classic")
                .possible_values(&["classic", "full", "seahorse", "spiral"])
                .help("Region and settings to start from"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file name, without the .ppm suffix"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image, as WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(REAL)
                .required(false)
                .long(REAL)
                .short("x")
                .takes_value(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse real axis bounds"))
                .help("Bounds along the real axis, as MIN,MAX"),
        )
        .arg(
            Arg::with_name(IMAGINARY)
                .required(false)
                .long(IMAGINARY)
                .short("y")
                .takes_value(true)
                .validator(|s| {
                    validate_pair::<f64>(&s, ',', "Could not parse imaginary axis bounds")
                })
                .help("Bounds along the imaginary axis, as MIN,MAX"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap for the escape measurement"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    let mut config = match matches.value_of(PRESET).unwrap() {
        "full" => RenderConfig::full_set(),
        "seahorse" => RenderConfig::seahorse_valley(),
        "spiral" => RenderConfig::spiral(),
        _ => RenderConfig::classic(),
    };
    if let Some(size) = matches.value_of(SIZE) {
        let (width, height) = parse_pair(size, 'x').expect("Error parsing image dimensions");
        config.width = width;
        config.height = height;
    }
    if let Some(real) = matches.value_of(REAL) {
        let (low, high) = parse_pair(real, ',').expect("Error parsing real axis bounds");
        config.x_min = low;
        config.x_max = high;
    }
    if let Some(imaginary) = matches.value_of(IMAGINARY) {
        let (low, high) = parse_pair(imaginary, ',').expect("Error parsing imaginary axis bounds");
        config.y_min = low;
        config.y_max = high;
    }
    if let Some(iterations) = matches.value_of(ITERATIONS) {
        config.max_iterations =
            usize::from_str(iterations).expect("Could not parse iteration count");
    }
    if let Some(name) = matches.value_of(OUTPUT) {
        config.image_name = name.to_string();
    }
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");

    match render_to_file(&config, threads) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(elapsed) => println!("{}", timing::summary(elapsed)),
    }
}
