// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use julia::config::{
    RenderConfig, DEFAULT_PREFIX, FRAME_STEP, GIF_DELAY, LIVE_STEP, SWEEP_RADIUS,
};
use julia::render;
use julia::{CPath, PngFiles};

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

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((width, height)) if width > 0 && height > 0 => Ok(()),
        Some(_) => Err("Image sides must be between 1 and 65535".to_string()),
        None => Err("Could not parse image size".to_string()),
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
const PREFIX: &str = "prefix";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const FRAMES: &str = "frames";
const STEP: &str = "step";
const DELAY: &str = "delay";
const LINE: &str = "line";
const THREADS: &str = "threads";

fn output_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(OUTPUT)
        .long(OUTPUT)
        .short("o")
        .takes_value(true)
        .default_value(".")
        .help("Directory to write images into")
}

fn prefix_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(PREFIX)
        .long(PREFIX)
        .short("p")
        .takes_value(true)
        .default_value(DEFAULT_PREFIX)
        .help("File name prefix")
}

fn size_arg<'a, 'b>(default: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(SIZE)
        .long(SIZE)
        .short("s")
        .takes_value(true)
        .default_value(default)
        .validator(|s| validate_size(&s))
        .help("Size of each image, WIDTHxHEIGHT")
}

fn iterations_arg<'a, 'b>(default: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(ITERATIONS)
        .long(ITERATIONS)
        .short("i")
        .takes_value(true)
        .default_value(default)
        .validator(|s| {
            validate_range(
                &s,
                1,
                200_000,
                "Could not parse iteration count",
                "Iteration count must be between 1 and 200000",
            )
        })
        .help("Iterations before a point is presumed bounded")
}

fn frames_arg<'a, 'b>(default: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(FRAMES)
        .long(FRAMES)
        .short("n")
        .takes_value(true)
        .default_value(default)
        .validator(|s| {
            validate_range(
                &s,
                1,
                999,
                "Could not parse frame count",
                "Frame count must be between 1 and 999",
            )
        })
        .help("Number of frames")
}

fn step_arg<'a, 'b>(default: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(STEP)
        .long(STEP)
        .takes_value(true)
        .default_value(default)
        .validator(|s| {
            validate_range(
                &s,
                -6.3,
                6.3,
                "Could not parse angle step",
                "Angle step must be between -6.3 and 6.3 radians",
            )
        })
        .help("Radians c travels round the circle per frame")
}

fn line_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(LINE)
        .long(LINE)
        .help("Move c along the real axis instead of round the circle")
}

fn threads_arg<'a, 'b>(default: &'a str) -> Arg<'a, 'b> {
    let max_threads = num_cpus::get();
    Arg::with_name(THREADS)
        .long(THREADS)
        .short("t")
        .takes_value(true)
        .default_value(default)
        .validator(move |s| {
            validate_range(
                &s,
                1,
                max_threads,
                "Could not parse thread count",
                &format!("Thread count must be between 1 and {}", max_threads),
            )
        })
        .help("Number of threads to use in solver")
}

fn args<'a>(threads: &'a str) -> ArgMatches<'a> {
    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set renderer")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("famous")
                .about("Render the dragon, rabbit, cauliflower and lightning sets")
                .arg(output_arg())
                .arg(prefix_arg())
                .arg(size_arg("800x800"))
                .arg(iterations_arg("100"))
                .arg(threads_arg(threads)),
        )
        .subcommand(
            SubCommand::with_name("frames")
                .about("Render a numbered PNG sequence with c moving round a circle")
                .arg(output_arg())
                .arg(prefix_arg())
                .arg(size_arg("400x400"))
                .arg(iterations_arg("50"))
                .arg(frames_arg("63"))
                .arg(step_arg("0.1"))
                .arg(line_arg())
                .arg(threads_arg(threads)),
        )
        .subcommand(
            SubCommand::with_name("gif")
                .about("Render one full turn of c as a looping GIF")
                .arg(output_arg())
                .arg(prefix_arg())
                .arg(size_arg("200x200"))
                .arg(iterations_arg("30"))
                .arg(frames_arg("32"))
                .arg(
                    Arg::with_name(DELAY)
                        .long(DELAY)
                        .short("d")
                        .takes_value(true)
                        .default_value("10")
                        .validator(|s| {
                            validate_range(
                                &s,
                                0,
                                u16::max_value(),
                                "Could not parse delay",
                                "Delay must fit in 16 bits",
                            )
                        })
                        .help("Frame delay in hundredths of a second"),
                )
                .arg(line_arg())
                .arg(threads_arg(threads)),
        )
        .subcommand(
            SubCommand::with_name("live")
                .about("Animate the Julia set in a window")
                .arg(size_arg("400x400"))
                .arg(iterations_arg("50"))
                .arg(step_arg("0.05"))
                .arg(threads_arg(threads)),
        )
        .subcommand(
            SubCommand::with_name("all")
                .about("Render the famous sets, then the frame sequence")
                .arg(output_arg())
                .arg(threads_arg(threads)),
        )
        .get_matches()
}

// The validators have already run, so every lookup below parses.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => unreachable!("{} was validated", name),
    }
}

fn configure(base: RenderConfig, matches: &ArgMatches) -> RenderConfig {
    let mut cfg = base;
    if let Some((width, height)) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
    {
        cfg = cfg.with_size(width, height);
    }
    if matches.is_present(ITERATIONS) {
        cfg = cfg.with_limit(value(matches, ITERATIONS));
    }
    if matches.is_present(FRAMES) {
        cfg = cfg.with_frames(value(matches, FRAMES));
    }
    cfg
}

fn c_path(matches: &ArgMatches, cfg: &RenderConfig, default_step: Option<f64>) -> CPath {
    if matches.is_present(LINE) {
        return CPath::Line;
    }
    match default_step {
        Some(step) => CPath::Circle {
            radius: SWEEP_RADIUS,
            step: if matches.is_present(STEP) {
                value(matches, STEP)
            } else {
                step
            },
        },
        None => CPath::closed_circle(SWEEP_RADIUS, cfg.frames),
    }
}

fn run(matches: &ArgMatches) -> julia::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        ("famous", Some(sub)) => {
            let cfg = configure(RenderConfig::famous(), sub);
            let prefix: String = value(sub, PREFIX);
            let mut sink = PngFiles::new(value::<String>(sub, OUTPUT));
            render::famous(&mut out, &mut sink, &cfg, value(sub, THREADS), &prefix)?;
        }
        ("frames", Some(sub)) => {
            let cfg = configure(RenderConfig::frames(), sub);
            let prefix: String = value(sub, PREFIX);
            let mut sink = PngFiles::new(value::<String>(sub, OUTPUT));
            let path = c_path(sub, &cfg, Some(FRAME_STEP));
            render::frames(&mut out, &mut sink, &cfg, path, value(sub, THREADS), &prefix)?;
        }
        ("gif", Some(sub)) => {
            let cfg = configure(RenderConfig::gif(), sub);
            let prefix: String = value(sub, PREFIX);
            let dir: String = value(sub, OUTPUT);
            let gif_path = Path::new(&dir).join(format!("{}_animation.gif", prefix));
            let delay = if sub.is_present(DELAY) {
                value(sub, DELAY)
            } else {
                GIF_DELAY
            };
            let path = c_path(sub, &cfg, None);
            render::animation(&mut out, &cfg, path, value(sub, THREADS), &gif_path, delay)?;
        }
        ("live", Some(sub)) => live(sub)?,
        ("all", Some(sub)) => {
            let threads = value(sub, THREADS);
            let mut sink = PngFiles::new(value::<String>(sub, OUTPUT));
            writeln!(out, "Julia Set Generator")?;
            writeln!(out, "===================")?;
            render::famous(
                &mut out,
                &mut sink,
                &RenderConfig::famous(),
                threads,
                DEFAULT_PREFIX,
            )?;
            writeln!(out)?;
            let cfg = RenderConfig::frames();
            let path = CPath::Circle {
                radius: SWEEP_RADIUS,
                step: FRAME_STEP,
            };
            render::frames(&mut out, &mut sink, &cfg, path, threads, DEFAULT_PREFIX)?;
            writeln!(out, "\nDone! Check the generated PNG files.")?;
        }
        _ => unreachable!("a subcommand is required"),
    }
    Ok(())
}

#[cfg(feature = "live")]
fn live(sub: &ArgMatches) -> julia::Result<()> {
    let cfg = configure(RenderConfig::live(), sub);
    let step = if sub.is_present(STEP) {
        value(sub, STEP)
    } else {
        LIVE_STEP
    };
    julia::live::run(cfg, step, value(sub, THREADS))
}

#[cfg(not(feature = "live"))]
fn live(_sub: &ArgMatches) -> julia::Result<()> {
    Err(julia::JuliaError::Display(format!(
        "built without the live feature (would animate at {} rad/frame)",
        LIVE_STEP
    )))
}

fn main() {
    env_logger::init();
    let threads = num_cpus::get().to_string();
    let matches = args(&threads);
    if let Err(e) = run(&matches) {
        eprintln!("julia: {}", e);
        std::process::exit(1);
    }
}
