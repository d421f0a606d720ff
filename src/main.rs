//! Closest pair tool
//!
//! Reads 2-D points from a file (or generates random ones), finds the
//! closest pair with divide and conquer and/or brute force, and reports the
//! pair, its distance and how long each strategy took.

use clap::{Parser, ValueEnum};
use closest_pair::closest::{Closest, PointList, closest_pair, closest_pair_brute_force};
use closest_pair::input::{PointFormat, random_points, read_points};
use std::path::PathBuf;
use std::time::{Duration, Instant};


/// Relative tolerance used when comparing distances from both strategies
const AGREEMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Divide and conquer, O(n log n)
    Divide,
    /// Check every pair, O(n^2)
    Brute,
    /// Run both and compare
    Both,
}

#[derive(Parser)]
#[command(name = "closest_pair")]
#[command(about = "Finds the closest pair of 2-D points", long_about = None)]
struct Args {
    /// Input file with points
    #[arg(short, long, default_value = "points.txt")]
    input: PathBuf,

    /// Input file layout
    #[arg(short, long, value_enum, default_value_t = PointFormat::Columns)]
    format: PointFormat,

    /// Generate this many random points instead of reading the input file
    #[arg(short, long)]
    random: Option<usize>,

    /// Random points are drawn from [0, max] on both axes
    #[arg(long, default_value_t = 10000.0)]
    max: f64,

    /// Seed for random points
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let points = match load_points(&args) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error reading points: {}", e);
            std::process::exit(1);
        }
    };

    if args.debug {
        match args.random {
            Some(n) => println!(
                "Generated {} random points in [0, {}] with seed {}",
                n, args.max, args.seed
            ),
            None => println!("Read {} points from {:?}", points.len(), args.input),
        }
    }

    if points.len() < 2 {
        eprintln!("No closest pair: need at least 2 points, got {}", points.len());
        std::process::exit(1);
    }

    let divide = matches!(args.strategy, Strategy::Divide | Strategy::Both).then(|| {
        let (result, elapsed) = timed(|| closest_pair(&points));
        print!("{}", report(&result, elapsed, "divide and conquer"));
        result
    });

    if divide.is_some() && args.strategy == Strategy::Both {
        println!();
    }

    let brute = matches!(args.strategy, Strategy::Brute | Strategy::Both).then(|| {
        let (result, elapsed) = timed(|| closest_pair_brute_force(&points));
        print!("{}", report(&result, elapsed, "brute force"));
        result
    });

    if let (Some((_, d1)), Some((_, d2))) = (divide, brute) {
        if agree(d1, d2) {
            if args.debug {
                println!("Both strategies agree on distance {}", d1);
            }
        } else {
            eprintln!("Strategies disagree: {} vs {}", d1, d2);
            std::process::exit(1);
        }
    }
}

/// Reads points from the input file, or generates them when `--random` is set
fn load_points(args: &Args) -> Result<PointList, Box<dyn std::error::Error>> {
    match args.random {
        Some(count) => {
            if !(args.max.is_finite() && args.max > 0.0) {
                return Err(format!("--max must be a positive number, got {}", args.max).into());
            }
            Ok(random_points(count, args.max, args.seed))
        }
        None => Ok(read_points(&args.input, args.format)?),
    }
}

/// Runs `f` and returns its result with the elapsed wall time
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Formats a result the way the tool prints it
fn report(result: &Closest, elapsed: Duration, strategy: &str) -> String {
    let (pair, dist) = result;
    let mut out = String::new();
    match pair {
        Some((p1, p2)) => {
            out.push_str(&format!("The closest pair is {} and {}.\n", p1, p2));
            out.push_str(&format!("The distance between them is {:.3}\n", dist));
        }
        None => out.push_str("No closest pair is defined.\n"),
    }
    out.push_str(&format!(
        "Elapsed time with {}: {:.3} s.\n",
        strategy,
        elapsed.as_secs_f64()
    ));
    out
}

/// Checks two distances are equal within `AGREEMENT_TOLERANCE`, relative to the
/// larger one (absolute when both are below 1)
fn agree(d1: f64, d2: f64) -> bool {
    let scale = d1.abs().max(d2.abs()).max(1.0);
    (d1 - d2).abs() <= AGREEMENT_TOLERANCE * scale
}
