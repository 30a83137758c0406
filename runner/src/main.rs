mod logging;

use std::{
    hint::black_box,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use aoc2022::{Answers, Day};

const SAMPLES: usize = 100;

#[derive(Parser)]
#[command(name = "aoc2022", version, about = "Solve and time Advent of Code 2022 puzzles")]
struct Cli {
    /// Puzzle day to solve.
    #[arg(value_parser = parse_day)]
    day: Day,

    /// Puzzle input file.
    #[arg(short, long, env = "INPUT")]
    input: PathBuf,

    /// Time repeated runs after solving.
    #[arg(long)]
    bench: bool,

    /// Seconds to spend warming up before timing.
    #[arg(long, default_value_t = 5)]
    warmup_secs: u64,

    /// Log solver diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_day(value: &str) -> Result<Day> {
    let number: u8 = value.parse().with_context(|| format!("{value:?} is not a day number"))?;
    Ok(Day::from_number(number)?)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let input = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;
    info!(day = %cli.day, bytes = input.len(), "loaded input");

    if cli.bench {
        let (ans, mut times) = benchmark(cli.day, &input, Duration::from_secs(cli.warmup_secs))?;

        times.sort();

        println!("AOC_ANSWER {}", ans);
        println!("AOC_MEDIAN {}", times[SAMPLES / 2].as_nanos());
        println!(
            "AOC_AVERAGE {}",
            times.iter().sum::<Duration>().as_nanos() / SAMPLES as u128
        );
        println!("AOC_MIN {}", times.first().unwrap_or(&Duration::ZERO).as_nanos());
        println!("AOC_MAX {}", times.last().unwrap_or(&Duration::ZERO).as_nanos());
    } else {
        let answers = solve(cli.day, &input)?;
        println!("Part one: {}", answers.part1);
        println!("Part two: {}", answers.part2);
    }

    Ok(())
}

fn solve(day: Day, input: &str) -> Result<Answers> {
    aoc2022::run(day, input).with_context(|| format!("failed to solve {day}"))
}

fn benchmark(day: Day, input: &str, warmup: Duration) -> Result<(Answers, [Duration; SAMPLES])> {
    let answer = solve(day, input)?;
    info!(%answer, ?warmup, "warming up");

    // Warm up the CPU etc, checking the answer never changes
    let mut warmup_iters: u32 = 1;
    let warmup_start = Instant::now();
    while warmup_start.elapsed() < warmup {
        if black_box(solve(day, black_box(input))?) != answer {
            bail!("{day} returned two different answers on the same input");
        }
        warmup_iters += 1;
    }

    let estimated_dur = warmup / warmup_iters;
    let iters = (warmup_iters / SAMPLES as u32).max(1);
    info!(?estimated_dur, iters, "timing {SAMPLES} batches");

    let mut times = [Duration::ZERO; SAMPLES];

    let mut start = Instant::now();
    for time in times.iter_mut() {
        for _ in 0..iters {
            black_box(aoc2022::run(day, black_box(input)).ok());
        }

        // Record this batch
        let elapsed = start.elapsed();
        *time = elapsed / iters;
        start += elapsed;
    }

    debug!(?times, "benchmark complete");
    Ok((answer, times))
}
