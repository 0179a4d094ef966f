//! Prefix Proof-of-Work Solver CLI
//!
//! A command-line tool for solving SHA-256 prefix challenges.
//!
//! # Commands
//!
//! - `solve` - Find the smallest nonce for a prefix and difficulty
//! - `benchmark` - Measure raw hashing speed

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pow::solver::NonceHasher;
use pow::{solve_with_timeout, SolutionReport, SolveTask, Solver, SolverConfig};

#[derive(Parser)]
#[command(name = "pow")]
#[command(version)]
#[command(about = "SHA-256 prefix proof-of-work solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the smallest nonce whose hash has enough leading zero bits
    Solve {
        /// Challenge prefix (may be empty)
        prefix: String,

        /// Required number of leading zero bits
        difficulty: u32,

        /// Give up after this many seconds
        #[arg(long, conflicts_with = "max_attempts")]
        timeout: Option<f64>,

        /// Give up after trying this many nonces
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "1000000")]
        count: u64,

        /// Prefix to hash under
        #[arg(long, default_value = "benchmark")]
        prefix: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pow=info,pow_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Solve {
            prefix,
            difficulty,
            timeout,
            max_attempts,
            json,
        } => cmd_solve(prefix, difficulty, timeout, max_attempts, json).await,
        Commands::Benchmark { count, prefix } => cmd_benchmark(count, &prefix),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn cmd_solve(
    prefix: String,
    difficulty: u32,
    timeout: Option<f64>,
    max_attempts: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let solver = Solver::new(SolverConfig::new(prefix, difficulty))?;
    let config = solver.config().clone();

    info!(prefix = %config.prefix, difficulty, "searching");
    let start = Instant::now();

    let solution = match (max_attempts, timeout) {
        (Some(max), _) => tokio::task::spawn_blocking(move || solver.solve_within(max))
            .await?
            .ok_or_else(|| anyhow!("no solution within {} attempts", max))?,
        (None, Some(secs)) => {
            let deadline = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid timeout: {}", secs))?;
            solve_with_timeout(solver, deadline).await?
        }
        (None, None) => SolveTask::spawn(solver).join().await?,
    };

    let report = SolutionReport::new(&config, &solution, start.elapsed());
    info!(
        attempts = report.attempts,
        elapsed_ms = report.elapsed_ms,
        "solved"
    );

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn cmd_benchmark(count: u64, prefix: &str) -> anyhow::Result<()> {
    println!("Running benchmark with {} hashes...", count);

    let mut hasher = NonceHasher::new(prefix.as_bytes());
    let start = Instant::now();

    for nonce in 0..count {
        black_box(hasher.digest(black_box(nonce)));
    }

    let elapsed = start.elapsed();
    let secs = elapsed.as_secs_f64();
    let hashrate = if secs > 0.0 { count as f64 / secs } else { 0.0 };

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Time elapsed: {:.2}s", secs);
    println!("  Hashrate: {:.2} H/s", hashrate);

    // On average 2^difficulty hashes per solution
    println!("\nExpected time per difficulty:");
    for difficulty in [16u32, 20, 24, 28] {
        let expected = 2f64.powi(difficulty as i32);
        let eta = if hashrate > 0.0 { expected / hashrate } else { 0.0 };
        println!("  {:>2} bits: ~{:.0} hashes, ~{:.2}s", difficulty, expected, eta);
    }

    Ok(())
}
