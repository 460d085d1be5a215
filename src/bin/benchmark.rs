//! AI benchmark CLI.
//!
//! Plays batches of headless solver games and reports win rate and timing.
//!
//! Usage:
//!   cargo run --bin benchmark -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin benchmark                     # Default: 1000 runs on 16x16/40
//!   cargo run --bin benchmark -- -n 100 -m 20     # 100 runs with 20 mines
//!   cargo run --bin benchmark -- --seed 42        # Reproducible batch

use std::env;
use std::process;

use sweep::bench::{run_benchmark, BenchConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  SWEEP AI BENCHMARK                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:   {}", config.runs);
    println!("  Board:  {}x{}", config.width, config.height);
    println!("  Mines:  {}", config.mines);
    if let Some(seed) = config.seed {
        println!("  Seed:   {}", seed);
    }
    println!();
    println!("Running benchmark...");
    println!();

    let report = match run_benchmark(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "bench_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> BenchConfig {
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--size" => {
                if i + 1 < args.len() {
                    if let Some((w, h)) = parse_size(&args[i + 1]) {
                        config.width = w;
                        config.height = h;
                    }
                    i += 1;
                }
            }
            "-m" | "--mines" => {
                if i + 1 < args.len() {
                    config.mines = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.progress_every = 0;
            }
            "--json" => {
                // Handled after the run
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    config
}

/// Parses "WIDTHxHEIGHT", e.g. "16x16".
fn parse_size(s: &str) -> Option<(usize, usize)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn print_help() {
    println!("Sweep AI Benchmark");
    println!();
    println!("Options:");
    println!("  -n, --runs N     Number of games to play (default: 1000)");
    println!("      --size WxH   Board size (default: 16x16)");
    println!("  -m, --mines N    Mines per board (default: 40)");
    println!("  -s, --seed N     Base seed for reproducible batches");
    println!("  -q, --quiet      Suppress progress output");
    println!("      --json       Save a JSON report next to the binary");
    println!("  -h, --help       Show this help");
}
