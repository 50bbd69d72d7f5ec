//! Kuhn poker CFR training binary.
//!
//! Usage:
//!   cargo run --release --bin train -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>     Training iterations (default: 100000)
//!   --snapshots <N>      Strategy snapshots to record (default: 20)
//!   --seed <N>           Random seed (optional)
//!   --output <FILE>      Report output file (default: strategies.json)

use std::env;

use indicatif::{ProgressBar, ProgressStyle};

use kuhn_cfr::cfr::{Trainer, TrainerConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut iterations: u64 = 100_000;
    let mut snapshots: u64 = 20;
    let mut seed: Option<u64> = None;
    let mut output_file = "strategies.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(iterations);
                }
            }
            "--snapshots" => {
                i += 1;
                if i < args.len() {
                    snapshots = args[i].parse().unwrap_or(snapshots);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Kuhn Poker CFR Trainer");
    println!("=================================================");
    println!();
    println!("Iterations: {}", iterations);
    println!("Snapshots: {}", snapshots);
    if let Some(s) = seed {
        println!("Seed: {}", s);
    }
    println!("Output: {}", output_file);
    println!();

    let mut config = TrainerConfig::default().with_snapshots(snapshots);
    if let Some(s) = seed {
        config = config.with_seed(s);
    }

    let mut trainer = Trainer::new(config);

    let progress = ProgressBar::new(iterations);
    let style = ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);

    let callback_interval = (iterations / 100).max(1);
    let result = trainer.train_with_callback(iterations, callback_interval, |stats| {
        progress.set_position(stats.iterations);
        progress.set_message(format!("{} info sets", stats.info_sets));
    });
    progress.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("Training complete!");
    println!("Total time: {:.2}s", report.stats.elapsed_seconds);
    println!(
        "Average speed: {:.0} iterations/second",
        report.stats.iterations_per_second
    );
    println!("Info sets: {}", report.stats.info_sets);
    println!();
    println!("EV of Player 1: {:.5}", report.mean_utility[0]);
    println!("EV of Player 2: {:.5}", report.mean_utility[1]);
    println!();
    println!("=== Average Strategies [pass, bet] ===");
    for (info_set, strategy) in &report.average_strategies {
        println!("{:>4}: [{:.5}, {:.5}]", info_set, strategy[0], strategy[1]);
    }
    println!();

    println!("Exporting report to {}...", output_file);
    match report.save_json(&output_file) {
        Ok(_) => println!("Report saved successfully!"),
        Err(e) => eprintln!("Error saving report: {}", e),
    }
}

fn print_help() {
    println!("Kuhn Poker CFR Trainer");
    println!();
    println!("Usage: train [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -i, --iterations <N>     Training iterations (default: 100000)");
    println!("      --snapshots <N>      Strategy snapshots to record (default: 20)");
    println!("  -s, --seed <N>           Random seed");
    println!("  -o, --output <FILE>      Report output file (default: strategies.json)");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Train for 1M iterations with a fixed seed");
    println!("  train --iterations 1000000 --seed 42");
    println!();
    println!("  # Record a finer strategy trajectory for charting");
    println!("  train --snapshots 100 --output trajectory.json");
}
