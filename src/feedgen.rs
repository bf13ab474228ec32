//! LogAi demo snapshot generator.
//!
//! Writes a generated dashboard snapshot to disk so the dashboard (or a
//! test) can open it like a backend export. Output is a single JSON
//! document, optionally Brotli-compressed.

use anyhow::Result;
use std::env;

use logai::{write_snapshot, DemoFeed, DemoFeedConfig, FeedSource};

struct Config {
    log_count: usize,
    trend_hours: usize,
    anomaly_count: usize,
    seed: Option<u64>,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_count: 120,
            trend_hours: 24,
            anomaly_count: 6,
            seed: None,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-logs" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-logs requires a count argument");
                }
                config.log_count = args[i].parse()?;
            }
            "-hours" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-hours requires a count argument");
                }
                config.trend_hours = args[i].parse()?;
            }
            "-anomalies" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-anomalies requires a count argument");
                }
                config.anomaly_count = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires a number argument");
                }
                config.seed = Some(args[i].parse()?);
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("LogAi Demo Snapshot Generator");
    println!("Usage: logai-feedgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -logs <N>        Number of log lines (default: 120)");
    println!("  -hours <N>       Hours of anomaly trend history (default: 24)");
    println!("  -anomalies <N>   Number of anomaly detections (default: 6)");
    println!("  -seed <N>        Fixed RNG seed for reproducible output");
    println!("  -out <FILE>      Output file path (default: snapshot.json)");
    println!("  -brotli          Write compressed snapshot (output: *.json.br)");
    println!("  -h, -help, --help  Show this help message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "snapshot.json.br".to_string()
        } else {
            "snapshot.json".to_string()
        }
    });

    let feed = DemoFeed::with_config(DemoFeedConfig {
        log_count: config.log_count,
        trend_hours: config.trend_hours,
        anomaly_count: config.anomaly_count,
        seed: config.seed,
    });

    let snapshot = feed.fetch()?;
    write_snapshot(&output_path, &snapshot)?;

    println!(
        "Snapshot written to: {} ({} logs, {} anomalies)",
        output_path,
        snapshot.logs.len(),
        snapshot.anomalies.len()
    );

    Ok(())
}
