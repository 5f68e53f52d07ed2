//! u-cpusim command line driver.
//!
//! Generates a random process table, prints it, asks which algorithm to run
//! (unless `--algorithm` is given) and prints the table at every slice.
//!
//! Environment variables:
//! - RUST_LOG: log filter (default: warn). Logs go to stderr.
//! - U_CPUSIM_LOG_JSON: `1` or `true` for JSON log lines.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_cpusim::config::SimulationConfig;
use u_cpusim::dispatching::DEFAULT_QUANTUM;
use u_cpusim::generator::ProcessGenerator;
use u_cpusim::models::Snapshot;
use u_cpusim::report::{JsonLinesReporter, Reporter, TableReporter};
use u_cpusim::scheduler::{Algorithm, RunSummary, Scheduler};
use u_cpusim::selection::prompt_algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Priority,
    RoundRobin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Discrete-time CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(name = "u-cpusim", version, about)]
struct Cli {
    /// Algorithm to run. Prompts interactively when omitted.
    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Round-robin time quantum (recorded only). Also answers the quantum
    /// question of the interactive prompt.
    #[arg(short, long)]
    quantum: Option<u32>,

    /// Number of processes to generate.
    #[arg(short = 'n', long)]
    processes: Option<usize>,

    /// RNG seed for reproducible process tables.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Snapshot output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print run metrics after the last slice.
    #[arg(long)]
    summary: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let use_json = std::env::var("U_CPUSIM_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(count) = cli.processes {
        config.process_count = count;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

/// Algorithm chosen on the command line. `None` = ask interactively.
fn preset_algorithm(cli: &Cli, priority_decay: i32) -> anyhow::Result<Option<Algorithm>> {
    match cli.algorithm {
        Some(AlgorithmArg::Priority) => {
            if cli.quantum.is_some() {
                bail!("--quantum only applies to round-robin scheduling");
            }
            Ok(Some(Algorithm::Priority {
                decay: priority_decay,
            }))
        }
        Some(AlgorithmArg::RoundRobin) => Ok(Some(Algorithm::round_robin(
            cli.quantum.unwrap_or(DEFAULT_QUANTUM),
        ))),
        None => Ok(None),
    }
}

fn print_summary<W: Write>(out: &mut W, summary: &RunSummary, format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer(&mut *out, summary)?;
        return writeln!(out);
    }

    match summary.quantum {
        Some(q) => writeln!(out, "=== Summary ({}, quantum {q}) ===", summary.algorithm)?,
        None => writeln!(out, "=== Summary ({}) ===", summary.algorithm)?,
    }
    writeln!(out, "Total time slices: {}", summary.total_slices)?;
    writeln!(
        out,
        "{:>10}{:>15}{:>15}{:>15}{:>15}",
        "ID", "CPU Time", "Completion", "Turnaround", "Waiting"
    )?;
    let show = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    for s in &summary.processes {
        writeln!(
            out,
            "{:>10}{:>15}{:>15}{:>15}{:>15}",
            s.id,
            s.cpu_time,
            show(s.completion_time),
            show(s.turnaround_time),
            show(s.waiting_time)
        )?;
    }
    writeln!(out, "Average turnaround: {:.2}", summary.avg_turnaround_time)?;
    writeln!(out, "Average waiting: {:.2}", summary.avg_waiting_time)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let generator = ProcessGenerator::new(config)?;
    let mut processes = generator.generate_seeded();
    let config = generator.config();
    info!(count = processes.len(), seed = ?config.seed, "process table generated");

    let mut reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Table => Box::new(TableReporter::stdout()),
        OutputFormat::Json => Box::new(JsonLinesReporter::new(io::stdout())),
    };
    reporter.report(&Snapshot::initial(&processes))?;

    let algorithm = match preset_algorithm(&cli, config.priority_decay)? {
        Some(algorithm) => algorithm,
        None => {
            // Keep stdout machine-readable in JSON mode
            let mut prompt_out: Box<dyn Write> = match cli.format {
                OutputFormat::Table => Box::new(io::stdout()),
                OutputFormat::Json => Box::new(io::stderr()),
            };
            let mut input = io::stdin().lock();
            match prompt_algorithm(&mut input, &mut prompt_out, config.priority_decay, cli.quantum)? {
                Some(algorithm) => algorithm,
                None => return Ok(()),
            }
        }
    };

    let summary = Scheduler::new(algorithm)
        .with_initial_report(false)
        .run(&mut processes, &mut reporter)?;

    if cli.summary {
        let mut out = io::stdout().lock();
        print_summary(&mut out, &summary, cli.format)?;
    }
    Ok(())
}
