use crate::rules::{PLATE_DIGITS, Rules};
use crate::solver::PlateSolver;
use crate::utils::validate_plate;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Plateparity - Find the equations hidden in a four-digit plate
#[derive(Parser, Debug)]
#[command(name = "plateparity")]
#[command(about = "Find equations hidden in a four-digit plate (order fixed, no concatenation)")]
#[command(version)]
pub struct CliArgs {
    /// Four-digit sequence, e.g. 4312 (no spaces)
    pub digits: String,

    /// Max solution lines to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub plate: [u8; PLATE_DIGITS],
    pub limit: usize,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate the plate before the core is ever invoked
    let plate = validate_plate(&args.digits).context("Invalid plate string")?;

    Ok(CliConfig {
        plate,
        limit: args.limit,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = PlateSolver::new(Rules::default());

    info!("Searching plate {:?} for equalities", config.plate);

    let solutions = solver.solve(config.plate);
    if solutions.is_empty() {
        warn!("No matching equations found");
        println!("No solutions under current rules.");
        return Ok(());
    }

    println!("Found {} solution(s):", solutions.len());
    for (i, equation) in solutions.iter().take(config.limit).enumerate() {
        println!("{:>3}. {}", i + 1, equation);
    }
    Ok(())
}
