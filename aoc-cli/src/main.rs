//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;
mod puzzle;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::{Config, Mode};
use executor::Executor;
use output::OutputFormatter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_level);

    let executor = Executor::new(build_registry(&config.tags)?);
    let formatter = OutputFormatter::new(config.quiet);

    match config.mode {
        Mode::List => formatter.print_listing(&executor.available()),
        Mode::Run {
            puzzle,
            name,
            input_path,
        } => {
            // Resolve before touching the input so unknown puzzles print nothing
            executor.resolve(&puzzle, &name)?;
            info!("AoC {} - {}", puzzle.year, name);

            let input = input::read_input(&input_path)?;
            info!(path = %input_path.display(), bytes = input.len(), "input loaded");

            let result = executor.run(&puzzle, &input)?;
            formatter.print_result(&result);
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG overrides the level picked from -q/-v
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Registry of every linked solver, narrowed to those carrying all `tags`
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
