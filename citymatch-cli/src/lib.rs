//! Command-line interface for ranking a city catalog against user preferences.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod output;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_PREFERENCES: &str = "preferences";
const ARG_CATALOG: &str = "catalog";
const ARG_LIMIT: &str = "limit";
const ARG_MAX_SCORE: &str = "max-score";
const ARG_DISTANCE_MODE: &str = "distance-mode";
const ARG_MEMBERSHIP_PENALTY: &str = "membership-penalty";
const ENV_PREFERENCES: &str = "CITYMATCH_CMDS_RECOMMEND_PREFERENCES_PATH";

/// Catalog file read when no path is configured.
const DEFAULT_CATALOG: &str = "cities.json";

/// Run the citymatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "citymatch",
    about = "Recommend cities that best match a set of preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the catalog against a preferences file and print the top matches.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
