//! Recommend command implementation for the citymatch CLI.

use std::io::{BufReader, Write};
use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use citymatch_core::{
    Catalog, CatalogError, City, CityRecord, PreferenceRecord, RankOptions, RecommendRequest,
    Recommender, UserPreferences,
};
use citymatch_scorer::{DimensionWeights, DistanceMode, SimilarityEngine};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::output::RecommendationReport;
use crate::{
    ARG_CATALOG, ARG_DISTANCE_MODE, ARG_LIMIT, ARG_MAX_SCORE, ARG_MEMBERSHIP_PENALTY,
    ARG_PREFERENCES, CliError, DEFAULT_CATALOG, ENV_PREFERENCES,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank every city in the catalog by its distance from the \
                 given preferences and print the closest matches as JSON. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend the cities closest to a preferences file"
)]
#[ortho_config(prefix = "CITYMATCH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing user preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_path: Option<Utf8PathBuf>,
    /// Path to the JSON city catalog (defaults to `cities.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of matches to return (defaults to 5).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Drop matches scoring above this value.
    #[arg(long = ARG_MAX_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) max_score: Option<f32>,
    /// Distance scaling: `raw` or `normalised`.
    #[arg(long = ARG_DISTANCE_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) distance_mode: Option<String>,
    /// Penalty for each preference category set the city does not overlap.
    #[arg(long = ARG_MEMBERSHIP_PENALTY, value_name = "penalty")]
    #[serde(default)]
    pub(crate) membership_penalty: Option<f32>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the preferences file.
    pub(crate) preferences_path: Utf8PathBuf,
    /// Path to the catalog file.
    pub(crate) catalog_path: Utf8PathBuf,
    /// Ranking limit and cut-off.
    pub(crate) options: RankOptions,
    /// Validated per-dimension weights.
    pub(crate) weights: DimensionWeights,
    /// Distance scaling.
    pub(crate) mode: DistanceMode,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences_path, ARG_PREFERENCES)?;
        Self::require_existing(&self.catalog_path, ARG_CATALOG)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Build the engine described by this configuration.
    pub(crate) fn engine(&self) -> Result<SimilarityEngine, CliError> {
        SimilarityEngine::from_config(self.weights.clone(), self.mode).map_err(CliError::from)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let preferences_path = args.preferences_path.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_PREFERENCES,
        })?;
        let catalog_path = args
            .catalog
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG));

        let mut options = match args.limit {
            None => RankOptions::default(),
            Some(raw) => NonZeroUsize::new(raw)
                .map(RankOptions::with_limit)
                .ok_or(CliError::ZeroLimit { field: ARG_LIMIT })?,
        };
        if let Some(max_score) = args.max_score {
            options = options.with_max_score(max_score);
        }

        let mode = args
            .distance_mode
            .as_deref()
            .map_or_else(|| Ok(DistanceMode::default()), str::parse)?;
        let weights = args
            .membership_penalty
            .map_or_else(DimensionWeights::new, |penalty| {
                DimensionWeights::new().with_membership_penalty(penalty)
            })
            .validate()?;

        Ok(Self {
            preferences_path,
            catalog_path,
            options,
            weights,
            mode,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    execute_recommend(&config, writer)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let preferences = load_preferences(&config.preferences_path)?;
    let catalog = load_catalog(&config.catalog_path)?;
    let engine = config.engine()?;
    let profile = preferences.profile();
    let request = RecommendRequest::new(preferences).with_options(config.options);

    let recommendation = engine.recommend(&catalog, &request)?;
    let report = RecommendationReport::new(&recommendation, &engine, &profile);
    write_report(writer, &report)
}

/// Loads and validates a JSON city catalog from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let records: Vec<CityRecord> = read_json(path)?;
    let invalid = |source: CatalogError| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    };
    let cities = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            City::try_from(record).map_err(|source| CatalogError::InvalidCity { index, source })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;
    let catalog = Catalog::new(cities).map_err(invalid)?;
    log::debug!("loaded {} cities from {path}", catalog.len());
    Ok(catalog)
}

/// Loads JSON-encoded preferences from disk, filling omitted fields with
/// the form defaults.
pub(super) fn load_preferences(path: &Utf8Path) -> Result<UserPreferences, CliError> {
    let record: PreferenceRecord = read_json(path)?;
    UserPreferences::try_from(record).map_err(|source| CliError::InvalidPreferences {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &RecommendationReport<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
