//! Error types emitted by the citymatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use citymatch_core::{CatalogError, PreferenceError, RecommendError};
use citymatch_scorer::ScorerConfigError;
use thiserror::Error;

/// Errors emitted by the citymatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested number of matches was zero.
    #[error("--{field} must be at least 1")]
    ZeroLimit {
        /// Option name.
        field: &'static str,
    },
    /// Scorer options were rejected.
    #[error(transparent)]
    ScorerConfig(#[from] ScorerConfigError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog file held an invalid or duplicate city.
    #[error("catalog {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: CatalogError,
    },
    /// The preferences file held an out-of-range value.
    #[error("preferences in {path:?} are invalid: {source}")]
    InvalidPreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PreferenceError,
    },
    /// The engine rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising the recommendation failed.
    #[error("failed to serialise recommendation: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the recommendation failed.
    #[error("failed to write recommendation: {0}")]
    WriteOutput(#[source] std::io::Error),
}
