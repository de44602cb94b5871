//! Error types.
//!
//! Construction failures ([`ConfigError`], [`LoadError`], joined in
//! [`CatalogError`]) are operator problems: fix the path or fetch the file.
//! [`QueryError`] is caller misuse of a constructed [`Catalog`].
//!
//! [`Catalog`]: crate::Catalog

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Public download location of the merged catalog file.
pub const CATALOG_DOWNLOAD_URL: &str =
    "https://www.dropbox.com/s/kx5w4xombyvf4tg/unique_targets_S001-S026_obs_tic_gaia_banyan.feather?dl=0";

/// The path side-channel could not provide or store a catalog path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no catalog path configured ({} does not exist)", file.display())]
    Missing { file: PathBuf },

    #[error("catalog path file {} is empty", file.display())]
    Empty { file: PathBuf },

    #[error("failed to read catalog path file {}: {source}", file.display())]
    Read { file: PathBuf, source: io::Error },

    #[error("failed to write catalog path file {}: {source}", file.display())]
    Write { file: PathBuf, source: io::Error },

    #[error("cannot locate a config directory: set TESS_INFOS_PATH_FILE, XDG_CONFIG_HOME or HOME")]
    NoConfigDir,
}

/// The catalog file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open catalog file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("unsupported catalog file format {:?} ({}); expected .feather, .arrow, .parquet or .csv", ext, path.display())]
    UnsupportedFormat { path: PathBuf, ext: String },

    #[error("failed to read Arrow data from {}: {source}", path.display())]
    Arrow {
        path: PathBuf,
        source: arrow::error::ArrowError,
    },

    #[error("failed to read Parquet data from {}: {source}", path.display())]
    Parquet {
        path: PathBuf,
        source: parquet::errors::ParquetError,
    },

    #[error("failed to read CSV data from {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("catalog file {} lacks column(s): {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("column {column} of {} has type {data_type}, which cannot be read as text", path.display())]
    UnsupportedColumnType {
        path: PathBuf,
        column: String,
        data_type: String,
    },
}

/// Constructing a [`Catalog`](crate::Catalog) failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl CatalogError {
    /// Multi-line operator guidance: what was searched and how to fix it.
    pub fn remediation(&self) -> String {
        let searched = match self {
            CatalogError::Load(
                LoadError::NotFound { path }
                | LoadError::Io { path, .. }
                | LoadError::UnsupportedFormat { path, .. }
                | LoadError::Arrow { path, .. }
                | LoadError::Parquet { path, .. }
                | LoadError::Csv { path, .. }
                | LoadError::MissingColumns { path, .. }
                | LoadError::UnsupportedColumnType { path, .. },
            ) => path.display().to_string(),
            CatalogError::Config(_) => "<no path configured>".to_string(),
        };
        [
            "No catalog found.".to_string(),
            format!("Reason: {self}"),
            "The following path was searched:".to_string(),
            searched,
            "You can permanently change this path by opening the catalog once with an explicit path,"
                .to_string(),
            "or by running `tess-infos set-path <PATH>`.".to_string(),
            "If you do not have the latest catalog, please first download it here:".to_string(),
            CATALOG_DOWNLOAD_URL.to_string(),
        ]
        .join("\n")
    }
}

/// A query against a [`Catalog`](crate::Catalog) was malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("the catalog is not loaded")]
    NotLoaded,

    #[error("key(s) not loaded at construction: {}; reopen the catalog with these keys", keys.join(", "))]
    KeysNotLoaded { keys: Vec<String> },
}

/// Text that is not a non-negative integral TIC ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid TIC ID {input:?}")]
pub struct ParseTicIdError {
    pub input: String,
}
