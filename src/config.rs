//! Persistent catalog path.
//!
//! The catalog file location is remembered between runs in a one-line
//! text file. It is process-wide state that outlives any [`Catalog`], so
//! it sits behind [`PathStore`] and is handed to the catalog explicitly.
//!
//! [`Catalog`]: crate::Catalog

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::ConfigError;

/// Overrides the location of the path file.
pub const PATH_FILE_ENV: &str = "TESS_INFOS_PATH_FILE";

/// File name of the path file inside the config directory.
pub const PATH_FILE_NAME: &str = "tess_infos_path.txt";

/// Get/set of the catalog file path.
///
/// `set` is last-writer-wins; implementations must never expose a
/// partially written path to `get`.
pub trait PathStore {
    fn get(&self) -> Result<PathBuf, ConfigError>;
    fn set(&self, path: &Path) -> Result<(), ConfigError>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// A [`PathStore`] backed by a single text file.
#[derive(Debug, Clone)]
pub struct FilePathStore {
    file: PathBuf,
}

impl FilePathStore {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// The per-user path file.
    ///
    /// Lookup order: `$TESS_INFOS_PATH_FILE`, then
    /// `$XDG_CONFIG_HOME/tess_infos/`, then `$HOME/.config/tess_infos/`.
    pub fn user_default() -> Result<Self, ConfigError> {
        if let Some(file) = env::var_os(PATH_FILE_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(file));
        }
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("HOME")
                    .filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("tess_infos").join(PATH_FILE_NAME)))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Write via a sibling temp file and rename over the target.
    fn write_atomic(&self, contents: &str) -> io::Result<()> {
        let dir = match self.file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.file).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PathStore for FilePathStore {
    fn get(&self) -> Result<PathBuf, ConfigError> {
        let text = match fs::read_to_string(&self.file) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing {
                    file: self.file.clone(),
                })
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    file: self.file.clone(),
                    source,
                })
            }
        };
        // one line; tolerate a trailing newline from hand edits
        let line = text.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            return Err(ConfigError::Empty {
                file: self.file.clone(),
            });
        }
        Ok(PathBuf::from(line))
    }

    fn set(&self, path: &Path) -> Result<(), ConfigError> {
        let absolute = absolutize(path);
        self.write_atomic(&absolute.to_string_lossy())
            .map_err(|source| ConfigError::Write {
                file: self.file.clone(),
                source,
            })?;
        log::info!(
            "catalog path set to {} (stored in {})",
            absolute.display(),
            self.file.display()
        );
        Ok(())
    }
}

/// Relative paths are anchored at the current directory so the stored
/// path stays valid from anywhere.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A process-local [`PathStore`], for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPathStore {
    path: Mutex<Option<PathBuf>>,
}

impl MemoryPathStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Mutex::new(Some(path.into())),
        }
    }
}

impl PathStore for MemoryPathStore {
    fn get(&self) -> Result<PathBuf, ConfigError> {
        let guard = self.path.lock().unwrap_or_else(|e| e.into_inner());
        guard.clone().ok_or_else(|| ConfigError::Missing {
            file: PathBuf::from("<memory>"),
        })
    }

    fn set(&self, path: &Path) -> Result<(), ConfigError> {
        let mut guard = self.path.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(path.to_path_buf());
        Ok(())
    }
}
