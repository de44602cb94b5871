//! Column-selective, read-only access to the merged TESS short-cadence
//! target catalog: observing information, TICv8, Gaia DR2 and BANYAN Sigma
//! columns keyed by TIC ID and sector.
//!
//! ```no_run
//! use tess_infos::{Catalog, FilePathStore, KeySpec, Query};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = FilePathStore::user_default()?;
//! let catalog = Catalog::try_open(&store, "default,mag".parse()?, None)?;
//! if let Some(rows) = catalog.get(&Query::new().tic_id(1078u64))? {
//!     println!("{rows}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::accessor::{Catalog, Query};
pub use catalog::keys::{all_keys, default_keys, magnitude_keys, resolve, KeySpec};
pub use catalog::model::{Row, Table, TicId};
pub use config::{FilePathStore, MemoryPathStore, PathStore};
pub use error::{CatalogError, ConfigError, LoadError, ParseTicIdError, QueryError};
