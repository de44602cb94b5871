use std::path::{Path, PathBuf};
use std::time::Instant;

use super::filter::{all_rows, build_id_index, filter_sectors, lookup_ids, materialize, IdIndex};
use super::keys::{resolve, KeySpec};
use super::loader::load_table;
use super::model::{TicId, Table};
use crate::config::PathStore;
use crate::error::{CatalogError, QueryError};

// ---------------------------------------------------------------------------
// Query – what `Catalog::get` should return
// ---------------------------------------------------------------------------

/// Row and column selection for [`Catalog::get`].
///
/// ```no_run
/// # use tess_infos::{KeySpec, Query};
/// let query = Query::new()
///     .tic_ids([1078u64, 25155310])
///     .sectors([5, 6])
///     .keys(KeySpec::fragment("mag"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    tic_ids: Option<Vec<TicId>>,
    sectors: Option<Vec<String>>,
    keys: Option<KeySpec>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left lookup by TIC ID: one result row per ID, in this order.
    pub fn tic_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TicId>,
    {
        self.tic_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn tic_id(self, id: impl Into<TicId>) -> Self {
        self.tic_ids([id])
    }

    /// Keep rows observed in any of these sectors.
    pub fn sectors<I, T>(mut self, sectors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.sectors = Some(
            sectors
                .into_iter()
                .map(|s| s.to_string().trim().to_string())
                .collect(),
        );
        self
    }

    pub fn sector(self, sector: impl ToString) -> Self {
        self.sectors([sector])
    }

    /// Columns to return. Without this, every loaded column is returned.
    pub fn keys(mut self, keys: KeySpec) -> Self {
        self.keys = Some(keys);
        self
    }
}

// ---------------------------------------------------------------------------
// Catalog – the loaded table and its queries
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum State {
    /// Construction failed; queries are refused.
    Unloaded(CatalogError),
    Ready { table: Table, ids: IdIndex },
}

/// Read-only access to the merged target catalog.
///
/// The loaded table never changes after construction, so a `Catalog`
/// can be shared across threads and queried concurrently.
#[derive(Debug)]
pub struct Catalog {
    keys: Vec<&'static str>,
    path: Option<PathBuf>,
    state: State,
}

impl Catalog {
    /// Open the catalog, reporting failures as a typed error.
    ///
    /// If `path` is given it is first persisted in `store`; the catalog
    /// path is then always read back from `store`. Only the columns
    /// resolved from `keys` are loaded.
    pub fn try_open(
        store: &dyn PathStore,
        keys: KeySpec,
        path: Option<&Path>,
    ) -> Result<Catalog, CatalogError> {
        if let Some(path) = path {
            store.set(path)?;
        }
        let path = store.get()?;
        let keys = resolve(&keys);

        let started = Instant::now();
        let table = load_table(&path, &keys)?;
        log::info!(
            "loaded {} row(s) x {} column(s) from {} in {:.2?}",
            table.num_rows(),
            table.num_columns(),
            path.display(),
            started.elapsed()
        );

        let ids = build_id_index(&table);
        Ok(Catalog {
            keys,
            path: Some(path),
            state: State::Ready { table, ids },
        })
    }

    /// Open the catalog; on failure log how to fix it and return an
    /// unloaded catalog instead of an error.
    pub fn open(store: &dyn PathStore, keys: KeySpec, path: Option<&Path>) -> Catalog {
        let resolved = resolve(&keys);
        match Self::try_open(store, keys, path) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("{}", err.remediation());
                Catalog {
                    keys: resolved,
                    path: store.get().ok(),
                    state: State::Unloaded(err),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// Why construction failed, if it did.
    pub fn load_error(&self) -> Option<&CatalogError> {
        match &self.state {
            State::Unloaded(err) => Some(err),
            State::Ready { .. } => None,
        }
    }

    /// Columns requested at construction, in catalog order.
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// The catalog file path read at construction, if one was configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The loaded table.
    pub fn table(&self) -> Option<&Table> {
        match &self.state {
            State::Ready { table, .. } => Some(table),
            State::Unloaded(_) => None,
        }
    }

    /// Run a query.
    ///
    /// Returns `Ok(None)` when no row matches. Rows are looked up by TIC
    /// ID first (keeping request order), then filtered by sector, then
    /// narrowed to the requested keys.
    pub fn get(&self, query: &Query) -> Result<Option<Table>, QueryError> {
        let State::Ready { table, ids } = &self.state else {
            return Err(QueryError::NotLoaded);
        };

        // Check keys before touching rows: a key mismatch is a bug
        // regardless of whether anything matches.
        let keys: Vec<&str> = match &query.keys {
            Some(spec) => resolve(spec),
            None => self.keys.clone(),
        };
        let missing: Vec<String> = keys
            .iter()
            .filter(|k| !table.has_column(k))
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(QueryError::KeysNotLoaded { keys: missing });
        }

        // Plan rows against the loaded table, then copy them out once.
        let mut rows = match &query.tic_ids {
            // Unknown IDs become null rows, unless none is known at all.
            Some(tic_ids) if !tic_ids.iter().any(|id| ids.contains_key(id.as_str())) => {
                log::warn!("This combination of TIC ID/sectors is invalid: no requested TIC ID is in the catalog");
                return Ok(None);
            }
            Some(tic_ids) => lookup_ids(ids, tic_ids),
            None => all_rows(table),
        };
        if let Some(sectors) = &query.sectors {
            rows = filter_sectors(table, rows, sectors);
        }

        if rows.is_empty() {
            log::warn!("This combination of TIC ID/sectors is invalid: no matching rows");
            return Ok(None);
        }

        let result = materialize(table, &rows, keys.as_slice())
            .map_err(|keys| QueryError::KeysNotLoaded { keys })?;
        Ok(Some(result))
    }
}
