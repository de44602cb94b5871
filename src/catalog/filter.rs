use std::collections::{HashMap, HashSet};

use super::columns::{OBS_SECTOR, TIC_ID};
use super::model::{TicId, Table};

// ---------------------------------------------------------------------------
// Identifier lookup
// ---------------------------------------------------------------------------

/// Maps canonical TIC ID text → row index of the loaded table.
pub type IdIndex = HashMap<String, usize>;

/// Index the `TIC_ID` column by canonical ID text, so stored `"1078.0"`
/// or `"0001078"` are found as `1078`. Cells that are not integral IDs
/// are indexed verbatim. The first row wins if an ID repeats.
pub fn build_id_index(table: &Table) -> IdIndex {
    let mut index = IdIndex::new();
    let Some(ids) = table.column(TIC_ID) else {
        return index;
    };
    let mut duplicates = 0usize;
    for (row, id) in ids.iter().enumerate() {
        let Some(id) = id else { continue };
        let key = match id.parse::<TicId>() {
            Ok(canonical) => canonical.as_str().to_string(),
            Err(_) => id.clone(),
        };
        if index.contains_key(&key) {
            duplicates += 1;
        } else {
            index.insert(key, row);
        }
    }
    if duplicates > 0 {
        log::warn!("{duplicates} duplicate {TIC_ID} value(s) in catalog; using first occurrence");
    }
    index
}

// ---------------------------------------------------------------------------
// Row plans: which loaded rows a query result copies, in output order
// ---------------------------------------------------------------------------

/// One row of a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedRow<'a> {
    /// Copy of this loaded-table row.
    Found(usize),
    /// A requested TIC ID absent from the catalog: null cells but its ID.
    Missing(&'a TicId),
}

/// Every loaded row, in file order.
pub fn all_rows(table: &Table) -> Vec<PlannedRow<'static>> {
    (0..table.num_rows()).map(PlannedRow::Found).collect()
}

/// Left lookup: one planned row per requested ID, in request order.
pub fn lookup_ids<'a>(index: &IdIndex, ids: &'a [TicId]) -> Vec<PlannedRow<'a>> {
    let rows: Vec<PlannedRow<'a>> = ids
        .iter()
        .map(|id| match index.get(id.as_str()) {
            Some(&row) => PlannedRow::Found(row),
            None => PlannedRow::Missing(id),
        })
        .collect();
    let unmatched = rows.iter().filter(|r| matches!(r, PlannedRow::Missing(_))).count();
    if unmatched > 0 {
        log::debug!("{unmatched} of {} requested TIC ID(s) not in catalog", ids.len());
    }
    rows
}

// ---------------------------------------------------------------------------
// Sector membership
// ---------------------------------------------------------------------------

/// Keep planned rows observed in at least one of `sectors`.
///
/// The sector field holds `;`-separated sector tokens (`"3;5;7"`).
/// Missing rows and null sector fields never match. Surviving rows keep
/// their order.
pub fn filter_sectors<'a>(
    table: &Table,
    rows: Vec<PlannedRow<'a>>,
    sectors: &[String],
) -> Vec<PlannedRow<'a>> {
    let wanted: HashSet<&str> = sectors.iter().map(|s| s.trim()).collect();
    let Some(column) = table.column(OBS_SECTOR) else {
        return Vec::new();
    };
    rows.into_iter()
        .filter(|row| match row {
            PlannedRow::Found(r) => column[*r]
                .as_deref()
                .is_some_and(|f| f.split(';').any(|token| wanted.contains(token.trim()))),
            PlannedRow::Missing(_) => false,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

/// Copy the planned rows of the listed columns into a new table.
///
/// Returns the names that are not loaded, if any.
pub fn materialize<S: AsRef<str>>(
    table: &Table,
    rows: &[PlannedRow<'_>],
    names: &[S],
) -> Result<Table, Vec<String>> {
    let sources: Vec<Option<usize>> = rows
        .iter()
        .map(|row| match row {
            PlannedRow::Found(r) => Some(*r),
            PlannedRow::Missing(_) => None,
        })
        .collect();
    let result = table.gather(&sources, names)?;

    if !rows.iter().any(|r| matches!(r, PlannedRow::Missing(_))) {
        return Ok(result);
    }
    let id_column = rows
        .iter()
        .map(|row| match row {
            PlannedRow::Found(r) => table.value(*r, TIC_ID).map(str::to_string),
            PlannedRow::Missing(id) => Some(id.as_str().to_string()),
        })
        .collect();
    Ok(result.with_column(TIC_ID, id_column))
}
