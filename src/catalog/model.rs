use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::ParseTicIdError;

// ---------------------------------------------------------------------------
// TicId – canonical object identifier
// ---------------------------------------------------------------------------

/// A TESS Input Catalog identifier in canonical decimal form.
///
/// The catalog stores identifiers as text, so lookups compare strings:
/// `"0001078"`, `"+1078"`, `"1078.0"` and `1078u64` all become `"1078"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicId(String);

impl TicId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TicId {
    fn from(id: u64) -> Self {
        TicId(id.to_string())
    }
}

impl From<u32> for TicId {
    fn from(id: u32) -> Self {
        TicId(id.to_string())
    }
}

impl FromStr for TicId {
    type Err = ParseTicIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(id) = text.parse::<u64>() {
            return Ok(id.into());
        }
        // integral floats, as produced by numeric round-trips of the ID column
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => {
                Ok((v as u64).into())
            }
            _ => Err(ParseTicIdError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Table – text-typed columnar data
// ---------------------------------------------------------------------------

/// One column of text cells; `None` is a missing value.
pub type Column = Vec<Option<String>>;

/// An immutable, column-major table of nullable text cells.
///
/// Used both for the loaded catalog and for query results. Every
/// narrowing operation returns a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    num_rows: usize,
}

impl Table {
    /// Build a table from `(name, column)` pairs.
    ///
    /// # Panics
    /// If column lengths differ or a name repeats. Both are construction
    /// bugs inside this crate, never data-dependent.
    pub(crate) fn from_columns(columns: Vec<(String, Column)>) -> Self {
        let num_rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());
        let mut index = HashMap::with_capacity(columns.len());

        for (i, (name, column)) in columns.into_iter().enumerate() {
            assert_eq!(column.len(), num_rows, "column {name} has a different length");
            let previous = index.insert(name.clone(), i);
            assert!(previous.is_none(), "duplicate column {name}");
            names.push(name);
            data.push(column);
        }

        Table {
            names,
            columns: data,
            index,
            num_rows,
        }
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Cell at `row` in column `name`. `None` if the column is unknown,
    /// the row is out of range or the cell is null.
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        self.column(name)?.get(row)?.as_deref()
    }

    /// Iterate rows as `(column name, cell)` views.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.num_rows).map(move |row| Row { table: self, row })
    }

    /// New table with the listed columns (in the listed order) and the
    /// given rows. A `None` row is all-null. Each kept cell is copied once.
    ///
    /// Returns the names that are not present, if any.
    pub(crate) fn gather<S: AsRef<str>>(
        &self,
        rows: &[Option<usize>],
        names: &[S],
    ) -> Result<Table, Vec<String>> {
        let missing: Vec<String> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| !self.has_column(n))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let columns = names
            .iter()
            .map(|n| {
                let i = self.index[n.as_ref()];
                let column = &self.columns[i];
                let gathered = rows
                    .iter()
                    .map(|r| r.and_then(|r| column[r].clone()))
                    .collect();
                (self.names[i].clone(), gathered)
            })
            .collect();
        Ok(Table::from_columns(columns))
    }

    /// Replace one column's cells. Used to fill identifiers of rows
    /// produced for unmatched lookups.
    pub(crate) fn with_column(mut self, name: &str, column: Column) -> Table {
        if let Some(&i) = self.index.get(name) {
            assert_eq!(column.len(), self.num_rows, "column {name} has a different length");
            self.columns[i] = column;
        }
        self
    }

    /// Convert to an Arrow batch with one nullable `Utf8` field per column.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let fields: Vec<Field> = self
            .names
            .iter()
            .map(|n| Field::new(n, DataType::Utf8, true))
            .collect();
        let arrays: Vec<ArrayRef> = self
            .columns
            .iter()
            .map(|c| Arc::new(c.iter().map(Option::as_deref).collect::<StringArray>()) as ArrayRef)
            .collect();
        RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let batch = self.to_record_batch().map_err(|_| fmt::Error)?;
        let pretty = arrow::util::pretty::pretty_format_batches(&[batch]).map_err(|_| fmt::Error)?;
        write!(f, "{pretty}")
    }
}

/// Serialized as a list of records: `[{"TIC_ID": "1078", ...}, ...]`.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.num_rows))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

// ---------------------------------------------------------------------------
// Row – borrowed view of one table row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> Row<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.table.value(self.row, name)
    }

    /// `(column name, cell)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        let row = self.row;
        let table = self.table;
        table
            .names
            .iter()
            .zip(&table.columns)
            .map(move |(n, c)| (n.as_str(), c[row].as_deref()))
    }
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.num_columns()))?;
        for (name, cell) in self.cells() {
            map.serialize_entry(name, &cell)?;
        }
        map.end()
    }
}
