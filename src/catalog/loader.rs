use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, SchemaRef};
use arrow::ipc::reader::FileReader;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;

use super::model::{Column, Table};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the named columns of a catalog file.  Dispatch by extension.
///
/// Supported formats:
/// * `.feather` / `.arrow` / `.ipc` – Arrow IPC file (`df.to_feather()`), recommended
/// * `.parquet` / `.pq`             – Parquet
/// * `.csv`                         – header row with column names
///
/// Only `keys` are read. The returned table holds them in the order
/// given, every cell converted to text, rows in file order.
pub fn load_table(path: &Path, keys: &[&str]) -> Result<Table, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "feather" | "arrow" | "ipc" => load_ipc(path, keys)?,
        "parquet" | "pq" => load_parquet(path, keys)?,
        "csv" => load_csv(path, keys)?,
        _ => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                ext,
            })
        }
    };

    log::debug!(
        "read {} row(s) x {} column(s) from {}",
        table.num_rows(),
        table.num_columns(),
        path.display()
    );
    Ok(table)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Schema indices of `keys`, or every key the schema lacks.
fn project(path: &Path, schema: &SchemaRef, keys: &[&str]) -> Result<Vec<usize>, LoadError> {
    let mut indices = Vec::with_capacity(keys.len());
    let mut missing = Vec::new();
    for key in keys {
        match schema.index_of(key) {
            Ok(i) => indices.push(i),
            Err(_) => missing.push(key.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(LoadError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}

// ---------------------------------------------------------------------------
// Arrow IPC (Feather v2) loader
// ---------------------------------------------------------------------------

fn load_ipc(path: &Path, keys: &[&str]) -> Result<Table, LoadError> {
    let arrow_err = |source| LoadError::Arrow {
        path: path.to_path_buf(),
        source,
    };

    // The footer alone tells us the schema; reopen with the projection.
    let schema = FileReader::try_new(BufReader::new(open(path)?), None)
        .map_err(arrow_err)?
        .schema();
    let indices = project(path, &schema, keys)?;

    let reader =
        FileReader::try_new(BufReader::new(open(path)?), Some(indices)).map_err(arrow_err)?;
    let mut builder = TableBuilder::new(path, keys);
    for batch in reader {
        builder.push_batch(&batch.map_err(arrow_err)?)?;
    }
    Ok(builder.finish())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`), as long as the schema is flat.
fn load_parquet(path: &Path, keys: &[&str]) -> Result<Table, LoadError> {
    let parquet_err = |source| LoadError::Parquet {
        path: path.to_path_buf(),
        source,
    };

    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?).map_err(parquet_err)?;
    let indices = project(path, builder.schema(), keys)?;
    let mask = ProjectionMask::roots(builder.parquet_schema(), indices);
    let reader = builder.with_projection(mask).build().map_err(parquet_err)?;

    let mut table = TableBuilder::new(path, keys);
    for batch in reader {
        let batch = batch.map_err(|source| LoadError::Arrow {
            path: path.to_path_buf(),
            source,
        })?;
        table.push_batch(&batch)?;
    }
    Ok(table.finish())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every cell taken verbatim
/// as text. Empty cells are null.
fn load_csv(path: &Path, keys: &[&str]) -> Result<Table, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(BufReader::new(open(path)?));
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut indices = Vec::with_capacity(keys.len());
    let mut missing = Vec::new();
    for key in keys {
        match headers.iter().position(|h| h == *key) {
            Some(i) => indices.push(i),
            None => missing.push(key.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut columns: Vec<Column> = vec![Vec::new(); keys.len()];
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        for (column, &i) in columns.iter_mut().zip(&indices) {
            let cell = record.get(i).filter(|v| !v.is_empty()).map(str::to_string);
            column.push(cell);
        }
    }

    Ok(Table::from_columns(
        keys.iter().map(|k| k.to_string()).zip(columns).collect(),
    ))
}

// ---------------------------------------------------------------------------
// Arrow → text columns
// ---------------------------------------------------------------------------

/// Accumulates projected record batches into text columns.
struct TableBuilder<'a> {
    path: PathBuf,
    keys: &'a [&'a str],
    columns: Vec<Column>,
}

impl<'a> TableBuilder<'a> {
    fn new(path: &Path, keys: &'a [&'a str]) -> Self {
        Self {
            path: path.to_path_buf(),
            keys,
            columns: vec![Vec::new(); keys.len()],
        }
    }

    /// Batch columns are looked up by name, so the projection's
    /// file order does not matter.
    fn push_batch(&mut self, batch: &RecordBatch) -> Result<(), LoadError> {
        for (key, column) in self.keys.iter().zip(self.columns.iter_mut()) {
            let array = batch
                .column_by_name(key)
                .ok_or_else(|| LoadError::MissingColumns {
                    path: self.path.clone(),
                    columns: vec![key.to_string()],
                })?;
            let text = to_text(array).map_err(|_| LoadError::UnsupportedColumnType {
                path: self.path.clone(),
                column: key.to_string(),
                data_type: array.data_type().to_string(),
            })?;
            let strings = text.as_string::<i32>();
            column.extend(
                strings
                    .iter()
                    .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string)),
            );
        }
        Ok(())
    }

    fn finish(self) -> Table {
        Table::from_columns(
            self.keys
                .iter()
                .map(|k| k.to_string())
                .zip(self.columns)
                .collect(),
        )
    }
}

/// Cast any scalar Arrow column to `Utf8`, keeping nulls.
fn to_text(array: &ArrayRef) -> Result<ArrayRef, arrow::error::ArrowError> {
    match array.data_type() {
        DataType::Utf8 => Ok(array.clone()),
        _ => cast(array, &DataType::Utf8),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::ipc::writer::FileWriter;
    use tempfile::tempdir;

    use super::*;

    fn batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("OBS_Tmag", DataType::Float64, true),
            Field::new("TIC_ID", DataType::Int64, false),
            Field::new("OBS_Sector", DataType::Utf8, true),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![Some(9.5), None])),
                Arc::new(Int64Array::from(vec![11, 22])),
                Arc::new(StringArray::from(vec![Some("1;2"), Some("")])),
            ],
        )
        .unwrap()
    }

    fn write_feather(path: &Path) {
        let batch = batch();
        let mut writer = FileWriter::try_new(File::create(path).unwrap(), &batch.schema()).unwrap();
        writer.write(&batch).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn feather_projection_follows_key_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cat.feather");
        write_feather(&path);

        let table = load_table(&path, &["TIC_ID", "OBS_Sector"]).unwrap();
        assert_eq!(table.column_names(), ["TIC_ID", "OBS_Sector"]);
        assert_eq!(table.value(0, "TIC_ID"), Some("11"));
        assert_eq!(table.value(0, "OBS_Sector"), Some("1;2"));
        // empty strings read as missing
        assert_eq!(table.value(1, "OBS_Sector"), None);
        assert!(!table.has_column("OBS_Tmag"));
    }

    #[test]
    fn numeric_nulls_stay_null() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cat.arrow");
        write_feather(&path);

        let table = load_table(&path, &["TIC_ID", "OBS_Tmag"]).unwrap();
        assert_eq!(table.value(0, "OBS_Tmag"), Some("9.5"));
        assert_eq!(table.value(1, "OBS_Tmag"), None);
    }

    #[test]
    fn every_missing_column_is_listed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cat.feather");
        write_feather(&path);

        match load_table(&path, &["TIC_ID", "GAIADR2_ra", "BANYAN_BEST_YA"]) {
            Err(LoadError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, ["GAIADR2_ra", "BANYAN_BEST_YA"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn absent_and_unknown_files() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_table(&dir.path().join("none.feather"), &["TIC_ID"]),
            Err(LoadError::NotFound { .. })
        ));

        let txt = dir.path().join("cat.txt");
        std::fs::write(&txt, "TIC_ID\n1\n").unwrap();
        assert!(matches!(
            load_table(&txt, &["TIC_ID"]),
            Err(LoadError::UnsupportedFormat { .. })
        ));

        let garbage = dir.path().join("garbage.feather");
        std::fs::write(&garbage, b"not arrow at all").unwrap();
        assert!(matches!(
            load_table(&garbage, &["TIC_ID"]),
            Err(LoadError::Arrow { .. })
        ));
    }

    #[test]
    fn csv_keeps_text_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cat.csv");
        std::fs::write(&path, "OBS_Sector,TIC_ID,TICv8_Tmag\n3;5,0042,\n7,43,10.25\n").unwrap();

        let table = load_table(&path, &["TIC_ID", "OBS_Sector", "TICv8_Tmag"]).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.value(0, "TIC_ID"), Some("0042"));
        assert_eq!(table.value(0, "OBS_Sector"), Some("3;5"));
        assert_eq!(table.value(0, "TICv8_Tmag"), None);
        assert_eq!(table.value(1, "TICv8_Tmag"), Some("10.25"));
    }
}
