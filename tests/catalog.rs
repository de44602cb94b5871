use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use tess_infos::{
    all_keys, default_keys, Catalog, CatalogError, FilePathStore, KeySpec, LoadError,
    MemoryPathStore, PathStore, Query, QueryError,
};

/// Targets: (TIC ID, sectors, Tmag, Gaia RV).
const TARGETS: [(i64, &str, f64, Option<f64>); 4] = [
    (1078, "1;2;3", 9.25, Some(-12.5)),
    (25155310, "3;5;7", 7.5, None),
    (38846515, "15", 11.0, Some(3.25)),
    (261136679, "5", 5.25, Some(20.5)),
];

/// A catalog batch with every column. Identifier, magnitude and velocity
/// columns carry typed values; the rest are empty text.
fn catalog_batch() -> RecordBatch {
    let n = TARGETS.len();
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();
    for key in all_keys() {
        let (field, column): (Field, ArrayRef) = match *key {
            "TIC_ID" => (
                Field::new(*key, DataType::Int64, false),
                Arc::new(Int64Array::from_iter_values(TARGETS.iter().map(|t| t.0))),
            ),
            "OBS_Sector" => (
                Field::new(*key, DataType::Utf8, false),
                Arc::new(StringArray::from_iter_values(TARGETS.iter().map(|t| t.1))),
            ),
            "TICv8_Tmag" => (
                Field::new(*key, DataType::Float64, false),
                Arc::new(Float64Array::from_iter_values(TARGETS.iter().map(|t| t.2))),
            ),
            "GAIADR2_radial_velocity" => (
                Field::new(*key, DataType::Float64, true),
                Arc::new(TARGETS.iter().map(|t| t.3).collect::<Float64Array>()),
            ),
            _ => (
                Field::new(*key, DataType::Utf8, true),
                Arc::new(StringArray::from(vec![None::<&str>; n])),
            ),
        };
        fields.push(field);
        columns.push(column);
    }
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap()
}

fn write_feather(path: &Path) {
    let batch = catalog_batch();
    let mut writer = FileWriter::try_new(File::create(path).unwrap(), &batch.schema()).unwrap();
    writer.write(&batch).unwrap();
    writer.finish().unwrap();
}

fn write_parquet(path: &Path) {
    let batch = catalog_batch();
    let mut writer = ArrowWriter::try_new(File::create(path).unwrap(), batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

fn feather_catalog() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unique_targets.feather");
    write_feather(&path);
    (dir, path)
}

fn ids(table: &tess_infos::Table) -> Vec<Option<&str>> {
    table.rows().map(|r| r.get("TIC_ID")).collect()
}

#[test]
fn default_view_from_feather() {
    let (_dir, path) = feather_catalog();
    let store = MemoryPathStore::with_path(&path);
    let catalog = Catalog::try_open(&store, KeySpec::Default, None).unwrap();

    let table = catalog.table().unwrap();
    assert_eq!(table.column_names().to_vec(), default_keys().to_vec());
    assert_eq!(table.num_rows(), 4);
    assert_eq!(table.value(1, "TIC_ID"), Some("25155310"));
    assert_eq!(table.value(0, "TICv8_Tmag"), Some("9.25"));
    assert_eq!(table.value(1, "GAIADR2_radial_velocity"), None);
    assert_eq!(table.value(0, "TICv8_Teff"), None);
}

#[test]
fn parquet_and_feather_load_identically() {
    let (dir, feather) = feather_catalog();
    let parquet = dir.path().join("unique_targets.parquet");
    write_parquet(&parquet);

    let spec: KeySpec = "mag,radial_velocity".parse().unwrap();
    let a = Catalog::try_open(&MemoryPathStore::new(), spec.clone(), Some(feather.as_path())).unwrap();
    let b = Catalog::try_open(&MemoryPathStore::new(), spec, Some(parquet.as_path())).unwrap();
    assert_eq!(a.keys(), b.keys());
    assert_eq!(a.table(), b.table());
}

#[test]
fn same_keys_same_file_same_table() {
    let (_dir, path) = feather_catalog();
    let store = MemoryPathStore::with_path(&path);
    let a = Catalog::try_open(&store, "OBS,BANYAN".parse().unwrap(), None).unwrap();
    let b = Catalog::try_open(&store, "BANYAN,OBS".parse().unwrap(), None).unwrap();
    assert_eq!(a.table(), b.table());
}

#[test]
fn lookup_keeps_request_order_with_null_rows() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::All, None).unwrap();

    let out = catalog
        .get(&Query::new().tic_ids([261136679u64, 42, 1078]))
        .unwrap()
        .expect("two of three IDs exist");
    assert_eq!(ids(&out), [Some("261136679"), Some("42"), Some("1078")]);
    assert_eq!(out.num_columns(), all_keys().len());
    assert!(out
        .rows()
        .nth(1)
        .unwrap()
        .cells()
        .all(|(name, cell)| name == "TIC_ID" || cell.is_none()));
}

#[test]
fn ids_parse_from_text() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::Default, None).unwrap();

    let requested: Vec<tess_infos::TicId> = ["0001078", "38846515.0"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let out = catalog.get(&Query::new().tic_ids(requested)).unwrap().unwrap();
    assert_eq!(ids(&out), [Some("1078"), Some("38846515")]);
}

#[test]
fn float_id_column_is_looked_up_by_integer_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("float_ids.feather");
    let schema = Arc::new(Schema::new(vec![
        Field::new("TIC_ID", DataType::Float64, false),
        Field::new("OBS_Sector", DataType::Utf8, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from(vec![1078.0, 25155310.0])) as ArrayRef,
            Arc::new(StringArray::from(vec!["1;2;3", "3;5;7"])),
        ],
    )
    .unwrap();
    let mut writer = FileWriter::try_new(File::create(&path).unwrap(), &schema).unwrap();
    writer.write(&batch).unwrap();
    writer.finish().unwrap();

    let catalog = Catalog::try_open(
        &MemoryPathStore::with_path(&path),
        KeySpec::fragment("OBS_Sector"),
        None,
    )
    .unwrap();
    let out = catalog
        .get(&Query::new().tic_id(1078u64))
        .unwrap()
        .expect("1078 is stored as 1078.0");
    assert_eq!(out.num_rows(), 1);
    assert_eq!(out.value(0, "OBS_Sector"), Some("1;2;3"));

    let out = catalog
        .get(&Query::new().tic_ids(["25155310".parse::<tess_infos::TicId>().unwrap()]).sector(5))
        .unwrap()
        .unwrap();
    assert_eq!(out.value(0, "OBS_Sector"), Some("3;5;7"));
}

#[test]
fn sector_filter_and_combination() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::Default, None).unwrap();

    let out = catalog.get(&Query::new().sector(5)).unwrap().unwrap();
    assert_eq!(ids(&out), [Some("25155310"), Some("261136679")]);

    let out = catalog.get(&Query::new().sectors(["3", "15"])).unwrap().unwrap();
    assert_eq!(ids(&out), [Some("1078"), Some("25155310"), Some("38846515")]);

    let out = catalog
        .get(&Query::new().tic_ids([261136679u64, 1078, 25155310]).sector(3))
        .unwrap()
        .unwrap();
    assert_eq!(ids(&out), [Some("1078"), Some("25155310")]);

    assert_eq!(catalog.get(&Query::new().tic_id(1078u64).sector(15)), Ok(None));
    assert_eq!(catalog.get(&Query::new().tic_id(999_999_999u64)), Ok(None));
}

#[test]
fn query_keys_narrow_the_result() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::All, None).unwrap();

    let out = catalog
        .get(&Query::new().sector(5).keys(KeySpec::fragment("radial_velocity")))
        .unwrap()
        .unwrap();
    assert_eq!(
        out.column_names(),
        [
            "TIC_ID",
            "OBS_Sector",
            "GAIADR2_radial_velocity",
            "GAIADR2_radial_velocity_error"
        ]
    );
    assert_eq!(out.value(1, "GAIADR2_radial_velocity"), Some("20.5"));
}

#[test]
fn unloaded_key_is_an_error() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::Default, None).unwrap();

    let err = catalog
        .get(&Query::new().keys(KeySpec::fragment("BANYAN_BEST_YA")))
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::KeysNotLoaded {
            keys: vec!["BANYAN_BEST_YA".to_string()]
        }
    );
}

#[test]
fn file_store_remembers_override() {
    let (dir, path) = feather_catalog();
    let store = FilePathStore::new(dir.path().join("config").join("tess_infos_path.txt"));

    assert!(!Catalog::open(&store, KeySpec::Default, None).is_ready());

    let first = Catalog::open(&store, KeySpec::Default, Some(path.as_path()));
    assert!(first.is_ready());
    assert_eq!(store.get().unwrap(), path);

    let second = Catalog::open(&store, KeySpec::Default, None);
    assert!(second.is_ready());
}

#[test]
fn wrong_columns_leave_catalog_unloaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "TIC_ID,OBS_Sector\n1,1\n").unwrap();

    let catalog = Catalog::open(&MemoryPathStore::new(), KeySpec::Default, Some(path.as_path()));
    assert!(!catalog.is_ready());
    match catalog.load_error() {
        Some(CatalogError::Load(LoadError::MissingColumns { columns, .. })) => {
            assert_eq!(columns.len(), default_keys().len() - 2);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(catalog.get(&Query::new()), Err(QueryError::NotLoaded));

    // a narrower key set loads from the same file
    let narrow = Catalog::open(&MemoryPathStore::new(), KeySpec::fragment("OBS_Sector"), Some(path.as_path()));
    assert!(narrow.is_ready());
}

#[test]
fn concurrent_readers() {
    let (_dir, path) = feather_catalog();
    let catalog = Arc::new(
        Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::Default, None).unwrap(),
    );
    let before = catalog.table().cloned();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let sector = ["1", "3", "5", "15"][i];
                catalog.get(&Query::new().sector(sector)).unwrap().unwrap().num_rows()
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counts, [1, 2, 2, 1]);
    assert_eq!(catalog.table().cloned(), before);
}

#[test]
fn json_output_is_records() {
    let (_dir, path) = feather_catalog();
    let catalog = Catalog::try_open(&MemoryPathStore::with_path(&path), KeySpec::fragment("Tmag"), None).unwrap();
    let out = catalog.get(&Query::new().tic_id(1078u64)).unwrap().unwrap();

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "TIC_ID": "1078",
            "OBS_Tmag": null,
            "OBS_Sector": "1;2;3",
            "TICv8_Tmag": "9.25",
            "TICv8_e_Tmag": null,
        }])
    );
}
