/// Catalog layer: column names, key resolution, loading, and filtering.
///
/// Architecture:
/// ```text
///  KeySpec ("default", "mag", "*", ...)
///        │
///        ▼
///   ┌──────────┐
///   │   keys    │  resolve → ordered column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  .feather / .parquet / .csv → Table (named columns only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ accessor  │  Catalog: loaded Table + TIC ID index
///   └──────────┘
///        │  get(Query)
///        ▼
///   ┌──────────┐
///   │  filter   │  TIC ID left lookup, sector membership → row plan,
///   │           │  copied once into a new Table
///   └──────────┘
/// ```

pub mod accessor;
pub mod columns;
pub mod filter;
pub mod keys;
pub mod loader;
pub mod model;
