use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tess_infos::{resolve, Catalog, FilePathStore, KeySpec, PathStore, Query, Table, TicId};

/// Query the merged TESS target catalog (TICv8, Gaia DR2, BANYAN Sigma).
#[derive(Parser)]
#[command(name = "tess-infos", version, about)]
struct Cli {
    /// Path file remembering the catalog location
    #[arg(long, global = true, env = "TESS_INFOS_PATH_FILE")]
    path_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up rows by TIC ID and/or sector
    Get(GetArgs),
    /// List the columns a key specification resolves to
    Keys {
        /// Comma-separated fragments, e.g. "default,OBS,mag" or "*"
        #[arg(default_value = "")]
        spec: String,
    },
    /// Remember the catalog file location
    SetPath { path: PathBuf },
    /// Print the remembered catalog file location
    ShowPath,
}

#[derive(clap::Args)]
struct GetArgs {
    /// TIC ID(s); results keep this order, unknown IDs give empty rows
    #[arg(long = "tic", value_delimiter = ',')]
    tic_ids: Vec<TicId>,

    /// Sector(s); keep targets observed in any of them
    #[arg(long = "sector", value_delimiter = ',')]
    sectors: Vec<String>,

    /// Columns to load (comma-separated fragments)
    #[arg(long, default_value = "default")]
    load_keys: KeySpec,

    /// Columns to print; defaults to every loaded column
    #[arg(long)]
    keys: Option<KeySpec>,

    /// Catalog file to use (and remember for later runs)
    #[arg(long, env = "TESS_INFOS_CATALOG")]
    path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let store = match cli.path_file {
        Some(file) => FilePathStore::new(file),
        None => FilePathStore::user_default()?,
    };

    match cli.command {
        Command::Get(args) => get(&store, args),
        Command::Keys { spec } => {
            let spec: KeySpec = spec.parse()?;
            let mut out = io::stdout().lock();
            for key in resolve(&spec) {
                writeln!(out, "{key}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::SetPath { path } => {
            store.set(&path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::ShowPath => {
            println!("{}", store.get()?.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn get(store: &FilePathStore, args: GetArgs) -> Result<ExitCode> {
    let catalog = Catalog::try_open(store, args.load_keys, args.path.as_deref())
        .map_err(|err| anyhow::anyhow!(err.remediation()))?;

    let mut query = Query::new();
    if !args.tic_ids.is_empty() {
        query = query.tic_ids(args.tic_ids);
    }
    if !args.sectors.is_empty() {
        query = query.sectors(args.sectors);
    }
    if let Some(keys) = args.keys {
        query = query.keys(keys);
    }

    let Some(table) = catalog.get(&query)? else {
        // already reported by the catalog
        return Ok(ExitCode::from(2));
    };
    print_table(&table, args.format)?;
    Ok(ExitCode::SUCCESS)
}

fn print_table(table: &Table, format: Format) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        Format::Table => writeln!(out, "{table}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, table).context("writing JSON")?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(table.column_names())?;
            for row in table.rows() {
                writer.write_record(row.cells().map(|(_, cell)| cell.unwrap_or("")))?;
            }
            writer.flush().context("writing CSV")?;
        }
    }
    Ok(())
}
