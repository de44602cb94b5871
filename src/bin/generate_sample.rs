//! Write a small synthetic catalog with every column of the real one.
//!
//! Usage: `generate_sample [OUTPUT]` where OUTPUT ends in `.feather`
//! (default `sample_catalog.feather`), `.parquet` or `.csv`.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use tess_infos::all_keys;

const N_TARGETS: usize = 500;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// One synthetic target: the fields that get plausible values.
struct Target {
    tic_id: u64,
    sectors: Vec<u64>,
    ra: f64,
    dec: f64,
    tmag: f64,
    teff: f64,
    plx: f64,
}

impl Target {
    fn random(rng: &mut SimpleRng, tic_id: u64) -> Self {
        let first = 1 + rng.below(26);
        let n_sectors = 1 + rng.below(3);
        let mut sectors: Vec<u64> = (0..n_sectors).map(|i| (first + 2 * i).min(26)).collect();
        sectors.dedup();
        Target {
            tic_id,
            sectors,
            ra: rng.uniform(0.0, 360.0),
            dec: rng.uniform(-90.0, 90.0),
            tmag: rng.uniform(4.0, 16.0),
            teff: rng.uniform(2800.0, 9000.0),
            plx: rng.uniform(0.1, 40.0),
        }
    }

    /// Text cell for column `key`; `None` leaves it empty.
    fn cell(&self, key: &str) -> Option<String> {
        let value = match key {
            "TIC_ID" | "OBS_TICID" | "TICv8_ID" | "BANYAN_TIC_ID" => self.tic_id.to_string(),
            "OBS_Sector" => self
                .sectors
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            "OBS_RA" | "TICv8_ra" | "GAIADR2_ra" => format!("{:.6}", self.ra),
            "OBS_Dec" | "TICv8_dec" | "GAIADR2_dec" => format!("{:.6}", self.dec),
            "OBS_Tmag" | "TICv8_Tmag" => format!("{:.3}", self.tmag),
            "TICv8_GAIAmag" | "GAIADR2_phot_g_mean_mag" => format!("{:.3}", self.tmag + 0.4),
            "TICv8_Teff" | "GAIADR2_teff_val" => format!("{:.0}", self.teff),
            "TICv8_plx" | "GAIADR2_parallax" => format!("{:.4}", self.plx),
            "TICv8_d" => format!("{:.2}", 1000.0 / self.plx),
            "TICv8_version" => "20190415".to_string(),
            "BANYAN_BEST_HYP" => "FIELD".to_string(),
            _ => return None,
        };
        Some(value)
    }
}

fn main() -> Result<()> {
    let output = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "sample_catalog.feather".to_string()),
    );

    let mut rng = SimpleRng::new(42);
    let targets: Vec<Target> = (0..N_TARGETS)
        .map(|i| Target::random(&mut rng, 1_000 + 37 * i as u64))
        .collect();

    // Every column as nullable text, like the published catalog.
    let keys = all_keys();
    let schema = Arc::new(Schema::new(
        keys.iter()
            .map(|k| Field::new(*k, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));
    let columns: Vec<ArrayRef> = keys
        .iter()
        .map(|k| {
            Arc::new(targets.iter().map(|t| t.cell(k)).collect::<StringArray>()) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "feather" | "arrow" | "ipc" => {
            let file = File::create(&output).context("creating output file")?;
            let mut writer = FileWriter::try_new(file, &schema).context("creating IPC writer")?;
            writer.write(&batch).context("writing batch")?;
            writer.finish().context("finishing IPC file")?;
        }
        "parquet" | "pq" => {
            let file = File::create(&output).context("creating output file")?;
            let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
            writer.write(&batch).context("writing batch")?;
            writer.close().context("closing writer")?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_path(&output).context("creating output file")?;
            writer.write_record(keys)?;
            for t in &targets {
                writer.write_record(keys.iter().map(|k| t.cell(k).unwrap_or_default()))?;
            }
            writer.flush()?;
        }
        other => bail!("Unsupported output extension: .{other}"),
    }

    println!(
        "Wrote {} targets ({} columns) to {}",
        targets.len(),
        keys.len(),
        output.display()
    );
    Ok(())
}
