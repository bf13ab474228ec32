//! Dashboard snapshot files.
//!
//! A snapshot is a single JSON document holding everything one dashboard
//! refresh displays. Paths ending in `.br` are Brotli-compressed
//! transparently on both ends; log-heavy snapshots typically shrink by
//! 60-70%.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};

use crate::model::DashboardSnapshot;
use crate::source::FeedSource;

/// Reads snapshot files produced by `logai-feedgen` or exported from the
/// backend.
pub struct SnapshotReader {
    path: String,
}

impl SnapshotReader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FeedSource for SnapshotReader {
    fn name(&self) -> &str {
        &self.path
    }

    fn fetch(&self) -> Result<DashboardSnapshot> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open snapshot: {}", self.path))?;

        let snapshot = if self.path.ends_with(".br") {
            let reader = Decompressor::new(BufReader::new(file), 4096);
            serde_json::from_reader(reader)
        } else {
            serde_json::from_reader(BufReader::new(file))
        }
        .with_context(|| format!("Failed to parse snapshot: {}", self.path))?;

        Ok(snapshot)
    }
}

/// Writes a snapshot to `path`, Brotli-compressing when the path ends in
/// `.br`.
pub fn write_snapshot(path: &str, snapshot: &DashboardSnapshot) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create snapshot: {}", path))?;

    let mut writer: Box<dyn Write> = if path.ends_with(".br") {
        let params = BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        };
        Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
    } else {
        Box::new(BufWriter::new(file))
    };

    serde_json::to_writer_pretty(&mut writer, snapshot)
        .with_context(|| format!("Failed to serialize snapshot: {}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush snapshot: {}", path))?;
    Ok(())
}
