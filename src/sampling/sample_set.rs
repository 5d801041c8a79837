//! Results of a synthetic sampling run, and their on-disk representation.
//!
//! Results are stored as ZStandard compressed JSON: a table with one entry per sampling
//! fraction, holding the occurrence counts observed at that fraction.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tabled::{Table, Tabled};
use thiserror::Error;
use zstd::{Decoder, Encoder};

/// ZStandard level used when saving results.
const COMPRESSION_LEVEL: i32 = 16;

/// Errors that can occur while saving or loading a [`SampleSet`].
#[derive(Error, Debug)]
pub enum SampleSetError {
    #[error("Failed to access sample file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize samples as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, SampleSetError>;

/// Occurrence counts observed at a single sampling fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionSample {
    /// Sampling fraction `p`.
    pub fraction: f64,
    /// Number of individuals drawn, `floor(N * p)`.
    pub subsample_size: u64,
    /// Number of times each observed species was drawn (species identity discarded).
    pub occurrence_counts: Vec<u64>,
}

impl FractionSample {
    /// Number of distinct species observed in the sub-sample.
    pub fn observed_species(&self) -> usize {
        self.occurrence_counts.len()
    }

    /// Number of species observed exactly once.
    pub fn singletons(&self) -> usize {
        self.occurrence_counts
            .iter()
            .filter(|&&count| count == 1)
            .count()
    }
}

/// Complete output of a synthetic sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Number of species in the synthetic community.
    pub species: usize,
    /// Power-law shape parameter the community was drawn with.
    pub alpha: f64,
    /// Total number of individuals in the community (`N`).
    pub community_size: u64,
    /// Seed that reproduces this run.
    pub seed: u64,
    /// One entry per sampling fraction, in the order the fractions were requested.
    pub samples: Vec<FractionSample>,
}

impl SampleSet {
    /// Returns the occurrence counts recorded for `fraction`, if it was sampled.
    ///
    /// Fractions are matched with a relative tolerance of `1e-9`.
    pub fn get(&self, fraction: f64) -> Option<&[u64]> {
        self.samples
            .iter()
            .find(|sample| {
                let tolerance = 1e-9 * sample.fraction.abs().max(f64::MIN_POSITIVE);
                (sample.fraction - fraction).abs() <= tolerance
            })
            .map(|sample| sample.occurrence_counts.as_slice())
    }

    /// Iterates over `(fraction, occurrence counts)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[u64])> {
        self.samples
            .iter()
            .map(|sample| (sample.fraction, sample.occurrence_counts.as_slice()))
    }

    /// Per-fraction summary rows, for display.
    pub fn summary(&self) -> Vec<FractionSummary> {
        self.samples.iter().map(FractionSummary::from).collect()
    }

    /// Saves the sample set as ZStandard compressed JSON.
    pub fn save(&self, output_path: &Path) -> Result<()> {
        let output_file = BufWriter::new(File::create(output_path)?);
        let mut encoder = Encoder::new(output_file, COMPRESSION_LEVEL)?;
        serde_json::to_writer(&mut encoder, self)?;
        encoder.finish()?.flush()?;
        Ok(())
    }

    /// Loads a sample set previously written by [`SampleSet::save`].
    pub fn load(input_path: &Path) -> Result<Self> {
        let input_file = BufReader::new(File::open(input_path)?);
        let mut decoder = Decoder::with_buffer(input_file)?;
        Ok(serde_json::from_reader(&mut decoder)?)
    }
}

/// A single row of the per-fraction summary table.
#[derive(Debug, Clone, Tabled)]
pub struct FractionSummary {
    #[tabled(rename = "Fraction")]
    pub fraction: String,
    #[tabled(rename = "Individuals")]
    pub individuals: u64,
    #[tabled(rename = "Species")]
    pub species: usize,
    #[tabled(rename = "Singletons")]
    pub singletons: usize,
}

impl From<&FractionSample> for FractionSummary {
    fn from(sample: &FractionSample) -> Self {
        Self {
            fraction: format!("{:.0e}", sample.fraction),
            individuals: sample.subsample_size,
            species: sample.observed_species(),
            singletons: sample.singletons(),
        }
    }
}

/// Formats summary rows as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `rows` - A slice of [`FractionSummary`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_fraction_table(rows: &[FractionSummary], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No fractions were sampled".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_set() -> SampleSet {
        SampleSet {
            species: 4,
            alpha: 0.5,
            community_size: 120,
            seed: 42,
            samples: vec![
                FractionSample {
                    fraction: 0.1,
                    subsample_size: 12,
                    occurrence_counts: vec![1, 9, 1, 1],
                },
                FractionSample {
                    fraction: 0.01,
                    subsample_size: 1,
                    occurrence_counts: vec![1],
                },
            ],
        }
    }

    #[test]
    fn save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("samples.json.zst");

        let samples = sample_set();
        samples.save(&path).unwrap();
        let loaded = SampleSet::load(&path).unwrap();

        assert_eq!(loaded, samples);
    }

    #[test]
    fn load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = SampleSet::load(&temp_dir.path().join("missing.json.zst"));
        assert!(matches!(result, Err(SampleSetError::Io(_))));
    }

    #[test]
    fn lookup_by_fraction() {
        let samples = sample_set();
        assert_eq!(samples.get(0.1), Some(&[1, 9, 1, 1][..]));
        assert_eq!(samples.get(0.01), Some(&[1][..]));
        assert_eq!(samples.get(0.5), None);
        assert_eq!(samples.iter().count(), 2);
    }

    #[test]
    fn summary_counts_species_and_singletons() {
        let summary = sample_set().summary();
        assert_eq!(summary[0].fraction, "1e-1");
        assert_eq!(summary[0].individuals, 12);
        assert_eq!(summary[0].species, 4);
        assert_eq!(summary[0].singletons, 3);
    }

    #[test]
    fn test_format_fraction_table() {
        let rows = sample_set().summary();
        let table = format_fraction_table(&rows, Some("Sampling Summary"));

        assert!(table.contains("Sampling Summary"));
        assert!(table.contains("Fraction"));
        assert!(table.contains("Singletons"));
        assert!(table.contains("1e-2"));

        let table_no_title = format_fraction_table(&rows, None);
        assert!(!table_no_title.contains("Sampling Summary"));
        assert_eq!(format_fraction_table(&[], None), "No fractions were sampled");
    }
}
