//! CSV feature loading
//!
//! Loads dense feature matrices from CSV files where:
//! - Every column is a feature, or the last column is a label (caller's choice)
//! - The first row can be headers (automatically detected)
//! - Lines starting with '#' are comments

use crate::core::{FeatureMatrix, Result, SelectionError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Features and optional label column loaded from CSV
#[derive(Debug, Clone)]
pub struct CsvFeatures {
    features: FeatureMatrix,
    labels: Option<FeatureMatrix>,
}

impl CsvFeatures {
    /// Load a feature matrix from a CSV file, treating every column as a feature
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SelectionError::IoError)?;
        Self::from_reader(BufReader::new(file), false)
    }

    /// Load from a CSV file, splitting the last column off as label features
    pub fn from_file_with_labels<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SelectionError::IoError)?;
        Self::from_reader(BufReader::new(file), true)
    }

    /// Load from a reader; `split_labels` moves the last column into a
    /// one-dimensional label feature matrix
    pub fn from_reader<R: BufRead>(mut reader: R, split_labels: bool) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut first_line = String::new();

        reader
            .read_line(&mut first_line)
            .map_err(SelectionError::IoError)?;
        let first_line = first_line.trim();

        if first_line.is_empty() {
            return Err(SelectionError::EmptyFeatures);
        }

        if !first_line.starts_with('#') && !Self::is_header_line(first_line) {
            rows.push(Self::parse_data_line(first_line)?);
        }

        for line in reader.lines() {
            let line = line.map_err(SelectionError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            rows.push(Self::parse_data_line(line)?);
        }

        if rows.is_empty() {
            return Err(SelectionError::EmptyFeatures);
        }

        if split_labels {
            let width = rows[0].len();
            if width < 2 {
                return Err(SelectionError::ParseError(
                    "need at least one feature column besides the label".to_string(),
                ));
            }
            let mut labels = Vec::with_capacity(rows.len());
            for row in &mut rows {
                if row.len() != width {
                    return Err(SelectionError::DimensionMismatch {
                        expected: width,
                        actual: row.len(),
                    });
                }
                labels.push(row.pop().unwrap_or(0.0));
            }
            Ok(Self {
                features: FeatureMatrix::from_rows(rows)?,
                labels: Some(FeatureMatrix::from_column(labels)?),
            })
        } else {
            Ok(Self {
                features: FeatureMatrix::from_rows(rows)?,
                labels: None,
            })
        }
    }

    /// The loaded feature matrix
    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    /// The label column, if one was split off
    pub fn labels(&self) -> Option<&FeatureMatrix> {
        self.labels.as_ref()
    }

    /// Take ownership of features and labels
    pub fn into_parts(self) -> (FeatureMatrix, Option<FeatureMatrix>) {
        (self.features, self.labels)
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return false;
        }

        // Mostly non-numeric fields means headers
        let non_numeric = fields
            .iter()
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();
        non_numeric > fields.len() / 2
    }

    /// Parse a CSV data line into a dense row
    fn parse_data_line(line: &str) -> Result<Vec<f64>> {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        let mut row = Vec::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                SelectionError::ParseError(format!(
                    "Invalid value at column {}: {}",
                    idx + 1,
                    field
                ))
            })?;
            row.push(value);
        }
        Ok(row)
    }
}
