//! Core type definitions for the preprocessor

use crate::core::{Result, SelectionError};
use serde::{Deserialize, Serialize};

/// Dense feature set stored row-major
///
/// Each row is one observation of dimension `dim`. Both the data features and
/// the label features handed to the preprocessor use this representation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    rows: usize,
    dim: usize,
}

impl FeatureMatrix {
    /// Create a feature matrix from row vectors
    ///
    /// All rows must share the same dimension.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(SelectionError::EmptyFeatures);
        }
        let dim = rows[0].len();
        if dim == 0 {
            return Err(SelectionError::EmptyFeatures);
        }
        for row in &rows {
            if row.len() != dim {
                return Err(SelectionError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
        }
        let n = rows.len();
        let mut data = Vec::with_capacity(n * dim);
        for row in rows {
            data.extend_from_slice(&row);
        }
        Ok(Self { data, rows: n, dim })
    }

    /// Create a single-column feature matrix, one row per value
    ///
    /// Convenient for label features, which are usually one-dimensional.
    pub fn from_column(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SelectionError::EmptyFeatures);
        }
        let rows = values.len();
        Ok(Self {
            data: values,
            rows,
            dim: 1,
        })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Dimensionality of each observation
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the matrix holds no observations
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Borrow row `i` as a slice
    ///
    /// # Panics
    /// Panics if `i >= len()`
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }
}

/// Symmetric kernel (Gram) matrix over a feature set
///
/// Stored as a full dense `n x n` block. Symmetry is a property of the kernels
/// that produce it, not enforced on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GramMatrix {
    n: usize,
    values: Vec<f64>,
}

impl GramMatrix {
    /// Create a Gram matrix from its backing values (row-major, length `n * n`)
    pub fn new(n: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != n * n {
            return Err(SelectionError::DimensionMismatch {
                expected: n * n,
                actual: values.len(),
            });
        }
        Ok(Self { n, values })
    }

    /// Create a zero-filled Gram matrix of size `n x n`
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Matrix size (number of observations per side)
    pub fn size(&self) -> usize {
        self.n
    }

    /// Get entry (i, j)
    ///
    /// # Panics
    /// Panics if `i >= size()` or `j >= size()`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "Gram index out of bounds");
        self.values[i * self.n + j]
    }

    /// Set entry (i, j)
    ///
    /// # Panics
    /// Panics if `i >= size()` or `j >= size()`
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.n && j < self.n, "Gram index out of bounds");
        self.values[i * self.n + j] = value;
    }

    /// Borrow the backing values (row-major)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Trace of the matrix
    pub fn trace(&self) -> f64 {
        (0..self.n).map(|i| self.get(i, i)).sum()
    }

    /// Maximum absolute deviation from symmetry, `max |K(i,j) - K(j,i)|`
    pub fn asymmetry(&self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                max = max.max((self.get(i, j) - self.get(j, i)).abs());
            }
        }
        max
    }
}

/// Feature selection algorithm tag
///
/// Identifies which selection strategy a concrete selector should configure
/// itself to run. The tag carries no behavior here; consuming it is the
/// obligation of [`AlgorithmSelectable`](crate::core::AlgorithmSelectable)
/// implementors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAlgorithm {
    /// Iteratively remove the least dependent features
    BackwardElimination,
    /// Iteratively add the most dependent features
    ForwardSelection,
}

impl std::fmt::Display for SelectionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionAlgorithm::BackwardElimination => write!(f, "backward-elimination"),
            SelectionAlgorithm::ForwardSelection => write!(f, "forward-selection"),
        }
    }
}
