//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) controls the kernel width.

use crate::core::{Result, SelectionError};
use crate::kernel::Kernel;

/// RBF kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The usual default for data features in dependence measures. Gamma controls
/// the reach of each observation:
/// - High gamma: only close points look similar
/// - Low gamma: distant points still look similar
#[derive(Debug, Clone, Copy)]
pub struct RbfKernel {
    gamma: f64,
}

impl RbfKernel {
    /// Create a new RBF kernel with the given gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Create an RBF kernel with gamma = 1.0 / n_features
    ///
    /// # Panics
    /// Panics if `n_features` is zero
    pub fn with_auto_gamma(n_features: usize) -> Self {
        assert!(n_features > 0, "Number of features must be positive");
        Self::new(1.0 / n_features as f64)
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for RbfKernel {
    /// Default RBF kernel with gamma = 1.0
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for RbfKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.len() != y.len() {
            return Err(SelectionError::DimensionMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        let distance_sq: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum();
        Ok((-self.gamma * distance_sq).exp())
    }

    fn name(&self) -> &'static str {
        "rbf"
    }
}
