//! Linear kernel implementation

use crate::core::{Result, SelectionError};
use crate::kernel::Kernel;

/// Linear kernel: K(x, y) = x^T y
///
/// The simplest Mercer kernel. A common choice for label features, where the
/// Gram matrix reduces to the label outer product.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl LinearKernel {
    /// Create a new linear kernel
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for LinearKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.len() != y.len() {
            return Err(SelectionError::DimensionMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
