//! Materialized kernel backed by a precomputed Gram matrix
//!
//! Replaces a live kernel once its matrix over a fixed feature set has been
//! evaluated, so downstream statistic computation reads matrix entries instead
//! of re-evaluating the kernel function.

use crate::core::{FeatureMatrix, GramMatrix, Result, SelectionError};
use crate::kernel::Kernel;
use log::debug;

/// Kernel backed by a fixed, precomputed matrix
///
/// Has no closed form: pointwise `compute` is unsupported, and `gram` only
/// answers for feature sets of the size the matrix was evaluated over.
#[derive(Debug, Clone)]
pub struct PrecomputedKernel {
    matrix: GramMatrix,
    source: &'static str,
}

impl PrecomputedKernel {
    /// Evaluate `kernel` fully over `features` and wrap the resulting matrix
    pub fn from_kernel(kernel: &dyn Kernel, features: &FeatureMatrix) -> Result<Self> {
        let matrix = kernel.gram(features)?;
        debug!(
            "materialized {} kernel over {} observations",
            kernel.name(),
            features.len()
        );
        Ok(Self {
            matrix,
            source: kernel.name(),
        })
    }

    /// Wrap an existing Gram matrix, e.g. one loaded from disk
    pub fn from_matrix(matrix: GramMatrix) -> Self {
        Self {
            matrix,
            source: "custom",
        }
    }

    /// The backing Gram matrix
    pub fn matrix(&self) -> &GramMatrix {
        &self.matrix
    }

    /// Name of the kernel the matrix was evaluated from
    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl Kernel for PrecomputedKernel {
    fn compute(&self, _x: &[f64], _y: &[f64]) -> Result<f64> {
        Err(SelectionError::UnsupportedOperation(
            "precomputed kernel has no closed form to evaluate pointwise".to_string(),
        ))
    }

    fn gram(&self, features: &FeatureMatrix) -> Result<GramMatrix> {
        if features.len() != self.matrix.size() {
            return Err(SelectionError::DimensionMismatch {
                expected: self.matrix.size(),
                actual: features.len(),
            });
        }
        Ok(self.matrix.clone())
    }

    fn is_precomputed(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "precomputed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::LinearKernel;

    fn labels() -> FeatureMatrix {
        FeatureMatrix::from_column(vec![1.0, -1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_from_kernel_matches_live_evaluation() {
        let live = LinearKernel::new();
        let features = labels();

        let precomputed = PrecomputedKernel::from_kernel(&live, &features).unwrap();
        let expected = live.gram(&features).unwrap();

        assert_eq!(precomputed.matrix(), &expected);
        assert_eq!(precomputed.source(), "linear");
    }

    #[test]
    fn test_gram_returns_stored_matrix() {
        let features = labels();
        let precomputed =
            PrecomputedKernel::from_kernel(&LinearKernel::new(), &features).unwrap();

        let again = precomputed.gram(&features).unwrap();
        assert_eq!(&again, precomputed.matrix());
    }

    #[test]
    fn test_gram_rejects_wrong_size() {
        let precomputed =
            PrecomputedKernel::from_kernel(&LinearKernel::new(), &labels()).unwrap();
        let other = FeatureMatrix::from_column(vec![1.0, 2.0]).unwrap();

        assert!(matches!(
            precomputed.gram(&other),
            Err(SelectionError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_compute_is_unsupported() {
        let precomputed =
            PrecomputedKernel::from_kernel(&LinearKernel::new(), &labels()).unwrap();
        assert!(matches!(
            precomputed.compute(&[1.0], &[1.0]),
            Err(SelectionError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_is_precomputed() {
        let precomputed =
            PrecomputedKernel::from_kernel(&LinearKernel::new(), &labels()).unwrap();
        assert!(precomputed.is_precomputed());
        assert_eq!(precomputed.name(), "precomputed");
    }

    #[test]
    fn test_from_matrix() {
        let matrix = GramMatrix::new(2, vec![1.0, 0.5, 0.5, 1.0]).unwrap();
        let precomputed = PrecomputedKernel::from_matrix(matrix.clone());
        assert_eq!(precomputed.matrix(), &matrix);
        assert_eq!(precomputed.source(), "custom");
    }
}
