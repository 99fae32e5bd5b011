//! Kernel trait definition

use crate::core::{FeatureMatrix, GramMatrix, Result};
use std::sync::Arc;

/// Shared handle to a kernel
///
/// The preprocessor borrows kernels rather than owning them; callers keep
/// their own handle and the preprocessor clones the `Arc`.
pub type KernelHandle = Arc<dyn Kernel>;

/// Kernel function trait
///
/// A kernel K(x, y) is a pairwise similarity function over feature vectors.
/// Live kernels evaluate pointwise; materialized kernels are backed by a
/// fixed matrix and only answer Gram queries.
pub trait Kernel: Send + Sync {
    /// Compute the kernel value K(x, y)
    ///
    /// Fails with `UnsupportedOperation` for materialized kernels, which have
    /// no closed form to evaluate.
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64>;

    /// Evaluate the full Gram matrix over a feature set
    ///
    /// The default implementation evaluates `compute` pairwise, filling the
    /// lower triangle by symmetry.
    fn gram(&self, features: &FeatureMatrix) -> Result<GramMatrix> {
        let n = features.len();
        let mut matrix = GramMatrix::zeros(n);
        for i in 0..n {
            for j in i..n {
                let value = self.compute(features.row(i), features.row(j))?;
                matrix.set(i, j, value);
                matrix.set(j, i, value);
            }
        }
        Ok(matrix)
    }

    /// Whether this kernel is backed by a precomputed matrix
    fn is_precomputed(&self) -> bool {
        false
    }

    /// Short identifier for logging and persistence metadata
    fn name(&self) -> &'static str;
}
