//! Backward elimination selector
//!
//! Concrete selector configuration for backward elimination, the strategy
//! used by BAHSIC-style dependence maximization. Only holds the configuration
//! contract; the search loop itself runs downstream of this crate.

use crate::core::{AlgorithmSelectable, Result, SelectionAlgorithm, SelectionError};
use crate::selection::KernelDependenceMaximizer;

/// Selector that eliminates the least dependent features one by one
///
/// Wraps a [`KernelDependenceMaximizer`] and binds the algorithm tag. Only
/// [`SelectionAlgorithm::BackwardElimination`] is accepted; forward selection
/// has no meaning for this selector.
pub struct BackwardEliminationSelector {
    maximizer: KernelDependenceMaximizer,
    algorithm: Option<SelectionAlgorithm>,
}

impl Default for BackwardEliminationSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl BackwardEliminationSelector {
    /// Create a selector with backward elimination already bound
    pub fn new() -> Self {
        Self {
            maximizer: KernelDependenceMaximizer::new(),
            algorithm: Some(SelectionAlgorithm::BackwardElimination),
        }
    }

    /// Shared access to the kernel pair holder
    pub fn maximizer(&self) -> &KernelDependenceMaximizer {
        &self.maximizer
    }

    /// Mutable access to the kernel pair holder
    pub fn maximizer_mut(&mut self) -> &mut KernelDependenceMaximizer {
        &mut self.maximizer
    }

    /// Run the base precompute step on the embedded holder
    ///
    /// Selectors layering extra precomputation override their own entry point
    /// and still call this for the labels kernel materialization.
    pub fn precompute(&mut self) -> Result<()> {
        self.maximizer.precompute()
    }
}

impl AlgorithmSelectable for BackwardEliminationSelector {
    fn set_algorithm(&mut self, algorithm: SelectionAlgorithm) -> Result<()> {
        if algorithm != SelectionAlgorithm::BackwardElimination {
            return Err(SelectionError::InvalidParameter(format!(
                "backward elimination selector cannot run {}",
                algorithm
            )));
        }
        self.algorithm = Some(algorithm);
        Ok(())
    }

    fn algorithm(&self) -> Option<SelectionAlgorithm> {
        self.algorithm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureMatrix;
    use crate::kernel::{Kernel, LinearKernel};
    use std::sync::Arc;

    #[test]
    fn test_backward_bound_by_default() {
        let selector = BackwardEliminationSelector::new();
        assert_eq!(
            selector.algorithm(),
            Some(SelectionAlgorithm::BackwardElimination)
        );
    }

    #[test]
    fn test_rebinding_backward_is_accepted() {
        let mut selector = BackwardEliminationSelector::new();
        assert!(selector
            .set_algorithm(SelectionAlgorithm::BackwardElimination)
            .is_ok());
    }

    #[test]
    fn test_forward_selection_is_rejected() {
        let mut selector = BackwardEliminationSelector::new();
        let err = selector
            .set_algorithm(SelectionAlgorithm::ForwardSelection)
            .unwrap_err();
        assert!(matches!(err, SelectionError::InvalidParameter(_)));
        // Binding stays intact after the rejection
        assert_eq!(
            selector.algorithm(),
            Some(SelectionAlgorithm::BackwardElimination)
        );
    }

    #[test]
    fn test_precompute_delegates_to_holder() {
        let mut selector = BackwardEliminationSelector::new();
        selector
            .maximizer_mut()
            .set_labels_kernel(Arc::new(LinearKernel::new()));
        selector
            .maximizer_mut()
            .set_labels(FeatureMatrix::from_column(vec![1.0, -1.0]).unwrap());

        selector.precompute().unwrap();
        assert!(selector
            .maximizer()
            .labels_kernel()
            .unwrap()
            .is_precomputed());
    }
}
