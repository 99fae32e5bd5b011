//! Core traits for the preprocessor

use crate::core::{Result, SelectionAlgorithm};

/// Capability to bind a feature selection algorithm
///
/// Concrete selectors implement this to consume the algorithm tag; the bare
/// [`KernelDependenceMaximizer`](crate::selection::KernelDependenceMaximizer)
/// deliberately does not, so binding an algorithm to it is a compile error
/// rather than a runtime one.
pub trait AlgorithmSelectable {
    /// Bind the selection algorithm this selector should run
    ///
    /// Implementors may reject tags they do not support with
    /// `SelectionError::InvalidParameter`.
    fn set_algorithm(&mut self, algorithm: SelectionAlgorithm) -> Result<()>;

    /// The currently bound algorithm, if any
    fn algorithm(&self) -> Option<SelectionAlgorithm>;
}
