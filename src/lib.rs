//! Kernel-based dependence maximization preprocessor for feature selection
//!
//! Holds the features/labels kernel pair used by dependence measures and
//! materializes the labels kernel into a precomputed Gram matrix before the
//! measure is evaluated.

pub mod core;
pub mod data;
pub mod kernel;
pub mod persistence;
pub mod selection;

// Re-export main types for convenience
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::data::CsvFeatures;
pub use crate::kernel::{Kernel, KernelHandle, LinearKernel, PrecomputedKernel, RbfKernel};
pub use crate::persistence::SerializableGram;
pub use crate::selection::{BackwardEliminationSelector, KernelDependenceMaximizer};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
