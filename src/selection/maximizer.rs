//! Kernel pair holder and precompute step for dependence maximization
//!
//! Dependence maximization scores features by a statistical dependence measure
//! computed between two kernels, one over the data features and one over the
//! labels. This type holds that kernel pair and materializes the labels kernel
//! before the measure is evaluated, since the label Gram matrix is fixed for
//! the whole selection run.

use crate::core::{FeatureMatrix, Result, SelectionError};
use crate::kernel::{Kernel, KernelHandle, PrecomputedKernel};
use log::{debug, info};
use std::sync::Arc;

/// Holder for the features/labels kernel pair
///
/// Both kernel slots are unset at construction and must be configured before
/// any computation step. The holder shares kernels with the caller rather than
/// owning them; replacing a slot never invalidates the caller's handle.
///
/// Not an algorithm by itself: binding a selection algorithm is the job of
/// concrete selector types implementing
/// [`AlgorithmSelectable`](crate::core::AlgorithmSelectable).
#[derive(Default)]
pub struct KernelDependenceMaximizer {
    kernel_features: Option<KernelHandle>,
    kernel_labels: Option<KernelHandle>,
    label_features: Option<FeatureMatrix>,
}

impl KernelDependenceMaximizer {
    /// Create a holder with both kernel slots unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kernel for the data features
    pub fn set_features_kernel(&mut self, kernel: KernelHandle) {
        self.kernel_features = Some(kernel);
    }

    /// The kernel for the data features, if set
    pub fn features_kernel(&self) -> Option<KernelHandle> {
        self.kernel_features.clone()
    }

    /// Set the kernel for the labels
    pub fn set_labels_kernel(&mut self, kernel: KernelHandle) {
        self.kernel_labels = Some(kernel);
    }

    /// The kernel for the labels, if set
    pub fn labels_kernel(&self) -> Option<KernelHandle> {
        self.kernel_labels.clone()
    }

    /// Set the label features the labels kernel is evaluated over
    pub fn set_labels(&mut self, labels: FeatureMatrix) {
        self.label_features = Some(labels);
    }

    /// The configured label features, if set
    pub fn labels(&self) -> Option<&FeatureMatrix> {
        self.label_features.as_ref()
    }

    /// Materialize the labels kernel
    ///
    /// Evaluates the current labels kernel fully over the configured label
    /// features and replaces the slot with a [`PrecomputedKernel`] wrapping
    /// the resulting matrix. The transition is one-way; calling this again
    /// once the slot is already materialized is a no-op.
    ///
    /// # Errors
    /// - `LabelsKernelNotSet` if no labels kernel has been configured
    /// - `LabelFeaturesNotSet` if no label features have been configured
    pub fn precompute(&mut self) -> Result<()> {
        let kernel = self
            .kernel_labels
            .as_ref()
            .ok_or(SelectionError::LabelsKernelNotSet)?;

        if kernel.is_precomputed() {
            debug!("labels kernel already materialized, skipping precompute");
            return Ok(());
        }

        let labels = self
            .label_features
            .as_ref()
            .ok_or(SelectionError::LabelFeaturesNotSet)?;

        let materialized = PrecomputedKernel::from_kernel(kernel.as_ref(), labels)?;
        info!(
            "precomputed {} labels kernel over {} observations",
            kernel.name(),
            labels.len()
        );
        self.kernel_labels = Some(Arc::new(materialized));
        Ok(())
    }
}
