//! Gram matrix serialization and persistence
//!
//! Saves precomputed kernel matrices to JSON so a materialized labels kernel
//! can be reused across runs instead of being re-evaluated each time.

use crate::core::{GramMatrix, Result, SelectionError};
use crate::kernel::PrecomputedKernel;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable precomputed Gram matrix with metadata
#[derive(Serialize, Deserialize)]
pub struct SerializableGram {
    /// The kernel matrix itself
    pub matrix: GramMatrix,
    /// Name of the kernel the matrix was evaluated from
    pub kernel_type: String,
    /// Metadata for tracking and validation
    pub metadata: GramMetadata,
}

/// Metadata attached to a saved Gram matrix
#[derive(Serialize, Deserialize)]
pub struct GramMetadata {
    /// Library version used to create the file
    pub library_version: String,
    /// Number of observations per side
    pub size: usize,
    /// Creation timestamp
    pub created_at: String,
}

impl SerializableGram {
    /// Wrap a precomputed kernel for saving
    pub fn from_precomputed(kernel: &PrecomputedKernel) -> Self {
        let matrix = kernel.matrix().clone();
        let size = matrix.size();
        Self {
            matrix,
            kernel_type: kernel.source().to_string(),
            metadata: GramMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                size,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(SelectionError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| SelectionError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SelectionError::IoError)?;
        let reader = BufReader::new(file);
        let gram: SerializableGram = serde_json::from_reader(reader)
            .map_err(|e| SelectionError::SerializationError(e.to_string()))?;
        if gram.metadata.size != gram.matrix.size() {
            return Err(SelectionError::SerializationError(format!(
                "metadata size {} does not match matrix size {}",
                gram.metadata.size,
                gram.matrix.size()
            )));
        }
        let n = gram.matrix.size();
        let expected = n.checked_mul(n).ok_or_else(|| {
            SelectionError::SerializationError(format!("matrix size {} is out of range", n))
        })?;
        if gram.matrix.values().len() != expected {
            return Err(SelectionError::SerializationError(format!(
                "matrix claims size {} but holds {} values",
                n,
                gram.matrix.values().len()
            )));
        }
        Ok(gram)
    }

    /// Convert back into a precomputed kernel
    pub fn into_precomputed(self) -> PrecomputedKernel {
        PrecomputedKernel::from_matrix(self.matrix)
    }

    /// Print a summary to stdout
    pub fn print_summary(&self) {
        println!("=== Precomputed Gram Matrix ===");
        println!("Kernel Type: {}", self.kernel_type);
        println!("Size: {0} x {0}", self.matrix.size());
        println!("Trace: {:.6}", self.matrix.trace());
        println!("Asymmetry: {:.2e}", self.matrix.asymmetry());
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created At: {}", self.metadata.created_at);
    }
}
