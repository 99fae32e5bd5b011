//! Kernel functions for dependence computation

pub mod linear;
pub mod precomputed;
pub mod rbf;
pub mod traits;

pub use self::linear::*;
pub use self::precomputed::*;
pub use self::rbf::*;
pub use self::traits::*;
