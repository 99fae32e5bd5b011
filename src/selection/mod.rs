//! Dependence maximization configuration layer

pub mod backward;
pub mod maximizer;

pub use self::backward::*;
pub use self::maximizer::*;
