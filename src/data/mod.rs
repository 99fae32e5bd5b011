//! Feature loading from external formats

pub mod csv;

pub use self::csv::*;
