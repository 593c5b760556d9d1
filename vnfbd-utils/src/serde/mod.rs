//! Utility module for serde of loosely-typed input data.

pub mod scalar;

pub use scalar::Scalar;
