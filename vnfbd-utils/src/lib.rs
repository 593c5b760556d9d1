//! Utility library for the VNF-BD generator

pub mod fs;
pub mod serde;
