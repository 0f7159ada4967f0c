//! Validators, one module per artifact family.

pub mod artifacts;
pub mod fixtures;
pub mod properties;
pub mod vocab;
