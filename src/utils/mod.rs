//! Helper functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation

pub mod code_generator;
