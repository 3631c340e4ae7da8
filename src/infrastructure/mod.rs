//! Infrastructure layer implementing the domain storage contract.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL link stores

pub mod persistence;
