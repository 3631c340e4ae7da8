//! Data Transfer Objects for form input and JSON responses.

pub mod health;
pub mod shorten;
