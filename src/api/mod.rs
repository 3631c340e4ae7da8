//! HTTP layer translating requests into link service calls.
//!
//! # Modules
//!
//! - [`dto`] - Form input and JSON response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`templates`] - Askama HTML pages

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod templates;
