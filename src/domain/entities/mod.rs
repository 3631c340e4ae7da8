//! Core domain entities.
//!
//! - [`ShortLink`] - a short code and the URL it resolves to

pub mod link;

pub use link::ShortLink;
