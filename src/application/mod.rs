//! Application layer services.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`] contract and
//! expose a small API to HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
