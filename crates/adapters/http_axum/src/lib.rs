//! # propmock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the mocked `PATCH /repos/{owner}/{repo_name}/properties/values`
//!   endpoint
//! - Map request bodies into the domain validation rule (driving adapter)
//! - Map the outcome into the canned HTTP responses (`204` or `400` JSON)
//!
//! ## Dependency rule
//! Depends on `propmock-domain` only. Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
