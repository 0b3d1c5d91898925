//! # propmock-domain
//!
//! Pure domain model for the propmock repository-properties mock.
//!
//! ## Responsibilities
//! - Identify the targeted repository (**`RepositoryRef`**: owner + name)
//! - Define the accepted shape of a **property update** payload and the rule
//!   deciding whether a body is acceptable
//! - Typed error conventions for the one rejection the mock produces
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.

pub mod error;
pub mod properties;
pub mod repository;
