//! Document adapters
//!
//! Turns generated query parameter descriptors into the documents the
//! command line prints: descriptor JSON, plain text, or OpenAPI.

pub mod openapi;
pub mod render;

pub use openapi::{build_document, registry_document, to_parameter};
pub use render::{render_fields, render_lookups};
