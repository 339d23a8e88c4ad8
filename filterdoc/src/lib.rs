//! Query parameter documentation for filter trees
//!
//! Walks declared filter trees and publishes every accepted query parameter,
//! one per supported lookup, as typed descriptors or OpenAPI parameters.

pub mod api;
mod app;
pub mod core;
pub mod domain;
pub mod utils;
