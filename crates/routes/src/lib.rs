//! # Routetype Routes
//!
//! Route manifest loading and the registry that decides which files are
//! subject to type augmentation.
//!
//! The manifest is an external collaborator: a JSON array mapping URL path
//! patterns to app-relative module files. This crate consumes it read-only,
//! keys routes by absolute file path, and derives the path of the
//! generated-type module each route imports.

mod config;
mod error;
mod manifest;
mod registry;

pub use config::ProjectConfig;
pub use error::{Result, RouteError};
pub use manifest::{ManifestRoute, RouteManifest};
pub use registry::{Route, RouteRegistry};
