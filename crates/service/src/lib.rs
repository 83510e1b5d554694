//! # Routetype Service
//!
//! The augmented language-service layer for route modules.
//!
//! ## Architecture
//!
//! ```text
//! query (real coordinates)
//!     │
//!     ├──> DecoratedService ── not a route? ──> native service
//!     │        │
//!     │        ├──> VirtualProjectHost.get_route (cache / re-plan)
//!     │        ├──> Position Mapper: to_augmented
//!     │        ├──> augmented service (engine bound to the virtual host)
//!     │        └──> Position Mapper: to_original (+ anchor redirection)
//!     │
//!     └──< result (real coordinates)
//! ```
//!
//! The virtual host overlays augmented snapshots for route files on top of
//! a delegate host and defers everything else. Cache entries are immutable
//! once constructed; the watcher only ever drops them, so an in-flight
//! query holding an entry always sees a consistent splice list and
//! augmented text.

mod context;
mod decorate;
mod error;
mod host;
mod queries;
pub mod testing;
mod typecheck;
mod watch;

pub use context::ProjectContext;
pub use decorate::DecoratedService;
pub use error::{Result, ServiceError};
pub use host::{RouteModuleEntry, VirtualProjectHost, FORCE_UPDATE_VERSION};
pub use typecheck::{check_project, TypecheckSummary};
pub use watch::RouteWatcher;
