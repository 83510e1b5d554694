//! # Routetype Annotate
//!
//! Synthesizes type-constraint annotations for route-module exports.
//!
//! Route modules declare conventionally named exports (`default`,
//! `serverLoader`, ...) without type annotations. The splice planner walks
//! a module's top-level statements and emits pure text insertions that wrap
//! each recognized export's value in a `satisfies` assertion against the
//! route's generated-type module:
//!
//! ```text
//! export default () => {...}
//!   -> import * as $types from "<types module>";
//!      export default (() => {...}) satisfies $types._default
//!
//! export function serverLoader() {...}
//!   -> export const serverLoader = (function serverLoader() {...})
//!        satisfies $types.serverLoader
//! ```
//!
//! Parsing uses tree-sitter; only top-level statement boundaries matter, so
//! files with local syntax errors below the top level still plan cleanly —
//! the type-analysis engine surfaces those errors from the augmented text.

mod classify;
mod contracts;
mod error;
mod parse;
mod planner;

pub use classify::{
    at_top_level, classify_position, constraint_type_offset, top_level_export_names,
    ExportPosition,
};
pub use contracts::{contract_for, contracts, ExportContract};
pub use error::{AnnotateError, Result};
pub use planner::{annotate_route, TYPES_NAMESPACE};
