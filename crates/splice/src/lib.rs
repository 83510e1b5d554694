//! # Routetype Splice
//!
//! Text splicing and bidirectional position mapping for augmented route
//! modules.
//!
//! A route module's source is never edited in place. Instead, a list of
//! [`Splice`]s (pure insertions anchored at original-text offsets) is
//! applied to produce an *augmented* view that a type-analysis engine can
//! check, while [`AugmentedModule`] translates offsets between the two
//! views:
//!
//! ```text
//! original text ──┬── Splice[] ──> augmented text
//!                 │
//!   to_augmented: original offset ──> augmented offset
//!   to_original:  augmented offset ──> original offset (+ anchor info)
//! ```
//!
//! All offsets are UTF-8 byte offsets. Splice indices must fall on char
//! boundaries; the planner guarantees this by only splicing at syntax-node
//! boundaries.

mod editor;
mod mapper;
mod splice;

pub use editor::AugmentedModule;
pub use mapper::OriginalPosition;
pub use splice::{AnchorSpan, Splice};
