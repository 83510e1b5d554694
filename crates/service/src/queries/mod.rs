//! Per-query translation between real and augmented coordinates.
//!
//! Every module here follows the same shape: map the request position
//! forward through the route's splice list, ask the augmented service,
//! map result spans back. Results landing inside an insertion use the
//! splice's anchor when it has one, else collapse to a single byte at the
//! insertion point.

pub(crate) mod completions;
pub(crate) mod definitions;
pub(crate) mod diagnostics;
pub(crate) mod hints;
pub(crate) mod hover;
pub(crate) mod signature;

use routetype_protocol::TextSpan;
use routetype_splice::AugmentedModule;

/// Map a result span back into original coordinates.
pub(crate) fn remap_span(module: &AugmentedModule, span: TextSpan) -> TextSpan {
    let position = module.to_original(span.start);
    if position.inside_insertion {
        TextSpan::new(position.index, 1)
    } else {
        TextSpan::new(position.index, span.length)
    }
}
