use std::path::Path;

use routetype_protocol::{InlayHint, TextSpan};

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;

/// Inlay hints for a real-coordinate span: both span endpoints are mapped
/// forward, hint positions come back through the reverse mapping. Hints
/// anchored inside insertions (the synthetic import, the `satisfies`
/// clauses) surface at the insertion point.
pub(crate) fn inlay_hints(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    span: TextSpan,
) -> Vec<InlayHint> {
    let start = entry.module.to_augmented(span.start);
    let end = entry.module.to_augmented(span.end());
    let augmented_span = TextSpan::new(start, end.saturating_sub(start));

    ctx.augmented()
        .inlay_hints(file, augmented_span)
        .into_iter()
        .map(|mut hint| {
            hint.position = entry.module.to_original(hint.position).index;
            hint
        })
        .collect()
}
