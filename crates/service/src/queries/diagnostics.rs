use std::path::Path;

use routetype_protocol::{Diagnostic, DiagnosticKind, TextSpan};

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;

/// Diagnostics for one route file, remapped into real coordinates.
///
/// These replace the native diagnostics entirely: the augmented view is
/// where the constraint violations surface, and reporting both views would
/// duplicate everything else.
pub(crate) fn route_diagnostics(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    kind: DiagnosticKind,
) -> Vec<Diagnostic> {
    ctx.augmented()
        .diagnostics(file, kind)
        .into_iter()
        .map(|diagnostic| remap(entry, diagnostic))
        .collect()
}

/// Diagnostics starting inside an insertion are redirected to the splice's
/// anchor — a constraint failure on `satisfies $types.serverLoader` lands
/// on the `serverLoader` identifier the user actually wrote.
fn remap(entry: &RouteModuleEntry, mut diagnostic: Diagnostic) -> Diagnostic {
    let position = entry.module.to_original(diagnostic.span.start);
    diagnostic.span = match position.anchor {
        Some(anchor) if position.inside_insertion => TextSpan::new(anchor.start, anchor.length),
        _ if position.inside_insertion => TextSpan::new(position.index, 1),
        _ => TextSpan::new(position.index, diagnostic.span.length),
    };
    diagnostic
}
