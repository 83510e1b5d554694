use std::path::Path;

use routetype_annotate::{classify_position, constraint_type_offset, ExportPosition};
use routetype_protocol::DefinitionResult;

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;
use crate::queries::remap_span;

/// Go-to-definition through the augmented view.
///
/// Definition targets can land in other route files, so each one is
/// remapped with its own file's splice list. When the query position sits
/// on a route export, the export's `satisfies` constraint type is resolved
/// too and its targets appended, linking the export to its generated type.
pub(crate) fn definitions(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    position: usize,
) -> Option<DefinitionResult> {
    let augmented_position = entry.module.to_augmented(position);
    let constraint = constraint_definitions(ctx, entry, file, augmented_position);

    let mut result = match ctx.augmented().definitions(file, augmented_position) {
        Some(result) => result,
        None => return constraint,
    };
    remap_targets(ctx, &mut result);
    result.bound_span = remap_span(&entry.module, result.bound_span);
    if let Some(constraint) = constraint {
        result.definitions.extend(constraint.definitions);
    }
    Some(result)
}

fn constraint_definitions(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    augmented_position: usize,
) -> Option<DefinitionResult> {
    let augmented_text = entry.module.augmented_text();
    match classify_position(file, augmented_text, augmented_position) {
        ExportPosition::NotAnExport => return None,
        ExportPosition::DefaultExport | ExportPosition::NamedExport(_) => {}
    }
    let type_offset = constraint_type_offset(file, augmented_text, augmented_position)?;
    let mut result = ctx.augmented().definitions(file, type_offset)?;
    remap_targets(ctx, &mut result);
    result.bound_span = remap_span(&entry.module, result.bound_span);
    Some(result)
}

fn remap_targets(ctx: &ProjectContext, result: &mut DefinitionResult) {
    for definition in &mut result.definitions {
        if let Some(target) = ctx.host().get_route(&definition.file) {
            definition.span = remap_span(&target.module, definition.span);
        }
    }
}
