use std::path::Path;

use routetype_annotate::{classify_position, contract_for, ExportPosition};
use routetype_protocol::QuickInfo;

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;
use crate::queries::remap_span;

/// Hover over the augmented view, with contract documentation appended
/// when the position sits on a recognized route export.
pub(crate) fn quick_info(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    position: usize,
) -> Option<QuickInfo> {
    let augmented_position = entry.module.to_augmented(position);
    let mut info = ctx.augmented().quick_info(file, augmented_position)?;
    info.span = remap_span(&entry.module, info.span);

    let export = classify_position(file, entry.module.augmented_text(), augmented_position);
    let contract = match &export {
        ExportPosition::DefaultExport => contract_for("default"),
        ExportPosition::NamedExport(name) => contract_for(name),
        ExportPosition::NotAnExport => None,
    };
    if let Some(contract) = contract {
        info.documentation.push(contract.documentation.to_string());
    }
    Some(info)
}
