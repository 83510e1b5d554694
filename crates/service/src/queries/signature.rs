use std::path::Path;

use routetype_protocol::SignatureHelp;

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;
use crate::queries::remap_span;

pub(crate) fn signature_help(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    position: usize,
) -> Option<SignatureHelp> {
    let augmented_position = entry.module.to_augmented(position);
    let mut help = ctx.augmented().signature_help(file, augmented_position)?;
    help.applicable_span = remap_span(&entry.module, help.applicable_span);
    Some(help)
}
