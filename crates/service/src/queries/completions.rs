use std::path::Path;

use routetype_annotate::{at_top_level, contracts, top_level_export_names};
use routetype_protocol::{
    CompletionDetails, CompletionEntry, CompletionKind, CompletionList,
};

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;
use crate::queries::remap_span;

/// Completions at a route position: the engine's augmented-view entries
/// with replacement spans remapped, plus snippet entries for the route
/// exports the module does not define yet when the position is in
/// top-level statement context.
pub(crate) fn completions(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    position: usize,
) -> Option<CompletionList> {
    let augmented_position = entry.module.to_augmented(position);
    let augmented_text = entry.module.augmented_text();
    let offer_snippets = at_top_level(file, augmented_text, augmented_position);

    let mut list = match ctx.augmented().completions(file, augmented_position) {
        Some(list) => list,
        None if offer_snippets => CompletionList::default(),
        None => return None,
    };

    for completion in &mut list.entries {
        if let Some(span) = completion.replacement_span {
            completion.replacement_span = Some(remap_span(&entry.module, span));
        }
    }
    if let Some(span) = list.optional_replacement_span {
        list.optional_replacement_span = Some(remap_span(&entry.module, span));
    }

    if offer_snippets {
        let existing = top_level_export_names(file, augmented_text);
        for contract in contracts() {
            if existing.contains(contract.export_name) {
                continue;
            }
            list.entries.push(CompletionEntry {
                name: contract.export_name.to_string(),
                kind: CompletionKind::Snippet,
                insert_text: Some(contract.completion_template.to_string()),
                replacement_span: None,
                documentation: Some(contract.documentation.to_string()),
            });
        }
    }
    Some(list)
}

/// Details for one completion entry, with any suggested edits remapped.
///
/// Edits may touch other files; each file's changes are translated with
/// that file's own splice list (identity for non-routes).
pub(crate) fn completion_details(
    ctx: &ProjectContext,
    entry: &RouteModuleEntry,
    file: &Path,
    position: usize,
    entry_name: &str,
) -> Option<CompletionDetails> {
    let augmented_position = entry.module.to_augmented(position);
    let mut details = ctx
        .augmented()
        .completion_details(file, augmented_position, entry_name)?;

    for action in &mut details.code_actions {
        for file_changes in &mut action.changes {
            let Some(target) = ctx.host().get_route(&file_changes.file) else {
                continue;
            };
            for change in &mut file_changes.changes {
                change.span = remap_span(&target.module, change.span);
            }
        }
    }
    Some(details)
}
