use std::path::Path;
use std::sync::Arc;

use routetype_protocol::{
    CompletionDetails, CompletionList, DefinitionResult, Diagnostic, DiagnosticKind, InlayHint,
    LanguageService, QuickInfo, SignatureHelp, TextSpan,
};

use crate::context::ProjectContext;
use crate::host::RouteModuleEntry;
use crate::queries;

/// The outward-facing language service: route queries run against the
/// augmented view with coordinates translated both ways, everything else
/// defers to the native service untouched.
pub struct DecoratedService {
    ctx: Arc<ProjectContext>,
}

impl DecoratedService {
    pub fn new(ctx: Arc<ProjectContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Arc<ProjectContext> {
        &self.ctx
    }

    /// Run `query` against the current augmentation of `file`.
    ///
    /// `None` — because the file is not a route, its augmentation is
    /// disabled, or the query itself came up empty — means the caller
    /// falls back to the native service.
    fn with_route<T>(
        &self,
        file: &Path,
        query: impl FnOnce(&RouteModuleEntry) -> Option<T>,
    ) -> Option<T> {
        if !self.ctx.routes().is_route(file) {
            return None;
        }
        let entry = self.ctx.host().get_route(file)?;
        query(&entry)
    }
}

impl LanguageService for DecoratedService {
    fn diagnostics(&self, file: &Path, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.with_route(file, |entry| {
            Some(queries::diagnostics::route_diagnostics(
                &self.ctx, entry, file, kind,
            ))
        })
        .unwrap_or_else(|| self.ctx.native().diagnostics(file, kind))
    }

    fn quick_info(&self, file: &Path, position: usize) -> Option<QuickInfo> {
        self.with_route(file, |entry| {
            queries::hover::quick_info(&self.ctx, entry, file, position)
        })
        .or_else(|| self.ctx.native().quick_info(file, position))
    }

    fn completions(&self, file: &Path, position: usize) -> Option<CompletionList> {
        self.with_route(file, |entry| {
            queries::completions::completions(&self.ctx, entry, file, position)
        })
        .or_else(|| self.ctx.native().completions(file, position))
    }

    fn completion_details(
        &self,
        file: &Path,
        position: usize,
        entry_name: &str,
    ) -> Option<CompletionDetails> {
        self.with_route(file, |entry| {
            queries::completions::completion_details(&self.ctx, entry, file, position, entry_name)
        })
        .or_else(|| self.ctx.native().completion_details(file, position, entry_name))
    }

    fn signature_help(&self, file: &Path, position: usize) -> Option<SignatureHelp> {
        self.with_route(file, |entry| {
            queries::signature::signature_help(&self.ctx, entry, file, position)
        })
        .or_else(|| self.ctx.native().signature_help(file, position))
    }

    fn definitions(&self, file: &Path, position: usize) -> Option<DefinitionResult> {
        self.with_route(file, |entry| {
            queries::definitions::definitions(&self.ctx, entry, file, position)
        })
        .or_else(|| self.ctx.native().definitions(file, position))
    }

    fn inlay_hints(&self, file: &Path, span: TextSpan) -> Vec<InlayHint> {
        self.with_route(file, |entry| {
            Some(queries::hints::inlay_hints(&self.ctx, entry, file, span))
        })
        .unwrap_or_else(|| self.ctx.native().inlay_hints(file, span))
    }
}
