use log::info;

use routetype_protocol::{Diagnostic, DiagnosticKind, LanguageService, ScriptHost, Severity};

/// Outcome of a whole-project check.
#[derive(Debug, Default)]
pub struct TypecheckSummary {
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl TypecheckSummary {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// Run syntactic and semantic diagnostics over every tracked source file.
///
/// `service` is normally a [`crate::DecoratedService`], so route modules
/// are checked in their augmented form and the constraint violations come
/// back in real coordinates. Declaration files are skipped; they have no
/// bodies to check and big projects track thousands of them.
pub fn check_project(service: &dyn LanguageService, host: &dyn ScriptHost) -> TypecheckSummary {
    let mut summary = TypecheckSummary::default();
    let files = host.script_file_names();
    for file in &files {
        if file.to_string_lossy().ends_with(".d.ts") {
            continue;
        }
        summary
            .diagnostics
            .extend(service.diagnostics(file, DiagnosticKind::Syntactic));
        summary
            .diagnostics
            .extend(service.diagnostics(file, DiagnosticKind::Semantic));
    }
    summary.errors = count(&summary.diagnostics, Severity::Error);
    summary.warnings = count(&summary.diagnostics, Severity::Warning);
    info!(
        "checked {} files: {} errors, {} warnings",
        files.len(),
        summary.errors,
        summary.warnings
    );
    summary
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
