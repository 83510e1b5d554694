//! # Routetype Protocol
//!
//! The capability surface of the underlying type-analysis engine.
//!
//! The engine is a black box consumed over a synchronous request/response
//! surface: a [`LanguageEngine`] binds a [`LanguageService`] to a
//! [`ScriptHost`] that supplies file enumeration, per-file version tokens,
//! text snapshots, and existence checks. Every query result type here
//! carries positions as UTF-8 byte offsets in whatever text the bound host
//! serves — callers layering an augmented view on top are responsible for
//! translating coordinates.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A half-open byte range `[start, start + length)` in a script's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// Diagnostic severity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
    Message,
}

/// Which diagnostics pass a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Syntactic,
    Semantic,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub span: TextSpan,
    pub message: String,
    pub severity: Severity,
    /// Engine-defined diagnostic code.
    pub code: u32,
}

/// Hover information at a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickInfo {
    pub span: TextSpan,
    /// The display string for the symbol under the cursor.
    pub display: String,
    #[serde(default)]
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionKind {
    Function,
    Variable,
    Property,
    Keyword,
    Module,
    Snippet,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEntry {
    pub name: String,
    pub kind: CompletionKind,
    /// Text to insert when it differs from `name` (snippet templates).
    #[serde(default)]
    pub insert_text: Option<String>,
    /// Span the entry replaces, when the engine narrows it.
    #[serde(default)]
    pub replacement_span: Option<TextSpan>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionList {
    pub entries: Vec<CompletionEntry>,
    /// Span shared by entries without their own `replacement_span`.
    #[serde(default)]
    pub optional_replacement_span: Option<TextSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTextChanges {
    pub file: PathBuf,
    pub changes: Vec<TextChange>,
}

/// An edit suggested alongside a completion entry (e.g. adding an import).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeAction {
    pub description: String,
    pub changes: Vec<FileTextChanges>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionDetails {
    pub name: String,
    pub display: String,
    #[serde(default)]
    pub documentation: Vec<String>,
    #[serde(default)]
    pub code_actions: Vec<CodeAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureItem {
    pub label: String,
    #[serde(default)]
    pub documentation: Option<String>,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureHelp {
    pub items: Vec<SignatureItem>,
    /// Span of the call being typed.
    pub applicable_span: TextSpan,
    pub selected_item: usize,
    pub argument_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionInfo {
    pub file: PathBuf,
    pub span: TextSpan,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionResult {
    pub definitions: Vec<DefinitionInfo>,
    /// Span of the reference the query resolved.
    pub bound_span: TextSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlayHintKind {
    Type,
    Parameter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlayHint {
    pub position: usize,
    pub label: String,
    pub kind: InlayHintKind,
}

/// What a language service needs from its project: tracked files, versions,
/// text snapshots, existence, library resolution, and directory listing
/// (path completions).
pub trait ScriptHost: Send + Sync {
    fn script_file_names(&self) -> Vec<PathBuf>;

    /// Version token for a tracked file. Any change to the file's text must
    /// change its token.
    fn script_version(&self, file: &Path) -> Option<String>;

    /// Current text snapshot for a tracked file.
    fn script_text(&self, file: &Path) -> Option<Arc<str>>;

    fn file_exists(&self, file: &Path) -> bool;

    fn default_lib_file(&self) -> PathBuf;

    fn read_directory(&self, dir: &Path) -> Vec<PathBuf>;
}

/// The engine's synchronous query surface. Positions in arguments and
/// results are byte offsets into the text the bound host serves.
pub trait LanguageService: Send + Sync {
    fn diagnostics(&self, file: &Path, kind: DiagnosticKind) -> Vec<Diagnostic>;

    fn quick_info(&self, file: &Path, position: usize) -> Option<QuickInfo>;

    fn completions(&self, file: &Path, position: usize) -> Option<CompletionList>;

    fn completion_details(
        &self,
        file: &Path,
        position: usize,
        entry_name: &str,
    ) -> Option<CompletionDetails>;

    fn signature_help(&self, file: &Path, position: usize) -> Option<SignatureHelp>;

    fn definitions(&self, file: &Path, position: usize) -> Option<DefinitionResult>;

    fn inlay_hints(&self, file: &Path, span: TextSpan) -> Vec<InlayHint>;
}

/// Factory binding a language service to a host. Creating a second service
/// over an overlay host is how the augmented view is materialized.
pub trait LanguageEngine: Send + Sync {
    fn create_service(&self, host: Arc<dyn ScriptHost>) -> Arc<dyn LanguageService>;
}
