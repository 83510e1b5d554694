//! Test doubles for the engine surface: an in-memory script host and a
//! canned-response language service. Always compiled so downstream crates
//! and integration tests can share them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use routetype_protocol::{
    CompletionDetails, CompletionList, DefinitionResult, Diagnostic, DiagnosticKind, InlayHint,
    LanguageEngine, LanguageService, QuickInfo, ScriptHost, SignatureHelp, TextSpan,
};

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone)]
struct ScriptFile {
    text: Arc<str>,
    version: u64,
}

/// In-memory delegate host. `update` bumps the version token, as a real
/// editor-backed host would.
#[derive(Default)]
pub struct MockHost {
    files: Mutex<HashMap<PathBuf, ScriptFile>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, file: impl Into<PathBuf>, text: impl Into<Arc<str>>) {
        lock(&self.files).insert(
            file.into(),
            ScriptFile {
                text: text.into(),
                version: 1,
            },
        );
    }

    pub fn update(&self, file: impl AsRef<Path>, text: impl Into<Arc<str>>) {
        let mut files = lock(&self.files);
        match files.get_mut(file.as_ref()) {
            Some(script) => {
                script.text = text.into();
                script.version += 1;
            }
            None => {
                files.insert(
                    file.as_ref().to_path_buf(),
                    ScriptFile {
                        text: text.into(),
                        version: 1,
                    },
                );
            }
        }
    }

    pub fn remove(&self, file: impl AsRef<Path>) {
        lock(&self.files).remove(file.as_ref());
    }
}

impl ScriptHost for MockHost {
    fn script_file_names(&self) -> Vec<PathBuf> {
        let mut names: Vec<PathBuf> = lock(&self.files).keys().cloned().collect();
        names.sort();
        names
    }

    fn script_version(&self, file: &Path) -> Option<String> {
        lock(&self.files).get(file).map(|f| f.version.to_string())
    }

    fn script_text(&self, file: &Path) -> Option<Arc<str>> {
        lock(&self.files).get(file).map(|f| f.text.clone())
    }

    fn file_exists(&self, file: &Path) -> bool {
        lock(&self.files).contains_key(file)
    }

    fn default_lib_file(&self) -> PathBuf {
        PathBuf::from("/lib/lib.d.ts")
    }

    fn read_directory(&self, dir: &Path) -> Vec<PathBuf> {
        let mut entries: Vec<PathBuf> = lock(&self.files)
            .keys()
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect();
        entries.sort();
        entries
    }
}

/// Canned query responses, keyed by exactly the coordinates the service
/// under test is expected to ask with. Shared between a test and the
/// [`MockService`] it hands to the code under test.
#[derive(Default)]
pub struct CannedResponses {
    diagnostics: Mutex<HashMap<(PathBuf, DiagnosticKind), Vec<Diagnostic>>>,
    quick_infos: Mutex<HashMap<(PathBuf, usize), QuickInfo>>,
    completion_lists: Mutex<HashMap<(PathBuf, usize), CompletionList>>,
    completion_details: Mutex<HashMap<(PathBuf, usize, String), CompletionDetails>>,
    signature_helps: Mutex<HashMap<(PathBuf, usize), SignatureHelp>>,
    definition_results: Mutex<HashMap<(PathBuf, usize), DefinitionResult>>,
    inlay_hints: Mutex<HashMap<PathBuf, Vec<InlayHint>>>,
    calls: Mutex<Vec<String>>,
}

impl CannedResponses {
    pub fn set_diagnostics(
        &self,
        file: impl Into<PathBuf>,
        kind: DiagnosticKind,
        diagnostics: Vec<Diagnostic>,
    ) {
        lock(&self.diagnostics).insert((file.into(), kind), diagnostics);
    }

    pub fn set_quick_info(&self, file: impl Into<PathBuf>, position: usize, info: QuickInfo) {
        lock(&self.quick_infos).insert((file.into(), position), info);
    }

    pub fn set_completions(&self, file: impl Into<PathBuf>, position: usize, list: CompletionList) {
        lock(&self.completion_lists).insert((file.into(), position), list);
    }

    pub fn set_completion_details(
        &self,
        file: impl Into<PathBuf>,
        position: usize,
        entry_name: impl Into<String>,
        details: CompletionDetails,
    ) {
        lock(&self.completion_details).insert((file.into(), position, entry_name.into()), details);
    }

    pub fn set_signature_help(&self, file: impl Into<PathBuf>, position: usize, help: SignatureHelp) {
        lock(&self.signature_helps).insert((file.into(), position), help);
    }

    pub fn set_definitions(
        &self,
        file: impl Into<PathBuf>,
        position: usize,
        result: DefinitionResult,
    ) {
        lock(&self.definition_results).insert((file.into(), position), result);
    }

    pub fn set_inlay_hints(&self, file: impl Into<PathBuf>, hints: Vec<InlayHint>) {
        lock(&self.inlay_hints).insert(file.into(), hints);
    }

    /// Every query the mock service has answered, in order, formatted as
    /// `"<query>:<file>[:<detail>]"`.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }
}

/// A language service answering only from its [`CannedResponses`].
pub struct MockService {
    canned: Arc<CannedResponses>,
}

impl MockService {
    pub fn new(canned: Arc<CannedResponses>) -> Self {
        Self { canned }
    }
}

impl LanguageService for MockService {
    fn diagnostics(&self, file: &Path, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.canned
            .record(format!("diagnostics:{}:{kind:?}", file.display()));
        lock(&self.canned.diagnostics)
            .get(&(file.to_path_buf(), kind))
            .cloned()
            .unwrap_or_default()
    }

    fn quick_info(&self, file: &Path, position: usize) -> Option<QuickInfo> {
        self.canned
            .record(format!("quick_info:{}:{position}", file.display()));
        lock(&self.canned.quick_infos)
            .get(&(file.to_path_buf(), position))
            .cloned()
    }

    fn completions(&self, file: &Path, position: usize) -> Option<CompletionList> {
        self.canned
            .record(format!("completions:{}:{position}", file.display()));
        lock(&self.canned.completion_lists)
            .get(&(file.to_path_buf(), position))
            .cloned()
    }

    fn completion_details(
        &self,
        file: &Path,
        position: usize,
        entry_name: &str,
    ) -> Option<CompletionDetails> {
        self.canned.record(format!(
            "completion_details:{}:{position}:{entry_name}",
            file.display()
        ));
        lock(&self.canned.completion_details)
            .get(&(file.to_path_buf(), position, entry_name.to_string()))
            .cloned()
    }

    fn signature_help(&self, file: &Path, position: usize) -> Option<SignatureHelp> {
        self.canned
            .record(format!("signature_help:{}:{position}", file.display()));
        lock(&self.canned.signature_helps)
            .get(&(file.to_path_buf(), position))
            .cloned()
    }

    fn definitions(&self, file: &Path, position: usize) -> Option<DefinitionResult> {
        self.canned
            .record(format!("definitions:{}:{position}", file.display()));
        lock(&self.canned.definition_results)
            .get(&(file.to_path_buf(), position))
            .cloned()
    }

    fn inlay_hints(&self, file: &Path, _span: TextSpan) -> Vec<InlayHint> {
        self.canned
            .record(format!("inlay_hints:{}", file.display()));
        lock(&self.canned.inlay_hints)
            .get(&file.to_path_buf())
            .cloned()
            .unwrap_or_default()
    }
}

/// Engine factory producing [`MockService`]s over shared canned responses.
/// The bound host is ignored; tests key their responses by augmented
/// coordinates directly.
pub struct MockEngine {
    canned: Arc<CannedResponses>,
}

impl MockEngine {
    pub fn new(canned: Arc<CannedResponses>) -> Self {
        Self { canned }
    }
}

impl LanguageEngine for MockEngine {
    fn create_service(&self, _host: Arc<dyn ScriptHost>) -> Arc<dyn LanguageService> {
        Arc::new(MockService::new(self.canned.clone()))
    }
}
