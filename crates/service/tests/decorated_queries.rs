//! End-to-end tests of the decorated query surface over a mock engine.
//!
//! Canned responses are keyed by augmented coordinates, computed with the
//! same planner the virtual host uses, so these tests pin the exact
//! forward/backward translation the decorator performs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use routetype_annotate::{annotate_route, constraint_type_offset};
use routetype_protocol::{
    CodeAction, CompletionDetails, CompletionEntry, CompletionKind, CompletionList,
    DefinitionInfo, DefinitionResult, Diagnostic, DiagnosticKind, FileTextChanges,
    InlayHint, InlayHintKind, LanguageService, QuickInfo, ScriptHost, Severity, SignatureHelp,
    SignatureItem, TextChange, TextSpan,
};
use routetype_routes::{ProjectConfig, RouteManifest, RouteRegistry};
use routetype_service::testing::{CannedResponses, MockEngine, MockHost, MockService};
use routetype_service::{check_project, DecoratedService, ProjectContext};
use routetype_splice::AugmentedModule;

const HOME: &str = "/proj/app/home.tsx";
const PRODUCT: &str = "/proj/app/routes/product.tsx";
const UTIL: &str = "/proj/app/util.ts";

struct Fixture {
    host: Arc<MockHost>,
    native: Arc<CannedResponses>,
    engine: Arc<CannedResponses>,
    service: DecoratedService,
}

fn fixture(files: &[(&str, &str)]) -> Fixture {
    let _ = env_logger::builder().is_test(true).try_init();
    let host = Arc::new(MockHost::new());
    for (path, text) in files {
        host.insert(*path, *text);
    }
    let manifest = RouteManifest::from_json(
        r#"[
            { "path": "/", "file": "home.tsx" },
            { "path": "products/:id", "file": "routes/product.tsx" }
        ]"#,
    )
    .unwrap();
    let routes = Arc::new(RouteRegistry::from_manifest(&config(), &manifest));
    let native = Arc::new(CannedResponses::default());
    let engine = Arc::new(CannedResponses::default());
    let native_service: Arc<dyn LanguageService> = Arc::new(MockService::new(native.clone()));
    let mock_engine = MockEngine::new(engine.clone());
    let ctx = ProjectContext::new(
        &mock_engine,
        host.clone() as Arc<dyn ScriptHost>,
        native_service,
        config(),
        routes,
    );
    Fixture {
        host,
        native,
        engine,
        service: DecoratedService::new(ctx),
    }
}

fn config() -> ProjectConfig {
    ProjectConfig::new("/proj/app", "/proj/.routetype/types")
}

/// The same augmentation the virtual host will compute for `file`.
fn augmentation(file: &str, text: &str) -> AugmentedModule {
    let path = Path::new(file);
    annotate_route(path, text, &config().types_module_specifier(path)).unwrap()
}

fn diagnostic(file: &str, start: usize, length: usize, severity: Severity) -> Diagnostic {
    Diagnostic {
        file: PathBuf::from(file),
        span: TextSpan::new(start, length),
        message: "does not satisfy the expected type".to_string(),
        severity,
        code: 1360,
    }
}

#[test]
fn constraint_diagnostics_redirect_to_what_the_user_wrote() {
    let text = "export default function(a, b) { return a + b }\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let satisfies_at = module
        .augmented_text()
        .find("satisfies $types._default")
        .unwrap();
    fx.engine.set_diagnostics(
        HOME,
        DiagnosticKind::Semantic,
        vec![diagnostic(HOME, satisfies_at, "satisfies".len(), Severity::Error)],
    );

    let diagnostics = fx
        .service
        .diagnostics(Path::new(HOME), DiagnosticKind::Semantic);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].span,
        TextSpan::new(text.find("default").unwrap(), "default".len())
    );
}

#[test]
fn diagnostics_outside_insertions_shift_back_and_keep_their_length() {
    let text = "export default function(a, b) { return a + b }\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let body_at = text.find("a + b").unwrap();
    let augmented_body_at = module.to_augmented(body_at);
    fx.engine.set_diagnostics(
        HOME,
        DiagnosticKind::Semantic,
        vec![diagnostic(HOME, augmented_body_at, 5, Severity::Error)],
    );

    let diagnostics = fx
        .service
        .diagnostics(Path::new(HOME), DiagnosticKind::Semantic);
    assert_eq!(diagnostics[0].span, TextSpan::new(body_at, 5));
}

#[test]
fn unplannable_route_falls_back_to_native_without_affecting_siblings() {
    let bad = "export = thing\n";
    let good = "export default () => null\n";
    let fx = fixture(&[(HOME, bad), (PRODUCT, good)]);

    fx.native.set_diagnostics(
        HOME,
        DiagnosticKind::Semantic,
        vec![diagnostic(HOME, 0, 6, Severity::Error)],
    );
    let module = augmentation(PRODUCT, good);
    let satisfies_at = module.augmented_text().find("satisfies").unwrap();
    fx.engine.set_diagnostics(
        PRODUCT,
        DiagnosticKind::Semantic,
        vec![diagnostic(PRODUCT, satisfies_at, "satisfies".len(), Severity::Error)],
    );

    // the export= file gets native diagnostics, untranslated
    let bad_diagnostics = fx
        .service
        .diagnostics(Path::new(HOME), DiagnosticKind::Semantic);
    assert_eq!(bad_diagnostics[0].span, TextSpan::new(0, 6));

    // its sibling stays augmented
    let good_diagnostics = fx
        .service
        .diagnostics(Path::new(PRODUCT), DiagnosticKind::Semantic);
    assert_eq!(
        good_diagnostics[0].span,
        TextSpan::new(good.find("default").unwrap(), "default".len())
    );
}

#[test]
fn non_route_queries_pass_through_untouched() {
    let fx = fixture(&[(UTIL, "export const n = 1\n")]);
    fx.native.set_quick_info(
        UTIL,
        13,
        QuickInfo {
            span: TextSpan::new(13, 1),
            display: "const n: number".to_string(),
            documentation: vec![],
        },
    );

    let info = fx.service.quick_info(Path::new(UTIL), 13).unwrap();
    assert_eq!(info.span, TextSpan::new(13, 1));
    assert!(fx.engine.calls().is_empty());
}

#[test]
fn hover_on_a_route_export_appends_contract_documentation() {
    let text = "export default () => null\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let position = text.find("=>").unwrap();
    let augmented_position = module.to_augmented(position);
    fx.engine.set_quick_info(
        HOME,
        augmented_position,
        QuickInfo {
            span: TextSpan::new(augmented_position, 2),
            display: "() => null".to_string(),
            documentation: vec![],
        },
    );

    let info = fx.service.quick_info(Path::new(HOME), position).unwrap();
    assert_eq!(info.span, TextSpan::new(position, 2));
    assert!(info
        .documentation
        .iter()
        .any(|doc| doc.contains("`default` export")));
}

#[test]
fn completions_remap_spans_and_offer_missing_export_snippets() {
    let text = "export function serverLoader() { return 1 }\nexp\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let position = text.rfind("exp").unwrap() + 2;
    let augmented_position = module.to_augmented(position);
    fx.engine.set_completions(
        HOME,
        augmented_position,
        CompletionList {
            entries: vec![CompletionEntry {
                name: "exports".to_string(),
                kind: CompletionKind::Variable,
                insert_text: None,
                replacement_span: Some(TextSpan::new(augmented_position - 2, 3)),
                documentation: None,
            }],
            optional_replacement_span: Some(TextSpan::new(augmented_position - 2, 3)),
        },
    );

    let list = fx.service.completions(Path::new(HOME), position).unwrap();
    assert_eq!(
        list.optional_replacement_span,
        Some(TextSpan::new(position - 2, 3))
    );
    assert_eq!(
        list.entries[0].replacement_span,
        Some(TextSpan::new(position - 2, 3))
    );

    let snippet_names: Vec<&str> = list
        .entries
        .iter()
        .filter(|entry| entry.kind == CompletionKind::Snippet)
        .map(|entry| entry.name.as_str())
        .collect();
    assert!(snippet_names.contains(&"default"));
    assert!(snippet_names.contains(&"clientLoader"));
    // already exported, no snippet
    assert!(!snippet_names.contains(&"serverLoader"));
}

#[test]
fn top_level_snippets_appear_even_when_the_engine_has_nothing() {
    let text = "exp\n";
    let fx = fixture(&[(HOME, text)]);

    let position = 2;
    let list = fx.service.completions(Path::new(HOME), position).unwrap();
    assert!(!list.entries.is_empty());
    assert!(list
        .entries
        .iter()
        .all(|entry| entry.kind == CompletionKind::Snippet));
    assert!(list.entries.iter().any(|entry| entry.name == "default"));
}

#[test]
fn completion_details_remap_code_action_edits_per_file() {
    let text = "export default () => null\nexp\n";
    let util_text = "export const n = 1\n";
    let fx = fixture(&[(HOME, text), (UTIL, util_text)]);

    let module = augmentation(HOME, text);
    let position = text.rfind("exp").unwrap() + 2;
    let augmented_position = module.to_augmented(position);
    let augmented_insert_at = module.to_augmented(text.find("exp").unwrap());
    fx.engine.set_completion_details(
        HOME,
        augmented_position,
        "serverLoader",
        CompletionDetails {
            name: "serverLoader".to_string(),
            display: "function serverLoader(): number".to_string(),
            documentation: vec![],
            code_actions: vec![CodeAction {
                description: "Add import".to_string(),
                changes: vec![
                    FileTextChanges {
                        file: PathBuf::from(HOME),
                        changes: vec![TextChange {
                            span: TextSpan::new(augmented_insert_at, 0),
                            new_text: "import { x } from \"y\";\n".to_string(),
                        }],
                    },
                    FileTextChanges {
                        file: PathBuf::from(UTIL),
                        changes: vec![TextChange {
                            span: TextSpan::new(7, 0),
                            new_text: "x".to_string(),
                        }],
                    },
                ],
            }],
        },
    );

    let details = fx
        .service
        .completion_details(Path::new(HOME), position, "serverLoader")
        .unwrap();
    let changes = &details.code_actions[0].changes;
    assert_eq!(
        changes[0].changes[0].span,
        TextSpan::new(text.find("exp").unwrap(), 0)
    );
    // non-route file untouched
    assert_eq!(changes[1].changes[0].span, TextSpan::new(7, 0));
}

#[test]
fn signature_help_remaps_the_applicable_span() {
    let text = "export default () => compute(1, \n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let position = text.find("1, ").unwrap() + 3;
    let augmented_position = module.to_augmented(position);
    let call_at = text.find("compute").unwrap();
    fx.engine.set_signature_help(
        HOME,
        augmented_position,
        SignatureHelp {
            items: vec![SignatureItem {
                label: "compute(a: number, b: number): number".to_string(),
                documentation: None,
                parameters: vec!["a: number".to_string(), "b: number".to_string()],
            }],
            applicable_span: TextSpan::new(module.to_augmented(call_at), 12),
            selected_item: 0,
            argument_index: 1,
        },
    );

    let help = fx.service.signature_help(Path::new(HOME), position).unwrap();
    assert_eq!(help.applicable_span, TextSpan::new(call_at, 12));
    assert_eq!(help.argument_index, 1);
}

#[test]
fn definitions_in_other_routes_remap_with_that_routes_splices() {
    let home_text = "export default () => product()\n";
    let product_text = "export function serverLoader() { return 1 }\n";
    let fx = fixture(&[(HOME, home_text), (PRODUCT, product_text)]);

    let home_module = augmentation(HOME, home_text);
    let product_module = augmentation(PRODUCT, product_text);
    let position = home_text.find("product").unwrap();
    let augmented_position = home_module.to_augmented(position);
    let name_at = product_text.find("serverLoader").unwrap();
    fx.engine.set_definitions(
        HOME,
        augmented_position,
        DefinitionResult {
            definitions: vec![DefinitionInfo {
                file: PathBuf::from(PRODUCT),
                span: TextSpan::new(product_module.to_augmented(name_at), "serverLoader".len()),
                name: "serverLoader".to_string(),
            }],
            bound_span: TextSpan::new(augmented_position, "product".len()),
        },
    );

    let result = fx.service.definitions(Path::new(HOME), position).unwrap();
    assert_eq!(
        result.definitions[0].span,
        TextSpan::new(name_at, "serverLoader".len())
    );
    assert_eq!(result.bound_span, TextSpan::new(position, "product".len()));
}

#[test]
fn export_positions_also_resolve_their_constraint_type() {
    let text = "export default () => null\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let position = text.find("=>").unwrap();
    let augmented_position = module.to_augmented(position);
    let type_offset = constraint_type_offset(
        Path::new(HOME),
        module.augmented_text(),
        augmented_position,
    )
    .unwrap();
    let types_module = config().types_module_path(Path::new(HOME));
    fx.engine.set_definitions(
        HOME,
        type_offset,
        DefinitionResult {
            definitions: vec![DefinitionInfo {
                file: types_module.clone(),
                span: TextSpan::new(120, 8),
                name: "_default".to_string(),
            }],
            bound_span: TextSpan::new(type_offset, 8),
        },
    );

    let result = fx.service.definitions(Path::new(HOME), position).unwrap();
    assert_eq!(result.definitions.len(), 1);
    assert_eq!(result.definitions[0].file, types_module);
    // generated-type module is not a route; its span is untouched
    assert_eq!(result.definitions[0].span, TextSpan::new(120, 8));
}

#[test]
fn inlay_hints_remap_positions_and_collapse_inserted_ones() {
    let text = "export default () => null\n";
    let fx = fixture(&[(HOME, text)]);

    let module = augmentation(HOME, text);
    let arrow_at = text.find("=>").unwrap();
    let close_paren_splice = module
        .splices()
        .iter()
        .find(|s| s.content.starts_with(')'))
        .unwrap();
    let inside_insertion = module
        .augmented_text()
        .find("satisfies $types._default")
        .unwrap();
    fx.engine.set_inlay_hints(
        HOME,
        vec![
            InlayHint {
                position: module.to_augmented(arrow_at),
                label: ": null".to_string(),
                kind: InlayHintKind::Type,
            },
            InlayHint {
                position: inside_insertion,
                label: "satisfies".to_string(),
                kind: InlayHintKind::Type,
            },
        ],
    );

    let hints = fx
        .service
        .inlay_hints(Path::new(HOME), TextSpan::new(0, text.len()));
    assert_eq!(hints.len(), 2);
    assert_eq!(hints[0].position, arrow_at);
    assert_eq!(hints[1].position, close_paren_splice.index);
}

#[test]
fn check_project_counts_route_and_plain_diagnostics() {
    let route_text = "export default () => null\n";
    let util_text = "export const n = 1\n";
    let fx = fixture(&[
        (HOME, route_text),
        (UTIL, util_text),
        ("/proj/app/env.d.ts", "declare const env: string\n"),
    ]);

    let module = augmentation(HOME, route_text);
    let satisfies_at = module.augmented_text().find("satisfies").unwrap();
    fx.engine.set_diagnostics(
        HOME,
        DiagnosticKind::Semantic,
        vec![diagnostic(HOME, satisfies_at, "satisfies".len(), Severity::Error)],
    );
    fx.native.set_diagnostics(
        UTIL,
        DiagnosticKind::Semantic,
        vec![diagnostic(UTIL, 0, 6, Severity::Warning)],
    );
    // must never surface: declaration files are skipped
    fx.native.set_diagnostics(
        "/proj/app/env.d.ts",
        DiagnosticKind::Semantic,
        vec![diagnostic("/proj/app/env.d.ts", 0, 7, Severity::Error)],
    );

    let summary = check_project(&fx.service, fx.host.as_ref());
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.warnings, 1);
    assert_eq!(summary.diagnostics.len(), 2);
    assert!(!summary.is_clean());
}
