use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use routetype_splice::{AnchorSpan, AugmentedModule, Splice};

use crate::contracts::contract_for;
use crate::parse::parse_source;
use crate::{AnnotateError, Result};

/// Namespace alias for the synthetic import of the generated-type module.
pub const TYPES_NAMESPACE: &str = "$types";

static EXPORT_DEFAULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^export\s+default\b").expect("valid regex"));

/// Plan and apply the splices for one route module.
///
/// Walks only top-level statements; nested scopes are never annotated.
/// `types_specifier` is the import path of the route's generated-type
/// module, derived by the caller. The returned module owns the splice list
/// in source order, starting with the leading import insertion at offset 0.
pub fn annotate_route(file: &Path, text: &str, types_specifier: &str) -> Result<AugmentedModule> {
    let tree = parse_source(file, text)?;
    let root = tree.root_node();

    let mut splices = vec![Splice::new(
        0,
        format!("import * as {TYPES_NAMESPACE} from \"{types_specifier}\";\n\n"),
    )];

    let mut cursor = root.walk();
    for stmt in root.named_children(&mut cursor) {
        if stmt.kind() != "export_statement" {
            continue;
        }
        if let Some(equals) = token_child(stmt, "=") {
            return Err(AnnotateError::ExportEquals {
                file: file.to_path_buf(),
                offset: equals.start_byte(),
            });
        }
        annotate_default_export(file, text, stmt, &mut splices)?;
        annotate_function_declaration(text, stmt, &mut splices);
        annotate_variable_declaration(text, stmt, &mut splices);
    }

    debug!(
        "planned {} splices for {}",
        splices.len(),
        file.display()
    );
    Ok(AugmentedModule::new(text, splices))
}

/// BEFORE: export default expr
/// AFTER:  export default (expr) satisfies $types._default
///                        ^    ^^^^^^^^^^^^^^^^^^^^^^^^^^^
fn annotate_default_export(
    file: &Path,
    text: &str,
    stmt: Node,
    splices: &mut Vec<Splice>,
) -> Result<()> {
    if token_child(stmt, "default").is_none() {
        return Ok(());
    }
    // `export default function name() {}` is a declaration, not an
    // expression; only expression values are wrapped.
    let Some(value) = stmt.child_by_field_name("value") else {
        return Ok(());
    };
    if !is_function_expression(value) {
        return Ok(());
    }
    let Some(contract) = contract_for("default") else {
        return Ok(());
    };

    // The `default` keyword span is not a distinct tree node, so recover it
    // with a fixed-length slice after the regex match.
    let anchor = default_keyword_anchor(file, text, stmt.start_byte())?;

    splices.push(Splice::anchored(value.start_byte(), "(", anchor));
    splices.push(Splice::anchored(
        value.end_byte(),
        format!(") satisfies {TYPES_NAMESPACE}.{}", contract.constraint),
        anchor,
    ));
    Ok(())
}

/// BEFORE: export function serverLoader() {...}
/// AFTER:  export const serverLoader = (function serverLoader() {...})
///           satisfies $types.serverLoader
///
/// The leading splice sits at the start of the `function` keyword so the
/// original body and any whitespace after `export` survive byte-for-byte.
fn annotate_function_declaration(text: &str, stmt: Node, splices: &mut Vec<Splice>) {
    if token_child(stmt, "default").is_some() {
        return;
    }
    let Some(decl) = stmt.child_by_field_name("declaration") else {
        return;
    };
    if decl.kind() != "function_declaration" {
        return;
    }
    let Some(name) = decl.child_by_field_name("name") else {
        return;
    };
    let Some(body) = decl.child_by_field_name("body") else {
        return;
    };
    let name_text = &text[name.byte_range()];
    let Some(contract) = contract_for(name_text) else {
        return;
    };

    let anchor = AnchorSpan::new(name.start_byte(), name.end_byte() - name.start_byte());
    splices.push(Splice::anchored(
        decl.start_byte(),
        format!("const {name_text} = ("),
        anchor,
    ));
    splices.push(Splice::anchored(
        body.end_byte(),
        format!(") satisfies {TYPES_NAMESPACE}.{}", contract.constraint),
        anchor,
    ));
}

/// BEFORE: export const clientLoader = expr
/// AFTER:  export const clientLoader = (expr) satisfies $types.clientLoader
///                                     ^    ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
fn annotate_variable_declaration(text: &str, stmt: Node, splices: &mut Vec<Splice>) {
    let Some(decl) = stmt.child_by_field_name("declaration") else {
        return;
    };
    if !matches!(decl.kind(), "lexical_declaration" | "variable_declaration") {
        return;
    }

    let mut cursor = decl.walk();
    for declarator in decl.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name.kind() != "identifier" {
            continue;
        }
        let Some(value) = declarator.child_by_field_name("value") else {
            continue;
        };
        if !is_function_expression(value) {
            continue;
        }
        let name_text = &text[name.byte_range()];
        let Some(contract) = contract_for(name_text) else {
            continue;
        };

        let anchor = AnchorSpan::new(name.start_byte(), name.end_byte() - name.start_byte());
        splices.push(Splice::anchored(value.start_byte(), "(", anchor));
        splices.push(Splice::anchored(
            value.end_byte(),
            format!(") satisfies {TYPES_NAMESPACE}.{}", contract.constraint),
            anchor,
        ));
    }
}

fn default_keyword_anchor(file: &Path, text: &str, stmt_start: usize) -> Result<AnchorSpan> {
    let matched =
        EXPORT_DEFAULT
            .find(&text[stmt_start..])
            .ok_or_else(|| AnnotateError::MissingDefaultKeyword {
                file: file.to_path_buf(),
                offset: stmt_start,
            })?;
    let default_len = "default".len();
    Ok(AnchorSpan::new(
        stmt_start + matched.end() - default_len,
        default_len,
    ))
}

fn is_function_expression(node: Node) -> bool {
    matches!(node.kind(), "arrow_function" | "function_expression")
}

/// First anonymous (token) child with the given kind.
fn token_child<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}
