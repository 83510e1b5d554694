use std::collections::HashSet;
use std::path::Path;

use tree_sitter::Node;

use crate::parse::parse_source;

/// What route export, if any, a text position belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPosition {
    DefaultExport,
    NamedExport(String),
    NotAnExport,
}

/// Classify the export owning the nearest syntax-tree node at `offset`.
///
/// Works on both original and augmented text: the augmented rewrites keep
/// every annotated export inside a top-level `export_statement`, so walking
/// upward from the node at the position reaches the same classification
/// either way. Returns `NotAnExport` when the text fails to parse at all.
pub fn classify_position(file: &Path, text: &str, offset: usize) -> ExportPosition {
    let Ok(tree) = parse_source(file, text) else {
        return ExportPosition::NotAnExport;
    };
    let root = tree.root_node();
    let offset = offset.min(text.len());
    let Some(node) = root.named_descendant_for_byte_range(offset, offset) else {
        return ExportPosition::NotAnExport;
    };

    let Some(stmt) = enclosing_export_statement(node) else {
        return ExportPosition::NotAnExport;
    };
    if token_child(stmt, "default").is_some() {
        return ExportPosition::DefaultExport;
    }
    match exported_name(text, stmt, offset) {
        Some(name) => ExportPosition::NamedExport(name),
        None => ExportPosition::NotAnExport,
    }
}

/// Names exported by top-level statements, including `default`.
pub fn top_level_export_names(file: &Path, text: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    let Ok(tree) = parse_source(file, text) else {
        return names;
    };
    let root = tree.root_node();
    let mut cursor = root.walk();
    for stmt in root.named_children(&mut cursor) {
        if stmt.kind() != "export_statement" {
            continue;
        }
        if token_child(stmt, "default").is_some() {
            names.insert("default".to_string());
            continue;
        }
        collect_exported_names(text, stmt, &mut names);
    }
    names
}

/// Whether `offset` sits directly in top-level statement context (where
/// export snippets are worth offering), as opposed to inside a function
/// body, class body, or an existing complete statement.
pub fn at_top_level(file: &Path, text: &str, offset: usize) -> bool {
    let Ok(tree) = parse_source(file, text) else {
        return false;
    };
    let root = tree.root_node();
    let offset = offset.min(text.len());
    let Some(node) = root.named_descendant_for_byte_range(offset, offset) else {
        return false;
    };
    if node.kind() == "program" {
        return true;
    }

    let mut current = node;
    while let Some(parent) = current.parent() {
        if matches!(
            current.kind(),
            "statement_block" | "class_body" | "arrow_function" | "function_expression"
        ) {
            return false;
        }
        if parent.kind() == "program" {
            // A bare fragment being typed; complete statements don't want
            // export snippets spliced into their middle.
            return matches!(current.kind(), "expression_statement" | "ERROR")
                || current.is_error();
        }
        current = parent;
    }
    false
}

/// Byte offset of the `satisfies` constraint type for the export containing
/// `offset` in augmented text. Used to jump from a route export to its
/// generated type definition.
pub fn constraint_type_offset(file: &Path, text: &str, offset: usize) -> Option<usize> {
    let tree = parse_source(file, text).ok()?;
    let root = tree.root_node();
    let offset = offset.min(text.len());
    let node = root.named_descendant_for_byte_range(offset, offset)?;
    let stmt = enclosing_export_statement(node)?;
    let satisfies = find_descendant(stmt, "satisfies_expression")?;
    // grammar shape: expression 'satisfies' type — the type is last
    let type_node = satisfies.named_child(satisfies.named_child_count().checked_sub(1)?)?;
    Some(type_node.start_byte())
}

fn enclosing_export_statement(node: Node) -> Option<Node> {
    let mut current = Some(node);
    while let Some(n) = current {
        if n.kind() == "export_statement" {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

/// The exported name the position belongs to: a function declaration's
/// name, the declarator containing `offset` (falling back to the first
/// declarator), or the export-clause specifier at the position.
fn exported_name(text: &str, stmt: Node, offset: usize) -> Option<String> {
    if let Some(decl) = stmt.child_by_field_name("declaration") {
        match decl.kind() {
            "function_declaration" => {
                let name = decl.child_by_field_name("name")?;
                return Some(text[name.byte_range()].to_string());
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = decl.walk();
                let declarators: Vec<Node> = decl
                    .named_children(&mut cursor)
                    .filter(|n| n.kind() == "variable_declarator")
                    .collect();
                let target = declarators
                    .iter()
                    .find(|d| d.start_byte() <= offset && offset <= d.end_byte())
                    .or_else(|| declarators.first())?;
                let name = target.child_by_field_name("name")?;
                if name.kind() != "identifier" {
                    return None;
                }
                return Some(text[name.byte_range()].to_string());
            }
            _ => return None,
        }
    }

    // export { a, b }
    let clause = find_descendant(stmt, "export_clause")?;
    let mut cursor = clause.walk();
    let specifiers: Vec<Node> = clause
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "export_specifier")
        .collect();
    let target = specifiers
        .iter()
        .find(|s| s.start_byte() <= offset && offset <= s.end_byte())?;
    let name = target.child_by_field_name("name")?;
    Some(text[name.byte_range()].to_string())
}

fn collect_exported_names(text: &str, stmt: Node, names: &mut HashSet<String>) {
    if let Some(decl) = stmt.child_by_field_name("declaration") {
        match decl.kind() {
            "function_declaration" | "class_declaration" => {
                if let Some(name) = decl.child_by_field_name("name") {
                    names.insert(text[name.byte_range()].to_string());
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = decl.walk();
                for declarator in decl.named_children(&mut cursor) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    if let Some(name) = declarator.child_by_field_name("name") {
                        if name.kind() == "identifier" {
                            names.insert(text[name.byte_range()].to_string());
                        }
                    }
                }
            }
            _ => {}
        }
        return;
    }
    if let Some(clause) = find_descendant(stmt, "export_clause") {
        let mut cursor = clause.walk();
        for specifier in clause.named_children(&mut cursor) {
            if specifier.kind() != "export_specifier" {
                continue;
            }
            if let Some(name) = specifier.child_by_field_name("name") {
                names.insert(text[name.byte_range()].to_string());
            }
        }
    }
}

fn find_descendant<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        if let Some(found) = find_descendant(child, kind) {
            return Some(found);
        }
    }
    None
}

fn token_child<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}
