//! PHP parser using native tree-sitter.
//!
//! Extracts class, interface, and trait declarations with their method and
//! property members. Modifier keywords are kept in source order so rules can
//! reason about the exact declaration shape.

use std::path::PathBuf;
use std::time::Instant;

use smallvec::SmallVec;
use tree_sitter::{Node, Parser};
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::ParseError;

use super::types::{ClassInfo, MethodInfo, ParseResult, PropertyInfo, Range, Visibility};

/// PHP class-member parser.
pub struct PhpParser {
    parser: Parser,
}

impl PhpParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_php::LANGUAGE_PHP;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::GrammarError {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse PHP source and extract class members.
    pub fn parse(&mut self, source: &str, file: &str) -> Result<ParseResult, ParseError> {
        let start = Instant::now();

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                path: PathBuf::from(file),
                message: "parser returned no tree".to_string(),
            })?;

        let root = tree.root_node();
        let source_bytes = source.as_bytes();

        let mut result = ParseResult {
            file: file.to_string(),
            content_hash: xxh3_64(source_bytes),
            ..Default::default()
        };

        collect_classes(&root, source_bytes, &mut result.classes);
        result.error_count = count_error_nodes(&root);
        result.has_errors = result.error_count > 0;
        result.parse_time_us = start.elapsed().as_micros() as u64;

        Ok(result)
    }
}

/// Recursively collect class-like declarations (classes, interfaces, traits).
fn collect_classes(node: &Node, source: &[u8], out: &mut Vec<ClassInfo>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "class_declaration" | "interface_declaration" | "trait_declaration" => {
                if let Some(class) = extract_class(&child, source) {
                    out.push(class);
                }
            }
            // Classes can be nested inside namespaces and conditionals.
            _ => collect_classes(&child, source, out),
        }
    }
}

fn extract_class(node: &Node, source: &[u8]) -> Option<ClassInfo> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()?
        .to_string();

    let modifiers = collect_modifiers(node, source);
    let is_abstract = modifiers.iter().any(|m| m == "abstract");

    let mut methods = Vec::new();
    let mut properties = Vec::new();

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "method_declaration" => {
                    if let Some(method) = extract_method(&member, source) {
                        methods.push(method);
                    }
                }
                "property_declaration" => {
                    extract_properties(&member, source, &mut properties);
                }
                _ => {}
            }
        }
    }

    Some(ClassInfo {
        name,
        is_abstract,
        methods,
        properties,
        range: Range::from_ts_node(node),
    })
}

fn extract_method(node: &Node, source: &[u8]) -> Option<MethodInfo> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()?
        .to_string();

    let modifiers = collect_modifiers(node, source);
    let visibility = visibility_of(&modifiers);
    let is_static = modifiers.iter().any(|m| m == "static");
    let is_abstract = modifiers.iter().any(|m| m == "abstract");

    Some(MethodInfo {
        name,
        modifiers,
        visibility,
        is_static,
        is_abstract,
        line: node.start_position().row as u32 + 1,
        range: Range::from_ts_node(node),
    })
}

/// A property declaration can declare several variables; each gets its own
/// entry carrying the declaration's modifier list.
fn extract_properties(node: &Node, source: &[u8], out: &mut Vec<PropertyInfo>) {
    let modifiers = collect_modifiers(node, source);
    let visibility = visibility_of(&modifiers);
    let is_static = modifiers.iter().any(|m| m == "static");

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "property_element" {
            continue;
        }
        let Some(variable) = find_variable_name(&child, source) else {
            continue;
        };
        out.push(PropertyInfo {
            name: variable,
            modifiers: modifiers.clone(),
            visibility,
            is_static,
            line: child.start_position().row as u32 + 1,
            range: Range::from_ts_node(&child),
        });
    }
}

fn find_variable_name(node: &Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "variable_name" {
            return child.utf8_text(source).ok().map(|s| s.to_string());
        }
    }
    None
}

/// Collect modifier keywords (visibility, static, abstract, final, readonly,
/// var) in source order, lowercased.
fn collect_modifiers(node: &Node, source: &[u8]) -> SmallVec<[String; 2]> {
    let mut modifiers = SmallVec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind().ends_with("_modifier") {
            if let Ok(text) = child.utf8_text(source) {
                modifiers.push(text.to_ascii_lowercase());
            }
        }
    }
    modifiers
}

fn visibility_of(modifiers: &SmallVec<[String; 2]>) -> Visibility {
    modifiers
        .iter()
        .find_map(|m| Visibility::from_keyword(m))
        .unwrap_or_default()
}

fn count_error_nodes(node: &Node) -> u32 {
    let mut count = if node.is_error() || node.is_missing() {
        1
    } else {
        0
    };
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_error_nodes(&child);
    }
    count
}
