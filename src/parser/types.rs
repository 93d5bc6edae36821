//! Parse output types.
//!
//! This is the single source of truth for parse output. The rules and the
//! verification harness both consume this struct.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Parse result produced for one fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParseResult {
    /// Path of the parsed file, as given by the caller.
    pub file: String,
    /// xxh3 hash of the source text.
    pub content_hash: u64,
    /// Extracted class declarations.
    pub classes: Vec<ClassInfo>,
    pub parse_time_us: u64,
    /// Count of tree-sitter ERROR nodes.
    pub error_count: u32,
    pub has_errors: bool,
}

/// A class declaration and its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    pub is_abstract: bool,
    pub methods: Vec<MethodInfo>,
    pub properties: Vec<PropertyInfo>,
    pub range: Range,
}

/// A method declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    /// Raw modifier keywords in source order, lowercased
    /// (e.g. `["protected", "abstract"]`).
    pub modifiers: SmallVec<[String; 2]>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    /// 1-based line of the declaration.
    pub line: u32,
    pub range: Range,
}

/// One declared property variable.
///
/// A declaration like `protected $a, $b;` produces one entry per variable,
/// each carrying the declaration's modifier list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Variable name including the `$` sigil.
    pub name: String,
    pub modifiers: SmallVec<[String; 2]>,
    pub visibility: Visibility,
    pub is_static: bool,
    /// 1-based line of the variable.
    pub line: u32,
    pub range: Range,
}

/// PHP member visibility. Members without a visibility modifier are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Parse a modifier keyword; returns None for non-visibility modifiers.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// 0-based row, as reported by tree-sitter.
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start: Position {
                line: start.row as u32,
                column: start.column as u32,
            },
            end: Position {
                line: end.row as u32,
                column: end.column as u32,
            },
        }
    }
}
