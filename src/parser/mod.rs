//! PHP class-member parsing.
//!
//! The parser extracts exactly the surface the member rules consume:
//! class declarations with their method and property declarations,
//! including modifier lists and line positions.

mod php;
mod types;

pub use php::PhpParser;
pub use types::{
    ClassInfo, MethodInfo, ParseResult, Position, PropertyInfo, Range, Visibility,
};
