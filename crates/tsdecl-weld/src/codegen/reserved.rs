//! Reserved word guard
//!
//! Host identifiers that collide with TypeScript keywords are prefixed with
//! a double underscore before being emitted.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// TypeScript statement/expression keywords and strict mode reserved words
    static ref RESERVED: HashSet<&'static str> = [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
        "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
        // strict mode
        "as", "implements", "interface", "let", "package", "private", "protected", "public",
        "static", "yield",
    ]
    .into_iter()
    .collect();
}

/// Check if an identifier is a reserved word
pub fn is_reserved(identifier: &str) -> bool {
    RESERVED.contains(identifier)
}

/// Make an identifier safe to emit
pub fn escape(identifier: &str) -> String {
    if is_reserved(identifier) {
        format!("__{}", identifier)
    } else {
        identifier.to_string()
    }
}
