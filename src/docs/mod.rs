//! Markdown documentation scanning.
//!
//! Documents are treated as plain text: the scanner pulls identifier
//! mentions out with fixed regexes, and structure checks work on substrings.

pub mod scanner;

pub use scanner::{DocScanner, DocumentedTokens, COMPONENT_PATTERNS, FUNCTION_PATTERNS};
