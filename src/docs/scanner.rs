//! Regex scanner for identifiers mentioned in markdown documentation.
//!
//! The pattern shapes are fixed: the documentation being checked was
//! written against them, so they are matched verbatim rather than through a
//! markdown parser.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Function mentions: `` `name()` ``, `**name**`, `### name`, `#### name`.
pub const FUNCTION_PATTERNS: [&str; 4] = [
    r"`(\w+)\(\)`",
    r"\*\*(\w+)\*\*",
    r"### (\w+)",
    r"#### (\w+)",
];

/// Component names: multi-word level 3/4 headings and `**Name:**` labels.
pub const COMPONENT_PATTERNS: [&str; 3] = [
    r"### (\w+(?:\s+\w+)*)",
    r"#### (\w+(?:\s+\w+)*)",
    r"\*\*(\w+(?:\s+\w+)*):\*\*",
];

static FUNCTION_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(&FUNCTION_PATTERNS));
static COMPONENT_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(&COMPONENT_PATTERNS));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("documentation pattern is a valid regex"))
        .collect()
}

/// Identifiers a markdown document counts as documented.
pub type DocumentedTokens = BTreeSet<String>;

pub struct DocScanner;

impl DocScanner {
    /// Union of every function-pattern capture in `content`.
    pub fn documented_functions(content: &str) -> DocumentedTokens {
        Self::scan(&FUNCTION_REGEXES, content)
    }

    /// Union of every component-pattern capture in `content`.
    pub fn documented_components(content: &str) -> DocumentedTokens {
        Self::scan(&COMPONENT_REGEXES, content)
    }

    fn scan(regexes: &[Regex], content: &str) -> DocumentedTokens {
        let mut tokens = DocumentedTokens::new();
        for re in regexes {
            for caps in re.captures_iter(content) {
                if let Some(m) = caps.get(1) {
                    tokens.insert(m.as_str().to_string());
                }
            }
        }
        tokens
    }
}
