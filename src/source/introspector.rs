use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tree_sitter::{Query, StreamingIterator};

use crate::error::{CheckError, Result};
use crate::languages::LanguageRegistry;
use crate::source::parser::{ParsedFile, Parser};

/// Names declared by one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFacts {
    /// Language the file was parsed as
    pub language: String,
    /// Every function definition, at any nesting depth
    pub functions: BTreeSet<String>,
    /// Every class definition (struct, enum, union and trait for Rust)
    pub classes: BTreeSet<String>,
    /// Imported module paths
    pub imports: BTreeSet<String>,
}

impl SourceFacts {
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }
}

pub struct SourceIntrospector {
    parser: Parser,
}

impl SourceIntrospector {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            parser: Parser::new(registry),
        }
    }

    pub fn introspect_file(&self, path: &Path) -> Result<SourceFacts> {
        let parsed = self.parser.parse_file(path)?;
        let facts = self.introspect(&parsed)?;
        tracing::debug!(
            "Introspected {}: {} functions, {} classes, {} imports",
            path.display(),
            facts.functions.len(),
            facts.classes.len(),
            facts.imports.len()
        );
        Ok(facts)
    }

    pub fn introspect(&self, parsed: &ParsedFile) -> Result<SourceFacts> {
        let grammar = &parsed.grammar;
        let functions_query = grammar
            .cached_functions_query()
            .map_err(|e| CheckError::Parse(format!("Invalid functions query: {}", e)))?;
        let types_query = grammar
            .cached_types_query()
            .map_err(|e| CheckError::Parse(format!("Invalid types query: {}", e)))?;
        let imports_query = grammar
            .cached_imports_query()
            .map_err(|e| CheckError::Parse(format!("Invalid imports query: {}", e)))?;

        let mut facts = SourceFacts {
            language: parsed.language.clone(),
            ..Default::default()
        };
        collect_captures(parsed, functions_query, &mut facts.functions, |node| {
            grammar.excludes_function(node)
        });
        collect_captures(parsed, types_query, &mut facts.classes, |_| false);
        collect_captures(parsed, imports_query, &mut facts.imports, |_| false);

        Ok(facts)
    }
}

impl Default for SourceIntrospector {
    fn default() -> Self {
        Self::new(LanguageRegistry::new())
    }
}

/// Inserts the name captures of every match, skipping matches where any
/// captured node is excluded.
fn collect_captures<F>(parsed: &ParsedFile, query: &Query, into: &mut BTreeSet<String>, exclude: F)
where
    F: Fn(&tree_sitter::Node) -> bool,
{
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(query, parsed.root_node(), parsed.source_bytes());

    while let Some(m) = matches.next() {
        if m.captures.iter().any(|capture| exclude(&capture.node)) {
            continue;
        }
        for capture in m.captures {
            let capture_name = query.capture_names()[capture.index as usize];
            match capture_name {
                "name" | "import_path" | "module" => {
                    let text = parsed.node_text(&capture.node);
                    if !text.is_empty() {
                        into.insert(text.to_string());
                    }
                }
                "future" => {
                    into.insert("__future__".to_string());
                }
                _ => {}
            }
        }
    }
}
