pub mod python;
pub mod rust;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tree_sitter::{Query, QueryError};

/// A subject language the introspector can parse.
///
/// Each grammar exposes three tree-sitter queries. Captures named `name`
/// carry function or type names; captures named `import_path` or `module`
/// carry import targets. A `future` capture stands for Python's
/// `from __future__ import ...`, whose module node has no name of its own.
pub trait LanguageGrammar: Send + Sync {
    fn name(&self) -> &'static str;
    fn file_extensions(&self) -> &[&'static str];
    fn language(&self) -> tree_sitter::Language;
    fn functions_query(&self) -> &str;
    fn types_query(&self) -> &str;
    fn imports_query(&self) -> &str;

    /// Get cached functions query (compiled once)
    fn cached_functions_query(&self) -> Result<&'static Query, QueryError>;

    /// Get cached types query (compiled once)
    fn cached_types_query(&self) -> Result<&'static Query, QueryError>;

    /// Get cached imports query (compiled once)
    fn cached_imports_query(&self) -> Result<&'static Query, QueryError>;

    /// Whether `candidate` is a legal identifier in this language.
    fn is_identifier(&self, candidate: &str) -> bool {
        is_unicode_identifier(candidate)
    }

    /// Node kinds the grammar accepts but the language itself does not.
    fn rejected_kinds(&self) -> &[&'static str] {
        &[]
    }

    /// Whether a node matched by the functions query is left out of the
    /// function set.
    fn excludes_function(&self, _node: &tree_sitter::Node) -> bool {
        false
    }
}

/// Identifier rule shared by Python and Rust: an underscore or letter,
/// then underscores, letters or digits. Keywords are not excluded.
pub fn is_unicode_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

pub struct LanguageRegistry {
    languages: HashMap<String, Arc<dyn LanguageGrammar>>,
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };

        registry.register(Arc::new(python::PythonGrammar));
        registry.register(Arc::new(rust::RustGrammar));

        registry
    }

    pub fn register(&mut self, grammar: Arc<dyn LanguageGrammar>) {
        let name = grammar.name().to_string();
        for ext in grammar.file_extensions() {
            self.extension_map.insert(ext.to_string(), name.clone());
        }
        self.languages.insert(name, grammar);
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.languages.get(name).cloned()
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.extension_map
            .get(ext)
            .and_then(|name| self.languages.get(name))
            .cloned()
    }

    pub fn get_for_file(&self, path: &Path) -> Option<Arc<dyn LanguageGrammar>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    pub fn supported_languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
