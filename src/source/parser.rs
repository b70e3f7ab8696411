use std::path::Path;
use std::sync::Arc;

use crate::error::{CheckError, Result};
use crate::languages::{LanguageGrammar, LanguageRegistry};

pub struct Parser {
    registry: LanguageRegistry,
}

impl Parser {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Parse a source file, choosing the grammar by extension.
    ///
    /// Fails with [`CheckError::FileNotFound`] when the path does not exist and
    /// with [`CheckError::Parse`] when the text is not valid for its language.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile> {
        if !path.exists() {
            return Err(CheckError::FileNotFound(path.display().to_string()));
        }

        let grammar = self
            .registry
            .get_for_file(path)
            .ok_or_else(|| CheckError::UnsupportedLanguage(path.display().to_string()))?;

        let source = std::fs::read_to_string(path)?;
        self.parse_source(&source, grammar).map_err(|e| match e {
            CheckError::Parse(msg) => CheckError::Parse(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn parse_source(&self, source: &str, grammar: Arc<dyn LanguageGrammar>) -> Result<ParsedFile> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&grammar.language())
            .map_err(|e| CheckError::Parse(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| CheckError::Parse("Failed to parse source".to_string()))?;

        // tree-sitter recovers from syntax errors; a checker must not.
        if let Some(node) = first_error(tree.root_node()) {
            let pos = node.start_position();
            let what = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "invalid syntax".to_string()
            };
            return Err(CheckError::Parse(format!(
                "{} ({}) at line {}, column {}",
                what,
                grammar.name(),
                pos.row + 1,
                pos.column + 1
            )));
        }

        if let Some(node) = first_rejected(tree.root_node(), grammar.rejected_kinds()) {
            let pos = node.start_position();
            return Err(CheckError::Parse(format!(
                "unsupported {} ({}) at line {}, column {}",
                node.kind(),
                grammar.name(),
                pos.row + 1,
                pos.column + 1
            )));
        }

        Ok(ParsedFile {
            tree,
            source: source.to_string(),
            language: grammar.name().to_string(),
            grammar,
        })
    }

    pub fn get_grammar(&self, path: &Path) -> Option<Arc<dyn LanguageGrammar>> {
        self.registry.get_for_file(path)
    }
}

fn first_error(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn first_rejected<'t>(node: tree_sitter::Node<'t>, kinds: &[&str]) -> Option<tree_sitter::Node<'t>> {
    if kinds.is_empty() {
        return None;
    }
    if kinds.contains(&node.kind()) {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(|child| first_rejected(child, kinds))
}

pub struct ParsedFile {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub language: String,
    pub grammar: Arc<dyn LanguageGrammar>,
}

impl ParsedFile {
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn node_text(&self, node: &tree_sitter::Node) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }
}
