use once_cell::sync::OnceCell;
use tree_sitter::{Query, QueryError};

use super::LanguageGrammar;

pub struct PythonGrammar;

// Static query caches for Python
static PYTHON_FUNCTIONS_QUERY: OnceCell<Query> = OnceCell::new();
static PYTHON_TYPES_QUERY: OnceCell<Query> = OnceCell::new();
static PYTHON_IMPORTS_QUERY: OnceCell<Query> = OnceCell::new();

impl LanguageGrammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["py", "pyi"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    // Matches at any depth: nested functions, methods, decorated and async defs.
    // Async defs are dropped afterwards by `excludes_function`.
    fn functions_query(&self) -> &str {
        r#"
        (function_definition
            name: (identifier) @name
        ) @function
        "#
    }

    fn types_query(&self) -> &str {
        r#"
        (class_definition
            name: (identifier) @name
        ) @class
        "#
    }

    fn imports_query(&self) -> &str {
        r#"
        (import_statement
            name: (dotted_name) @import_path
        )

        (import_statement
            name: (aliased_import
                name: (dotted_name) @import_path
            )
        )

        (import_from_statement
            module_name: (dotted_name) @module
        )

        (import_from_statement
            module_name: (relative_import
                (dotted_name) @module
            )
        )

        (future_import_statement) @future
        "#
    }

    // Python 2 statements the grammar still parses.
    fn rejected_kinds(&self) -> &[&'static str] {
        &["print_statement", "exec_statement"]
    }

    // Coroutines are a separate definition kind from plain functions.
    fn excludes_function(&self, node: &tree_sitter::Node) -> bool {
        if node.kind() != "function_definition" {
            return false;
        }
        let mut cursor = node.walk();
        let mut children = node.children(&mut cursor);
        children.any(|child| child.kind() == "async")
    }

    fn cached_functions_query(&self) -> Result<&'static Query, QueryError> {
        PYTHON_FUNCTIONS_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.functions_query())
        })
    }

    fn cached_types_query(&self) -> Result<&'static Query, QueryError> {
        PYTHON_TYPES_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.types_query())
        })
    }

    fn cached_imports_query(&self) -> Result<&'static Query, QueryError> {
        PYTHON_IMPORTS_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.imports_query())
        })
    }
}
