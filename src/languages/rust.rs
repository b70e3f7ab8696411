use once_cell::sync::OnceCell;
use tree_sitter::{Query, QueryError};

use super::LanguageGrammar;

pub struct RustGrammar;

// Static query caches for Rust
static RUST_FUNCTIONS_QUERY: OnceCell<Query> = OnceCell::new();
static RUST_TYPES_QUERY: OnceCell<Query> = OnceCell::new();
static RUST_IMPORTS_QUERY: OnceCell<Query> = OnceCell::new();

impl LanguageGrammar for RustGrammar {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["rs"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn functions_query(&self) -> &str {
        r#"
        (function_item
            name: (identifier) @name
        ) @function

        (function_signature_item
            name: (identifier) @name
        ) @function
        "#
    }

    // Structs, enums, unions and traits play the part of classes.
    fn types_query(&self) -> &str {
        r#"
        (struct_item
            name: (type_identifier) @name
        ) @struct

        (enum_item
            name: (type_identifier) @name
        ) @enum

        (union_item
            name: (type_identifier) @name
        ) @union

        (trait_item
            name: (type_identifier) @name
        ) @trait
        "#
    }

    fn imports_query(&self) -> &str {
        r#"
        (use_declaration
            argument: (scoped_identifier) @import_path
        )

        (use_declaration
            argument: (identifier) @import_path
        )

        (use_declaration
            argument: (use_as_clause
                path: (_) @import_path
            )
        )

        (use_declaration
            argument: (scoped_use_list
                path: (_) @module
            )
        )

        (use_declaration
            argument: (use_wildcard
                (_) @module
            )
        )

        (extern_crate_declaration
            name: (identifier) @import_path
        )
        "#
    }

    fn cached_functions_query(&self) -> Result<&'static Query, QueryError> {
        RUST_FUNCTIONS_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.functions_query())
        })
    }

    fn cached_types_query(&self) -> Result<&'static Query, QueryError> {
        RUST_TYPES_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.types_query())
        })
    }

    fn cached_imports_query(&self) -> Result<&'static Query, QueryError> {
        RUST_IMPORTS_QUERY.get_or_try_init(|| {
            Query::new(&self.language(), self.imports_query())
        })
    }
}
