pub mod checks;
pub mod config;
pub mod docs;
pub mod error;
pub mod languages;
pub mod source;

use once_cell::sync::Lazy;

pub use checks::{
    is_documented, CandidateOutcome, CheckName, CheckOutcome, CheckReport, CoverageChecker,
    DocumentationValidator, StructureChecker, SUCCESS_MESSAGE,
};
pub use config::{DocumentKind, DocumentSpec, ValidatorConfig, CRITICAL_FUNCTIONS};
pub use docs::{DocScanner, DocumentedTokens};
pub use error::{CheckError, Result};
pub use languages::{LanguageGrammar, LanguageRegistry};
pub use source::{Parser, SourceFacts, SourceIntrospector};

/// Global language registry instance (lazily initialized)
pub static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);
