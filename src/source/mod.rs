pub mod introspector;
pub mod parser;

pub use introspector::{SourceFacts, SourceIntrospector};
pub use parser::{ParsedFile, Parser};
