use crate::config::DocumentSpec;
use crate::error::{CheckError, Result};

/// Marker a document must contain to count as having section headers.
pub const HEADING_MARKER: &str = "##";

pub struct StructureChecker {
    min_length: usize,
}

impl StructureChecker {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Read a required document, failing with [`CheckError::MissingFile`]
    /// when it does not exist.
    pub fn read_document(spec: &DocumentSpec) -> Result<String> {
        if !spec.path.exists() {
            return Err(CheckError::MissingFile {
                path: spec.path.display().to_string(),
            });
        }
        Ok(std::fs::read_to_string(&spec.path)?)
    }

    /// Exists, is long enough and has at least one heading.
    pub fn check_completeness(&self, spec: &DocumentSpec) -> Result<()> {
        let content = Self::read_document(spec)?;
        self.check_content(spec, &content)
    }

    pub fn check_content(&self, spec: &DocumentSpec, content: &str) -> Result<()> {
        let path = spec.path.display().to_string();

        // Characters, not bytes.
        let length = content.chars().count();
        if length <= self.min_length {
            tracing::debug!("{} is {} characters, need more than {}", path, length, self.min_length);
            return Err(CheckError::Incomplete { path });
        }

        if !content.contains(HEADING_MARKER) {
            return Err(CheckError::MissingHeaders { path });
        }

        Ok(())
    }

    /// Every required section title appears verbatim; first missing one fails.
    pub fn check_sections(spec: &DocumentSpec) -> Result<()> {
        let content = Self::read_document(spec)?;
        Self::check_sections_in(spec, &content)
    }

    pub fn check_sections_in(spec: &DocumentSpec, content: &str) -> Result<()> {
        match spec
            .required_sections
            .iter()
            .find(|section| !content.contains(section.as_str()))
        {
            Some(section) => Err(CheckError::MissingSection {
                document: spec.kind.label().to_string(),
                section: section.clone(),
            }),
            None => Ok(()),
        }
    }
}
