//! Checker configuration.
//!
//! Every setting has a built-in default matching the PDW documentation
//! suite, so a config file is optional. A TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! source = "src/main.rs"
//! min_length = 2000
//!
//! [documents.deployment_guide]
//! file = "docs/DEPLOY.md"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

pub const DEFAULT_SOURCE: &str = "PersonalDataWareHouse.py";
pub const DEFAULT_MIN_LENGTH: usize = 1000;

/// Functions the subject program is expected to define and document.
pub const CRITICAL_FUNCTIONS: [&str; 5] = [
    "main",
    "new_data_loader",
    "create_pivot_history",
    "xlsx_report_generator",
    "sanitize_entries_dataframe",
];

/// The three documents of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    TechnicalSpecification,
    FunctionalSpecification,
    DeploymentGuide,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::TechnicalSpecification,
        DocumentKind::FunctionalSpecification,
        DocumentKind::DeploymentGuide,
    ];

    pub fn default_file(&self) -> &'static str {
        match self {
            DocumentKind::TechnicalSpecification => "PDW_Technical_Specification.md",
            DocumentKind::FunctionalSpecification => "PDW_Functional_Specification.md",
            DocumentKind::DeploymentGuide => "PDW_Deployment_Guide.md",
        }
    }

    /// Label used in failure messages
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::TechnicalSpecification => "Technical specification",
            DocumentKind::FunctionalSpecification => "Functional specification",
            DocumentKind::DeploymentGuide => "Deployment guide",
        }
    }

    pub fn default_sections(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::TechnicalSpecification => &[
                "Executive Summary",
                "System Architecture",
                "Database Schema",
                "Error Handling",
                "Dependencies and Requirements",
            ],
            DocumentKind::FunctionalSpecification => &[
                "Business Context",
                "Business Processes",
                "Business Rules",
                "User Interactions",
            ],
            DocumentKind::DeploymentGuide => &[
                "System Requirements",
                "Installation Instructions",
                "Configuration Setup",
                "Troubleshooting Guide",
            ],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-document overrides; unset fields fall back to the kind's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    pub file: Option<String>,
    pub required_sections: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentsConfig {
    pub technical_specification: DocumentConfig,
    pub functional_specification: DocumentConfig,
    pub deployment_guide: DocumentConfig,
}

/// A resolved document: where to read it and what it must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub required_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Source file to introspect
    pub source: PathBuf,
    /// Directory holding the markdown documents
    pub docs_dir: PathBuf,
    /// A document must be strictly longer than this many characters
    pub min_length: usize,
    pub critical_functions: Vec<String>,
    pub documents: DocumentsConfig,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            docs_dir: PathBuf::from("."),
            min_length: DEFAULT_MIN_LENGTH,
            critical_functions: CRITICAL_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            documents: DocumentsConfig::default(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CheckError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| CheckError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e: toml::de::Error| CheckError::Config(e.to_string()))
    }

    fn document_config(&self, kind: DocumentKind) -> &DocumentConfig {
        match kind {
            DocumentKind::TechnicalSpecification => &self.documents.technical_specification,
            DocumentKind::FunctionalSpecification => &self.documents.functional_specification,
            DocumentKind::DeploymentGuide => &self.documents.deployment_guide,
        }
    }

    pub fn document(&self, kind: DocumentKind) -> DocumentSpec {
        let overrides = self.document_config(kind);
        let file = overrides.file.as_deref().unwrap_or(kind.default_file());
        let required_sections = overrides
            .required_sections
            .clone()
            .unwrap_or_else(|| kind.default_sections().iter().map(|s| s.to_string()).collect());

        DocumentSpec {
            kind,
            path: self.doc_path(file),
            required_sections,
        }
    }

    pub fn documents(&self) -> Vec<DocumentSpec> {
        DocumentKind::ALL.iter().map(|kind| self.document(*kind)).collect()
    }

    // Relative to the working directory unless a docs dir is set, so that
    // failure messages name the file the way it was configured.
    fn doc_path(&self, file: &str) -> PathBuf {
        if self.docs_dir.as_os_str().is_empty() || self.docs_dir == Path::new(".") {
            PathBuf::from(file)
        } else {
            self.docs_dir.join(file)
        }
    }
}
