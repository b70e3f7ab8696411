//! Documentation completeness checks.
//!
//! Coverage checks compare the functions a source file declares with the
//! identifiers its technical specification mentions. Structure checks make
//! sure each document of the suite exists, is substantial and carries its
//! required sections.

pub mod coverage;
pub mod structure;
pub mod validator;

use std::fmt;

use serde::Serialize;

use crate::error::CheckError;

pub use coverage::{is_documented, CandidateOutcome, CoverageChecker};
pub use structure::{StructureChecker, HEADING_MARKER};
pub use validator::DocumentationValidator;

/// Message printed when every check of the direct-execution run passes.
pub const SUCCESS_MESSAGE: &str = "All documentation structure validation tests passed!";

/// The fixed checks, in direct-execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    StructureCompleteness,
    CriticalFunctions,
    TechnicalSpecSections,
    FunctionalSpecSections,
    DeploymentGuideSections,
}

impl CheckName {
    pub const ALL: [CheckName; 5] = [
        CheckName::StructureCompleteness,
        CheckName::CriticalFunctions,
        CheckName::TechnicalSpecSections,
        CheckName::FunctionalSpecSections,
        CheckName::DeploymentGuideSections,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::StructureCompleteness => "structure-completeness",
            CheckName::CriticalFunctions => "critical-functions",
            CheckName::TechnicalSpecSections => "technical-spec-sections",
            CheckName::FunctionalSpecSections => "functional-spec-sections",
            CheckName::DeploymentGuideSections => "deployment-guide-sections",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckName,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass(check: CheckName) -> Self {
        Self {
            check,
            passed: true,
            message: None,
        }
    }

    pub fn fail(check: CheckName, error: &CheckError) -> Self {
        Self {
            check,
            passed: false,
            message: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
