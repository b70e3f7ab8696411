use std::sync::Arc;

use once_cell::unsync::OnceCell;

use crate::checks::coverage::{CandidateOutcome, CoverageChecker};
use crate::checks::structure::StructureChecker;
use crate::checks::{CheckName, CheckOutcome, CheckReport};
use crate::config::{DocumentKind, ValidatorConfig};
use crate::docs::{DocScanner, DocumentedTokens};
use crate::error::{CheckError, Result};
use crate::languages::LanguageGrammar;
use crate::source::{SourceFacts, SourceIntrospector};
use crate::REGISTRY;

/// Runs the documentation checks for one configuration.
///
/// The source file is introspected at most once per validator; documents are
/// re-read by every check.
pub struct DocumentationValidator {
    config: ValidatorConfig,
    introspector: SourceIntrospector,
    facts: OnceCell<SourceFacts>,
}

impl DocumentationValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            introspector: SourceIntrospector::default(),
            facts: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn facts(&self) -> Result<&SourceFacts> {
        self.facts
            .get_or_try_init(|| self.introspector.introspect_file(&self.config.source))
    }

    /// Grammar for the source file, chosen by its extension.
    pub fn grammar(&self) -> Result<Arc<dyn LanguageGrammar>> {
        REGISTRY
            .get_for_file(&self.config.source)
            .ok_or_else(|| CheckError::UnsupportedLanguage(self.config.source.display().to_string()))
    }

    /// Function mentions in the given document.
    pub fn documented_functions(&self, kind: DocumentKind) -> Result<DocumentedTokens> {
        let content = StructureChecker::read_document(&self.config.document(kind))?;
        Ok(DocScanner::documented_functions(&content))
    }

    /// Component names in the given document.
    pub fn documented_components(&self, kind: DocumentKind) -> Result<DocumentedTokens> {
        let content = StructureChecker::read_document(&self.config.document(kind))?;
        Ok(DocScanner::documented_components(&content))
    }

    /// Check one arbitrary string against the technical specification.
    /// Invalid identifiers are skipped before any file is read.
    pub fn check_candidate(&self, candidate: &str) -> Result<CandidateOutcome> {
        let grammar = self.grammar()?;
        if !grammar.is_identifier(candidate) {
            return Ok(CandidateOutcome::Skipped);
        }

        let checker = CoverageChecker::new(self.facts()?, grammar.as_ref());
        let tokens = self.documented_functions(DocumentKind::TechnicalSpecification)?;
        checker.check_candidate(candidate, &tokens)
    }

    /// Source functions the technical specification never mentions.
    pub fn undocumented_functions(&self) -> Result<Vec<String>> {
        let grammar = self.grammar()?;
        let facts = self.facts()?;
        let tokens = self.documented_functions(DocumentKind::TechnicalSpecification)?;
        Ok(CoverageChecker::new(facts, grammar.as_ref()).undocumented(&tokens))
    }

    pub fn check_structure_completeness(&self) -> Result<()> {
        let checker = StructureChecker::new(self.config.min_length);
        for spec in self.config.documents() {
            checker.check_completeness(&spec)?;
        }
        Ok(())
    }

    pub fn check_critical_functions(&self) -> Result<()> {
        let grammar = self.grammar()?;
        let facts = self.facts()?;
        let tokens = self.documented_functions(DocumentKind::TechnicalSpecification)?;
        CoverageChecker::new(facts, grammar.as_ref())
            .check_critical(&self.config.critical_functions, &tokens)
    }

    pub fn check_sections(&self, kind: DocumentKind) -> Result<()> {
        StructureChecker::check_sections(&self.config.document(kind))
    }

    pub fn run_check(&self, check: CheckName) -> Result<()> {
        tracing::debug!("Running check {}", check);
        match check {
            CheckName::StructureCompleteness => self.check_structure_completeness(),
            CheckName::CriticalFunctions => self.check_critical_functions(),
            CheckName::TechnicalSpecSections => {
                self.check_sections(DocumentKind::TechnicalSpecification)
            }
            CheckName::FunctionalSpecSections => {
                self.check_sections(DocumentKind::FunctionalSpecification)
            }
            CheckName::DeploymentGuideSections => self.check_sections(DocumentKind::DeploymentGuide),
        }
    }

    /// Direct-execution mode: every check in order, stopping at the first failure.
    pub fn run_sequence(&self) -> Result<()> {
        for check in CheckName::ALL {
            self.run_check(check)?;
        }
        tracing::info!("All {} documentation checks passed", CheckName::ALL.len());
        Ok(())
    }

    /// Every check independently; one failure does not stop the others.
    pub fn run_all(&self) -> CheckReport {
        let outcomes = CheckName::ALL
            .iter()
            .map(|check| match self.run_check(*check) {
                Ok(()) => CheckOutcome::pass(*check),
                Err(e) => {
                    if e.is_assertion() {
                        tracing::warn!("Check {} failed: {}", check, e);
                    } else {
                        tracing::error!("Check {} could not run: {}", check, e);
                    }
                    CheckOutcome::fail(*check, &e)
                }
            })
            .collect();
        CheckReport { outcomes }
    }
}
