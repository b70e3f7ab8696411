use serde::Serialize;

use crate::docs::DocumentedTokens;
use crate::error::{CheckError, Result};
use crate::languages::LanguageGrammar;
use crate::source::SourceFacts;

/// `name` counts as documented when it equals a token or is contained in one.
pub fn is_documented(name: &str, tokens: &DocumentedTokens) -> bool {
    tokens.contains(name) || tokens.iter().any(|token| token.contains(name))
}

/// Result of checking one arbitrary candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Not a legal identifier; outside the check's domain
    Skipped,
    /// A legal identifier that the source does not declare as a function
    NotAFunction,
    /// A source function that the document mentions
    Documented,
}

/// Coverage checks over the facts of one source file. `grammar` is the
/// grammar the file was parsed with and supplies the identifier rule.
pub struct CoverageChecker<'a> {
    facts: &'a SourceFacts,
    grammar: &'a dyn LanguageGrammar,
}

impl<'a> CoverageChecker<'a> {
    pub fn new(facts: &'a SourceFacts, grammar: &'a dyn LanguageGrammar) -> Self {
        Self { facts, grammar }
    }

    pub fn is_identifier(&self, candidate: &str) -> bool {
        self.grammar.is_identifier(candidate)
    }

    pub fn check_candidate(
        &self,
        candidate: &str,
        tokens: &DocumentedTokens,
    ) -> Result<CandidateOutcome> {
        if !self.is_identifier(candidate) {
            return Ok(CandidateOutcome::Skipped);
        }
        if !self.facts.has_function(candidate) {
            return Ok(CandidateOutcome::NotAFunction);
        }
        if is_documented(candidate, tokens) {
            Ok(CandidateOutcome::Documented)
        } else {
            Err(CheckError::UndocumentedFunction {
                name: candidate.to_string(),
            })
        }
    }

    /// Fails on the first critical name the source defines but the document
    /// never mentions. Names the source does not define are skipped.
    pub fn check_critical<S: AsRef<str>>(
        &self,
        critical: &[S],
        tokens: &DocumentedTokens,
    ) -> Result<()> {
        for raw in critical {
            let name: &str = raw.as_ref();
            if !self.facts.has_function(name) {
                tracing::debug!("Critical function '{}' not defined in source, skipping", name);
                continue;
            }
            if !is_documented(name, tokens) {
                return Err(CheckError::CriticalFunctionUndocumented {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Every source function the document does not mention, sorted.
    pub fn undocumented(&self, tokens: &DocumentedTokens) -> Vec<String> {
        self.facts
            .functions
            .iter()
            .filter(|name| !is_documented(name, tokens))
            .cloned()
            .collect()
    }
}
