//! Property-based tests for documentation coverage.
//!
//! Candidates are drawn from Unicode upper/lower-case letters and decimal
//! digits, the same alphabet a hand-written identifier could use. Most random
//! candidates are not functions of the fixture source, so real function names
//! are mixed in to keep the interesting branch exercised.
//!
//! `PROPTEST_CASES` overrides the number of cases per property (default: 64).

use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

use proptest::prelude::*;

use doc_coverage::languages::is_unicode_identifier;
use doc_coverage::languages::python::PythonGrammar;
use doc_coverage::{
    is_documented, CandidateOutcome, CoverageChecker, DocScanner, DocumentKind,
    DocumentationValidator, SourceFacts, ValidatorConfig,
};

const DEFAULT_PROPTEST_CASES: u32 = 64;

const FIXTURE_FUNCTIONS: [&str; 8] = [
    "__init__",
    "create_pivot_history",
    "main",
    "new_data_loader",
    "read_config",
    "sanitize_entries_dataframe",
    "strip_text",
    "xlsx_report_generator",
];

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn fixture_validator() -> DocumentationValidator {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pdw");
    DocumentationValidator::new(ValidatorConfig {
        source: dir.join("PersonalDataWareHouse.py"),
        docs_dir: dir,
        ..Default::default()
    })
}

fn candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[\\p{Lu}\\p{Ll}\\p{Nd}]{1,100}",
        1 => prop::sample::select(FIXTURE_FUNCTIONS.to_vec()).prop_map(String::from),
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Every valid identifier that names a source function is documented in
    /// the technical specification.
    #[test]
    fn prop_source_functions_documented(name in candidate()) {
        let validator = fixture_validator();
        let outcome = validator.check_candidate(&name);
        prop_assert!(outcome.is_ok(), "{:?}", outcome);

        match outcome.unwrap() {
            CandidateOutcome::Skipped => prop_assert!(!is_unicode_identifier(&name)),
            CandidateOutcome::NotAFunction => {
                prop_assert!(!validator.facts().unwrap().functions.contains(&name))
            }
            CandidateOutcome::Documented => {
                let tokens = validator
                    .documented_functions(DocumentKind::TechnicalSpecification)
                    .unwrap();
                prop_assert!(tokens.iter().any(|t| t.contains(name.as_str())));
            }
        }
    }

    /// Candidates starting with a digit are never identifiers and never fail.
    #[test]
    fn prop_leading_digit_skipped(name in "[0-9][\\p{Lu}\\p{Ll}\\p{Nd}]{0,20}") {
        let validator = fixture_validator();
        prop_assert_eq!(validator.check_candidate(&name).unwrap(), CandidateOutcome::Skipped);
    }

    /// A function mentioned as a level-4 heading is documented, and removing
    /// every mention makes the check fail naming it.
    #[test]
    fn prop_heading_documents_function(name in "[a-z_][a-z0-9_]{0,30}") {
        let facts = SourceFacts {
            language: "python".to_string(),
            functions: BTreeSet::from([name.clone()]),
            ..Default::default()
        };
        let checker = CoverageChecker::new(&facts, &PythonGrammar);

        let documented = DocScanner::documented_functions(&format!("## API\n\n#### {name}\n"));
        prop_assert_eq!(
            checker.check_candidate(&name, &documented).unwrap(),
            CandidateOutcome::Documented
        );

        let undocumented = DocScanner::documented_functions("## API\n\nNothing here.\n");
        let err = checker.check_candidate(&name, &undocumented).unwrap_err();
        let expected = format!("'{}'", name);
        prop_assert!(err.to_string().contains(&expected));
    }

    /// Scanning is a pure function of the text.
    #[test]
    fn prop_scan_deterministic(text in "[#*` a-zA-Z_()\\n:]{0,200}") {
        prop_assert_eq!(
            DocScanner::documented_functions(&text),
            DocScanner::documented_functions(&text)
        );
        prop_assert_eq!(
            DocScanner::documented_components(&text),
            DocScanner::documented_components(&text)
        );
    }

    /// Equality is a special case of containment.
    #[test]
    fn prop_token_documents_its_substrings(token in "[a-z_]{1,40}", start in 0usize..40, len in 1usize..40) {
        let tokens = BTreeSet::from([token.clone()]);
        prop_assert!(is_documented(&token, &tokens));

        let start = start.min(token.len() - 1);
        let end = (start + len).min(token.len());
        prop_assert!(is_documented(&token[start..end], &tokens));
    }
}
