use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use doc_coverage::checks::SUCCESS_MESSAGE;
use doc_coverage::{
    CandidateOutcome, DocScanner, DocumentKind, DocumentationValidator, Result, ValidatorConfig,
};

#[derive(Parser)]
#[command(name = "doc-coverage")]
#[command(about = "Check that markdown documentation covers a source file, using tree-sitter")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Run every check, stopping at the first failure
    doc-coverage check

    # Run every check independently and report each one as JSON
    doc-coverage check --all --format json

    # Check the Rust port against documents in ./docs
    doc-coverage --source src/main.rs --docs-dir docs check

    # Show the functions, classes and imports of the source file
    doc-coverage facts

    # Show what a document counts as documented
    doc-coverage scan PDW_Technical_Specification.md

    # List source functions missing from the technical specification
    doc-coverage coverage
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source file to introspect (overrides the configuration)
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,

    /// Directory holding the markdown documents (overrides the configuration)
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the documentation checks
    Check {
        /// Run every check independently instead of stopping at the first failure
        #[arg(long)]
        all: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the functions, classes and imports declared by the source file
    Facts {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the identifiers a markdown file counts as documented
    Scan {
        /// Markdown file to scan
        file: PathBuf,

        /// Extract component names instead of function names
        #[arg(long)]
        components: bool,
    },

    /// Check one candidate name against the technical specification
    Candidate {
        /// Candidate identifier
        name: String,
    },

    /// List source functions the technical specification does not mention
    Coverage {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Build the effective configuration: file first, then command-line overrides.
pub fn load_config(
    config_path: Option<&Path>,
    source: Option<PathBuf>,
    docs_dir: Option<PathBuf>,
) -> Result<ValidatorConfig> {
    let mut config = match config_path {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };
    if let Some(source) = source {
        config.source = source;
    }
    if let Some(docs_dir) = docs_dir {
        config.docs_dir = docs_dir;
    }
    Ok(config)
}

/// Returns whether every check passed.
pub fn run_checks(config: ValidatorConfig, all: bool, format: &str) -> Result<bool> {
    let validator = DocumentationValidator::new(config);

    if !all {
        validator.run_sequence()?;
        if format == "json" {
            println!("{}", serde_json::json!({ "passed": true }));
        } else {
            println!("{}", SUCCESS_MESSAGE);
        }
        return Ok(true);
    }

    let report = validator.run_all();
    if format == "json" {
        let output = serde_json::to_string_pretty(&report)?;
        println!("{}", output);
    } else {
        for outcome in &report.outcomes {
            match &outcome.message {
                None => println!("PASS  {}", outcome.check),
                Some(message) => println!("FAIL  {}: {}", outcome.check, message),
            }
        }
        let failed = report.failures().count();
        println!();
        if failed == 0 {
            println!("{}", SUCCESS_MESSAGE);
        } else {
            println!("{} of {} checks failed", failed, report.outcomes.len());
        }
    }

    Ok(report.passed())
}

pub fn show_facts(config: ValidatorConfig, format: &str) -> Result<()> {
    let validator = DocumentationValidator::new(config);
    let facts = validator.facts()?;

    if format == "json" {
        let output = serde_json::to_string_pretty(facts)?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "Source: {} ({})",
        validator.config().source.display(),
        facts.language
    );
    for (label, names) in [
        ("Functions", &facts.functions),
        ("Classes", &facts.classes),
        ("Imports", &facts.imports),
    ] {
        println!("\n{} ({}):", label, names.len());
        for name in names {
            println!("  {}", name);
        }
    }

    Ok(())
}

pub fn scan_document(file: &Path, components: bool) -> Result<()> {
    if !file.exists() {
        return Err(doc_coverage::CheckError::FileNotFound(file.display().to_string()));
    }
    let content = std::fs::read_to_string(file)?;

    let tokens = if components {
        DocScanner::documented_components(&content)
    } else {
        DocScanner::documented_functions(&content)
    };

    if tokens.is_empty() {
        println!("No documented names found");
        return Ok(());
    }
    for token in tokens {
        // Component names may span lines.
        println!("{}", token.replace('\n', " "));
    }
    Ok(())
}

pub fn check_candidate(config: ValidatorConfig, name: &str) -> Result<()> {
    let validator = DocumentationValidator::new(config);
    match validator.check_candidate(name)? {
        CandidateOutcome::Skipped => println!("skipped: '{}' is not a valid identifier", name),
        CandidateOutcome::NotAFunction => {
            println!("passed: '{}' is not a function of the source file", name)
        }
        CandidateOutcome::Documented => println!("passed: '{}' is documented", name),
    }
    Ok(())
}

/// Returns whether every source function is documented.
pub fn show_coverage(config: ValidatorConfig, format: &str) -> Result<bool> {
    let validator = DocumentationValidator::new(config);
    let total = validator.facts()?.functions.len();
    let missing = validator.undocumented_functions()?;

    if format == "json" {
        let output = serde_json::json!({
            "document": DocumentKind::TechnicalSpecification,
            "total_functions": total,
            "undocumented": missing,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if missing.is_empty() {
        println!("All {} source functions are documented", total);
    } else {
        println!(
            "{} of {} source functions not documented in {}:",
            missing.len(),
            total,
            validator
                .config()
                .document(DocumentKind::TechnicalSpecification)
                .path
                .display()
        );
        for name in &missing {
            println!("  {}", name);
        }
    }

    Ok(missing.is_empty())
}
