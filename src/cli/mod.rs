mod commands;

pub use commands::{
    check_candidate, load_config, run_checks, scan_document, show_coverage, show_facts, Cli,
    Commands,
};
