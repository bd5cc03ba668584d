//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod corpus;
mod generate;
mod rules;
mod target;
mod verify;

pub use corpus::{run_corpus, CorpusConfig};
pub use generate::{build_generator, run_generate};
pub use rules::run_rules;
pub use target::{run_clear, run_show};
pub use verify::{run_verify, VerifyConfig};

/// Process exit codes shared by all subcommands.
pub mod exit_codes {
    /// Success: the candidate matched, or the command completed
    pub const SUCCESS: i32 = 0;
    /// The candidate did not match, a corpus case failed, or no target is stored
    pub const NO_MATCH: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
