//! CLI support for lucene2sql
//!
//! Provides programmatic access to the CLI functionality for embedding
//! in other tools.

mod translate;

pub use translate::{execute_translate, TranslateOptions, TranslateOutput};

use thiserror::Error;

/// Errors that can occur during CLI operations
///
/// Translation itself never fails (malformed queries degrade to constant
/// predicates), so everything here is about getting input in and
/// configuration files read.
#[derive(Debug, Error)]
pub enum CliError {
    /// A schema or alias file did not parse
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No query provided
    #[error("No query provided. Pass one as an argument or pipe it to stdin.")]
    NoQuery,
}
