//! Translate Lucene queries into SQL predicates

use std::fs;

use serde::de::DeserializeOwned;

use super::CliError;
use crate::{as_string, translate_to_sql, used_columns, AliasResolver, Lexer, Schema, Token};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// The Lucene query to translate
    pub query: String,
    /// Default fields searched when a term has no `field:` prefix
    pub fields: Vec<String>,
    /// JSON file mapping logical field names to internal property names
    pub schema_path: Option<String>,
    /// JSON file of column aliases applied to the finished predicate
    pub alias_path: Option<String>,
    /// Report the referenced columns instead of SQL
    pub columns: bool,
    /// Report the token stream instead of SQL
    pub tokens: bool,
}

/// Result of a translate operation
#[derive(Debug)]
pub enum TranslateOutput {
    /// The rendered SQL predicate
    Sql(String),
    /// Columns the predicate references
    Columns(Vec<String>),
    /// The raw token stream (debugging aid)
    Tokens(Vec<Token>),
}

/// Execute a translate operation
pub fn execute_translate(options: &TranslateOptions) -> Result<TranslateOutput, CliError> {
    if options.tokens {
        return Ok(TranslateOutput::Tokens(Lexer::new(&options.query).tokenize()));
    }

    let schema = match &options.schema_path {
        Some(path) => load_json(path)?,
        None => Schema::default(),
    };

    let statement = translate_to_sql(&options.query, &options.fields, &schema);

    let statement = match &options.alias_path {
        Some(path) => load_json::<AliasResolver>(path)?.rewrite(&statement),
        None => statement,
    };

    if options.columns {
        Ok(TranslateOutput::Columns(used_columns(&statement)))
    } else {
        Ok(TranslateOutput::Sql(as_string(&statement)))
    }
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_string(),
        source,
    })
}
