//! # Lucene Query Strings - Abstract Syntax Trees
//!
//! This module defines the trees the compiler moves a query through on its
//! way from Lucene `query_string` text to a SQL predicate.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[values]** - Intermediate parse results: what is being matched,
//!   before it is bound to any column
//! - **[statements]** - The final SQL predicate tree consumed by the
//!   renderer and the visitor passes
//!
//! ## Pipeline Structure
//!
//! ```text
//! raw query string
//!     | Lexer::tokenize
//!     v
//! Vec<Token>
//!     | Parser (value stack machine + statement builder)
//!     v
//! Statement
//!     | render::as_string / visitor passes
//!     v
//! SQL text, rewritten trees, referenced columns
//! ```
//!
//! Tokens and values live only for the duration of a single parse call;
//! the [`Statement`] tree is what callers hold on to afterwards.
//!
//! All three trees are closed enums. Every consumer matches exhaustively,
//! so adding a node kind is a compile error until every pass handles it.
//!
//! ## Quick Start
//!
//! ```text
//! title:jakarta OR status:(active AND NOT pending)
//! ```
//!
//! This query becomes a predicate over the `title` and `status` columns:
//!
//! ```text
//! ("title" = 'jakarta' OR ("status" = 'active' AND NOT ("status" = 'pending')))
//! ```
pub mod statements;
pub mod tokens;
pub mod values;

pub use statements::Statement;
pub use tokens::Token;
pub use values::{RangeValue, Value};
