use crate::ast::values::RangeValue;

/// A single lexical unit of a Lucene `query_string` expression.
///
/// The lexer emits these in source order. A query that fails to lex is
/// represented by a stream containing exactly one [`Token::Invalid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// The name in front of a `:` separator
    ///
    /// # Examples
    /// ```text
    /// title:jakarta
    /// host.name:active
    /// ```
    FieldName(String),

    /// A bare or quoted search term
    ///
    /// Quoted terms keep their surrounding double quotes; the quotes are
    /// stripped later, when the term is rendered against a column.
    ///
    /// # Examples
    /// ```text
    /// jakarta
    /// "The Right Way"
    /// aaa\*bbb
    /// ```
    Term(String),

    /// The `:` between a field name and its value
    Separator,

    /// The `AND` keyword (uppercase, trailing space required)
    And,

    /// The `OR` keyword (uppercase, trailing space required)
    Or,

    /// The `NOT` keyword or the `!` prefix
    Not,

    /// The `_exists_:` prefix
    ///
    /// # Examples
    /// ```text
    /// _exists_:title
    /// !_exists_:title
    /// ```
    Exists,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// A range restriction
    ///
    /// Covers both the bracket syntax and the comparison shortcuts, which
    /// normalize to one-sided ranges.
    ///
    /// # Examples
    /// ```text
    /// [2002-01-01 TO 2003-02-15]
    /// {Aida TO Carmen]
    /// >=10
    /// <-10.2
    /// ```
    Range(RangeValue),

    /// Placeholder for a query that failed to lex
    Invalid,
}

impl Token {
    /// Surface text this token stands for.
    ///
    /// Reconstruction is not unique: `!` and `NOT ` both lex to [`Token::Not`],
    /// and comparison shortcuts come back in bracket form. Lexing the
    /// concatenated texts of a token stream yields the same stream.
    pub fn text(&self) -> String {
        match self {
            Token::FieldName(name) => name.clone(),
            Token::Term(term) => term.clone(),
            Token::Separator => ":".to_string(),
            Token::And => "AND ".to_string(),
            Token::Or => "OR ".to_string(),
            Token::Not => "NOT ".to_string(),
            Token::Exists => "_exists_:".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Range(range) => range.text(),
            Token::Invalid => String::new(),
        }
    }
}
