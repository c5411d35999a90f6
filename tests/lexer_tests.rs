// tests/lexer_tests.rs

use lucene2sql::ast::{RangeValue, Token};
use lucene2sql::lexer::Lexer;

fn tokenize(query: &str) -> Vec<Token> {
    Lexer::new(query).tokenize()
}

fn term(text: &str) -> Token {
    Token::Term(text.to_string())
}

fn field(name: &str) -> Token {
    Token::FieldName(name.to_string())
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_word_operators() {
    let tokens = tokenize("a AND b OR c NOT d");
    assert_eq!(
        tokens,
        vec![
            term("a"),
            Token::And,
            term("b"),
            Token::Or,
            term("c"),
            Token::Not,
            term("d"),
        ]
    );
}

#[test]
fn test_word_operators_require_trailing_space() {
    // no trailing space: these are plain terms
    assert_eq!(tokenize("ANDY"), vec![term("ANDY")]);
    assert_eq!(tokenize("ORACLE"), vec![term("ORACLE")]);
    assert_eq!(tokenize("NOTHING"), vec![term("NOTHING")]);
}

#[test]
fn test_word_operators_are_case_sensitive() {
    let tokens = tokenize("a and b");
    assert_eq!(tokens, vec![term("a"), term("and"), term("b")]);
}

#[test]
fn test_bang_and_exists() {
    assert_eq!(
        tokenize("!db.str:FAIL"),
        vec![Token::Not, field("db.str"), Token::Separator, term("FAIL")]
    );
    assert_eq!(
        tokenize("!_exists_:title"),
        vec![Token::Not, Token::Exists, term("title")]
    );
}

#[test]
fn test_parentheses() {
    assert_eq!(
        tokenize("(a b)"),
        vec![Token::LParen, term("a"), term("b"), Token::RParen]
    );
}

// ============================================================================
// Field names and separators
// ============================================================================

#[test]
fn test_field_name_with_separator() {
    assert_eq!(
        tokenize("title:jakarta"),
        vec![field("title"), Token::Separator, term("jakarta")]
    );
}

#[test]
fn test_whitespace_around_separator() {
    assert_eq!(
        tokenize("title :  jakarta"),
        vec![field("title"), Token::Separator, term("jakarta")]
    );
}

#[test]
fn test_dotted_field_names() {
    assert_eq!(
        tokenize("host.name:active"),
        vec![field("host.name"), Token::Separator, term("active")]
    );
}

// ============================================================================
// Quoted terms
// ============================================================================

#[test]
fn test_quoted_terms_keep_their_quotes() {
    assert_eq!(
        tokenize(r#"title:"The Right Way""#),
        vec![
            field("title"),
            Token::Separator,
            term(r#""The Right Way""#),
        ]
    );
}

#[test]
fn test_unterminated_quote_is_a_lexing_error() {
    assert_eq!(tokenize(r#"title:"never closed"#), vec![Token::Invalid]);
}

// ============================================================================
// Ranges
// ============================================================================

#[test]
fn test_bracket_ranges() {
    let test_cases = vec![
        (
            "[1 TO 5]",
            RangeValue::new(Some("1".to_string()), true, Some("5".to_string()), true),
        ),
        (
            "{Aida TO Carmen]",
            RangeValue::new(
                Some("Aida".to_string()),
                false,
                Some("Carmen".to_string()),
                true,
            ),
        ),
        (
            "{* TO 2012-01-01}",
            RangeValue::new(None, false, Some("2012-01-01".to_string()), false),
        ),
        ("{* TO *}", RangeValue::new(None, false, None, false)),
    ];

    for (input, expected) in test_cases {
        let query = format!("date:{}", input);
        let tokens = tokenize(&query);
        assert_eq!(
            tokens,
            vec![field("date"), Token::Separator, Token::Range(expected)],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_comparison_shortcuts_normalize_to_ranges() {
    let test_cases = vec![
        (">10", RangeValue::gt("10".to_string())),
        (">=10", RangeValue::gte("10".to_string())),
        ("<10", RangeValue::lt("10".to_string())),
        ("<=10.2", RangeValue::lte("10.2".to_string())),
        ("<-10.2", RangeValue::lt("-10.2".to_string())),
        ("<   -10.2", RangeValue::lt("-10.2".to_string())),
    ];

    for (input, expected) in test_cases {
        let query = format!("age:{}", input);
        let tokens = tokenize(&query);
        assert_eq!(
            tokens,
            vec![field("age"), Token::Separator, Token::Range(expected)],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_range_errors_collapse_the_stream() {
    let test_cases = vec![
        "age:>",          // missing bound
        "age:>1.2.3",     // two decimal points
        "age:>10x",       // trailing garbage after the number
        "date:[1 TO",     // unterminated range
        "date:[1 5]",     // missing TO
        "date:[1 to 5]",  // TO is case-sensitive
    ];

    for input in test_cases {
        assert_eq!(tokenize(input), vec![Token::Invalid], "Failed for input: {}", input);
    }
}

#[test]
fn test_range_terminated_by_parenthesis() {
    // the closing bracket position is taken by `)` here; the range ends
    // exclusive and the parenthesis is consumed with it
    let tokens = tokenize("a:(b:[1 TO 5)");
    assert!(tokens.contains(&Token::Range(RangeValue::new(
        Some("1".to_string()),
        true,
        Some("5".to_string()),
        false,
    ))));
}

// ============================================================================
// Boost and fuzzy markers
// ============================================================================

#[test]
fn test_markers_are_stripped_with_their_suffix() {
    assert_eq!(tokenize("jakarta^4"), vec![term("jakarta")]);
    assert_eq!(tokenize("roam~0.8"), vec![term("roam")]);
    assert_eq!(tokenize(r#""jakarta apache"~10"#), vec![term(r#""jakarta apache""#)]);
}

#[test]
fn test_escaped_markers_survive() {
    assert_eq!(tokenize(r"a\~b"), vec![term(r"a\~b")]);
    assert_eq!(tokenize(r"a\^4b"), vec![term(r"a\^4b")]);
}

// ============================================================================
// Surface text reconstruction
// ============================================================================

#[test]
fn test_token_text_round_trips() {
    let queries = vec![
        "title:jakarta",
        "a AND b OR NOT c",
        "(a b)",
        "_exists_:title",
        "date:[1 TO 5]",
        "date:{* TO 2012-01-01}",
    ];

    for query in queries {
        let tokens = tokenize(query);
        let reconstructed: String = tokens.iter().map(|t| t.text()).collect::<Vec<_>>().join(" ");
        assert_eq!(
            tokenize(&reconstructed),
            tokens,
            "Failed for query: {}",
            query
        );
    }
}
