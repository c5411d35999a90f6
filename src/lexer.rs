use tracing::error;

use crate::ast::tokens::Token;
use crate::ast::values::RangeValue;

const BOOST_OPERATOR: char = '^';
const FUZZY_OPERATOR: char = '~';
const ESCAPE_CHARACTER: char = '\\';
const DELIMITER_CHARACTER: char = ':';
const RANGE_SEPARATOR: &str = " TO ";
const UNBOUNDED: &str = "*";

/// Prefix-matched operator surface forms, tried in order before any term
/// scanning. The word operators require their trailing space, so `ANDROID`
/// stays a term.
const SPECIAL_OPERATORS: &[(&str, Token)] = &[
    ("AND ", Token::And),
    ("OR ", Token::Or),
    ("NOT ", Token::Not),
    ("!", Token::Not),
    ("_exists_:", Token::Exists),
    ("(", Token::LParen),
    (")", Token::RParen),
];

/// Splits a Lucene `query_string` expression into [`Token`]s.
///
/// Boost (`^`) and fuzzy (`~`) markers are stripped in a pre-pass; they
/// carry no meaning in a SQL predicate. Any lexing error collapses the
/// whole stream to a single [`Token::Invalid`], which the parser turns
/// into the `false` constant.
pub struct Lexer {
    input: String,
}

impl Lexer {
    pub fn new(query: &str) -> Self {
        let input = strip_marker(&strip_marker(query, BOOST_OPERATOR), FUZZY_OPERATOR);
        Lexer { input }
    }

    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = self.input.trim();
        while !rest.is_empty() {
            let (next, remaining) = next_token(rest);
            if next.iter().any(|t| matches!(t, Token::Invalid)) {
                return vec![Token::Invalid];
            }
            tokens.extend(next);
            rest = remaining.trim_start();
        }
        tokens
    }
}

/// Lexes the next token (or field-name/separator pair) off the front of
/// `query`. `query` is non-empty and starts with a non-space character.
fn next_token(query: &str) -> (Vec<Token>, &str) {
    for (surface, token) in SPECIAL_OPERATORS {
        if let Some(rest) = query.strip_prefix(surface) {
            return (vec![token.clone()], rest);
        }
    }

    let (term, rest) = parse_term(query, false);
    let rest = rest.trim_start();

    // `term:` makes the term a field name, whatever shape it had.
    match rest.strip_prefix(DELIMITER_CHARACTER) {
        Some(after_separator) => match term {
            Token::Term(name) => (
                vec![Token::FieldName(name), Token::Separator],
                after_separator,
            ),
            other => (vec![other, Token::Separator], after_separator),
        },
        None => (vec![term], rest),
    }
}

/// Scans one term: a quoted phrase, a range, or a bare word. Bare words
/// stop at space, `:` and `)`; when scanning the closing bound of a range,
/// `]` and `}` terminate too. Terms may be empty.
fn parse_term(query: &str, closing_bound: bool) -> (Token, &str) {
    let Some(first) = query.chars().next() else {
        return (Token::Term(String::new()), query);
    };
    match first {
        '"' => match query[1..].find('"') {
            Some(i) => {
                let end = 1 + i + 1;
                (Token::Term(query[..end].to_string()), &query[end..])
            }
            None => {
                error!(query, "unterminated quoted term");
                (Token::Invalid, "")
            }
        },
        '>' | '<' | '[' | '{' => parse_range(query),
        _ => {
            let stop = query.char_indices().find(|&(_, c)| {
                c == ' '
                    || c == DELIMITER_CHARACTER
                    || c == ')'
                    || (closing_bound && (c == ']' || c == '}'))
            });
            match stop {
                Some((i, _)) => (Token::Term(query[..i].to_string()), &query[i..]),
                None => (Token::Term(query.to_string()), ""),
            }
        }
    }
}

/// Parses a range: either a comparison shortcut (`>`, `>=`, `<`, `<=`
/// followed by a number) or the bracket syntax `[a TO b]` / `{a TO b}`
/// with mixed brackets allowed.
fn parse_range(query: &str) -> (Token, &str) {
    match query.chars().next() {
        Some(first @ ('>' | '<')) => {
            let inclusive = query[1..].starts_with('=');
            let bound_start = if inclusive { 2 } else { 1 };
            match parse_number(&query[bound_start..], true, &[' ', ')']) {
                Some((number, rest)) => {
                    let range = match (first, inclusive) {
                        ('>', true) => RangeValue::gte(number),
                        ('>', false) => RangeValue::gt(number),
                        (_, true) => RangeValue::lte(number),
                        (_, false) => RangeValue::lt(number),
                    };
                    (Token::Range(range), rest)
                }
                None => (Token::Invalid, ""),
            }
        }
        Some(first @ ('[' | '{')) => {
            let lower_inclusive = first == '[';
            let Some((lower, rest)) = parse_one_bound(&query[1..], false) else {
                return (Token::Invalid, "");
            };
            let Some(rest) = rest.strip_prefix(RANGE_SEPARATOR) else {
                error!(query, "range is missing its TO separator");
                return (Token::Invalid, "");
            };
            let Some((upper, rest)) = parse_one_bound(rest, true) else {
                return (Token::Invalid, "");
            };
            let mut terminator = rest.chars();
            let Some(closing) = terminator.next() else {
                error!(query, "range is missing its closing bracket");
                return (Token::Invalid, "");
            };
            let range = RangeValue::new(lower, lower_inclusive, upper, closing == ']');
            (Token::Range(range), terminator.as_str())
        }
        _ => {
            error!(query, "invalid range");
            (Token::Invalid, "")
        }
    }
}

/// One side of a bracket range: a number, a bare term, or `*` for
/// unbounded. The term fallback scans the input as given, without the
/// whitespace trimming the number scan applies.
fn parse_one_bound(query: &str, closing_bound: bool) -> Option<(Option<String>, &str)> {
    let acceptable_after: &[char] = if closing_bound { &[']', '}'] } else { &[' '] };
    if let Some((number, rest)) = parse_number(query, false, acceptable_after) {
        return Some((Some(number), rest));
    }
    match parse_term(query, closing_bound) {
        (Token::Term(term), rest) if term == UNBOUNDED => Some((None, rest)),
        (Token::Term(term), rest) => Some((Some(term), rest)),
        _ => {
            error!(query, "invalid range bound");
            None
        }
    }
}

/// Scans a number: optional `-`, digits, at most one `.`. The character
/// after the number (if any) must be in `acceptable_after`, so `>10x`
/// fails while `>10)` stops at the parenthesis.
fn parse_number<'a>(
    query: &'a str,
    report_errors: bool,
    acceptable_after: &[char],
) -> Option<(String, &'a str)> {
    let query = query.trim_start();
    let bytes = query.as_bytes();
    let mut end = 0;
    let mut dots = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() {
        let b = bytes[end];
        if b == b'.' {
            dots += 1;
            if dots > 1 {
                if report_errors {
                    error!(query, "number has more than one decimal point");
                }
                return None;
            }
            end += 1;
        } else if b.is_ascii_digit() {
            end += 1;
        } else if acceptable_after.contains(&(b as char)) {
            break;
        } else {
            if report_errors {
                error!(query, "unexpected character after number");
            }
            return None;
        }
    }
    let number = &query[..end];
    if number.parse::<f64>().is_err() {
        if report_errors {
            error!(query, "expected a number");
        }
        return None;
    }
    Some((number.to_string(), &query[end..]))
}

/// Removes every unescaped `marker` together with its optional numeric
/// suffix (digits, then optionally `.` and more digits). Escaped markers
/// keep both characters for the escape resolver.
fn strip_marker(query: &str, marker: char) -> String {
    let chars: Vec<char> = query.chars().collect();
    let mut out = String::with_capacity(query.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ESCAPE_CHARACTER && i + 1 < chars.len() && chars[i + 1] == marker {
            out.push(chars[i]);
            out.push(chars[i + 1]);
            i += 2;
        } else if chars[i] == marker {
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}
