use crate::ast::statements::Statement;

/// Characters that `\` can escape inside a term.
pub(crate) const SPECIAL_CHARACTERS: &[char] = &[
    '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
];

const UNBOUNDED: &str = "*";

/// A parsed range restriction.
///
/// `None` bounds are unbounded (`*` in the source). Bound text is kept
/// verbatim; `2002-01-01` and `10.2` are both just strings here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValue {
    pub lower: Option<String>,
    pub upper: Option<String>,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl RangeValue {
    pub fn new(
        lower: Option<String>,
        lower_inclusive: bool,
        upper: Option<String>,
        upper_inclusive: bool,
    ) -> Self {
        RangeValue {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }

    /// `>=bound`
    pub fn gte(bound: String) -> Self {
        RangeValue::new(Some(bound), true, None, false)
    }

    /// `>bound`
    pub fn gt(bound: String) -> Self {
        RangeValue::new(Some(bound), false, None, false)
    }

    /// `<=bound`
    pub fn lte(bound: String) -> Self {
        RangeValue::new(None, false, Some(bound), true)
    }

    /// `<bound`
    pub fn lt(bound: String) -> Self {
        RangeValue::new(None, false, Some(bound), false)
    }

    /// True when both sides are unbounded, i.e. `[* TO *]`.
    pub fn totally_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Bracket-form surface text, e.g. `[10 TO *}`.
    pub fn text(&self) -> String {
        format!(
            "{}{} TO {}{}",
            if self.lower_inclusive { '[' } else { '{' },
            self.lower.as_deref().unwrap_or(UNBOUNDED),
            self.upper.as_deref().unwrap_or(UNBOUNDED),
            if self.upper_inclusive { ']' } else { '}' },
        )
    }

    /// Renders this range against `column`.
    ///
    /// A totally unbounded range only asserts that the column has a value.
    /// Two-sided ranges become a conjunction of the two comparisons.
    pub fn to_statement(&self, column: &str) -> Statement {
        if self.totally_unbounded() {
            return Statement::infix(
                Statement::column(column),
                "IS",
                Statement::literal("NOT NULL"),
            );
        }
        let lower = self.lower.as_ref().map(|bound| {
            let op = if self.lower_inclusive { " >= " } else { " > " };
            Statement::infix(Statement::column(column), op, quoted_literal(bound))
        });
        let upper = self.upper.as_ref().map(|bound| {
            let op = if self.upper_inclusive { " <= " } else { " < " };
            Statement::infix(Statement::column(column), op, quoted_literal(bound))
        });
        match (lower, upper) {
            (Some(lower), Some(upper)) => Statement::infix(lower, "AND", upper),
            (Some(lower), None) => lower,
            (None, Some(upper)) => upper,
            (None, None) => unreachable!("handled by the totally_unbounded check"),
        }
    }
}

/// An intermediate parse result: what a (portion of a) query matches,
/// before it is bound to any column.
///
/// The value parser combines these on an explicit stack; the statement
/// builder then broadcasts the finished value over the relevant columns
/// via [`Value::to_statement`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single term, still carrying its quotes/escapes
    Term(String),
    /// A range restriction
    Range(RangeValue),
    /// Conjunction of two values
    And(Box<Value>, Box<Value>),
    /// Disjunction of two values
    Or(Box<Value>, Box<Value>),
    /// Negation of a value
    Not(Box<Value>),
    /// A value that could not be parsed
    Invalid,
}

impl Value {
    /// Renders this value as a predicate over `column`.
    ///
    /// Invalid values render as the `false` constant, so a malformed
    /// sub-expression never matches but the query as a whole still runs.
    pub fn to_statement(&self, column: &str) -> Statement {
        match self {
            Value::Term(term) => term_to_statement(term, column),
            Value::Range(range) => range.to_statement(column),
            Value::And(left, right) => Statement::infix(
                left.to_statement(column),
                "AND",
                right.to_statement(column),
            ),
            Value::Or(left, right) => Statement::infix(
                left.to_statement(column),
                "OR",
                right.to_statement(column),
            ),
            Value::Not(inner) => Statement::prefix("NOT", vec![inner.to_statement(column)]),
            Value::Invalid => Statement::always_false(),
        }
    }
}

/// Renders one term against a column.
///
/// Unescaped `*`/`?` turn the comparison into an `ILIKE` pattern match
/// (`%`/`_`); otherwise the term compares with `=`. Surrounding quotes are
/// stripped first, so `log:"a b"` and a hypothetical unquoted `a b` term
/// render identically.
fn term_to_statement(term: &str, column: &str) -> Statement {
    let text = if already_quoted(term) {
        &term[1..term.len() - 1]
    } else {
        term
    };
    let (body, like) = render_term_text(text);
    let op = if like { "ILIKE" } else { " = " };
    Statement::infix(
        Statement::column(column),
        op,
        Statement::literal(format!("'{body}'")),
    )
}

fn already_quoted(term: &str) -> bool {
    term.len() >= 2 && term.starts_with('"') && term.ends_with('"')
}

/// Builds the body of the single-quoted SQL literal for a term, resolving
/// escapes and substituting wildcards. Returns the body and whether any
/// wildcard substitution happened (i.e. whether `ILIKE` is needed).
///
/// In `ILIKE` mode, literal `%` and `_` characters are escaped so only the
/// substituted wildcards match freely.
fn render_term_text(text: &str) -> (String, bool) {
    let like = has_unescaped_wildcard(text);
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() && SPECIAL_CHARACTERS.contains(&chars[i + 1]) {
            push_literal(&mut out, chars[i + 1], like);
            i += 2;
            continue;
        }
        match chars[i] {
            '*' => out.push('%'),
            '?' => out.push('_'),
            other => push_literal(&mut out, other, like),
        }
        i += 1;
    }
    (out, like)
}

fn push_literal(out: &mut String, c: char, like: bool) {
    match c {
        '\'' => out.push_str("\\'"),
        '\\' => out.push_str("\\\\"),
        '%' if like => out.push_str("\\%"),
        '_' if like => out.push_str("\\_"),
        other => out.push(other),
    }
}

fn has_unescaped_wildcard(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() && SPECIAL_CHARACTERS.contains(&chars[i + 1]) {
            i += 2;
            continue;
        }
        if chars[i] == '*' || chars[i] == '?' {
            return true;
        }
        i += 1;
    }
    false
}

fn quoted_literal(bound: &str) -> Statement {
    Statement::literal(format!(
        "'{}'",
        bound.replace('\\', "\\\\").replace('\'', "\\'")
    ))
}
