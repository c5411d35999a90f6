use tracing::{error, warn};

use crate::ast::statements::Statement;
use crate::ast::tokens::Token;
use crate::ast::values::Value;
use crate::lexer::Lexer;
use crate::schema::Schema;

/// Compiles one Lucene `query_string` expression into a SQL predicate tree.
///
/// The compiler is total: malformed input degrades to the `false` constant
/// (or `true` for an empty query) and logs a diagnostic, it never fails.
///
/// ```
/// use lucene2sql::{as_string, translate_to_sql, Schema};
///
/// let fields = vec!["title".to_string(), "text".to_string()];
/// let predicate = translate_to_sql("author:tolkien", &fields, &Schema::default());
/// assert_eq!(as_string(&predicate), r#""author" = 'tolkien'"#);
/// ```
pub fn translate_to_sql(query: &str, default_fields: &[String], schema: &Schema) -> Statement {
    Parser::new(query, default_fields, schema).build_where_statement()
}

/// Single-use parser state: the token stream, a cursor into it, and the
/// context a field-less term is resolved against.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    default_fields: &'a [String],
    schema: &'a Schema,
}

impl<'a> Parser<'a> {
    pub fn new(query: &str, default_fields: &'a [String], schema: &'a Schema) -> Self {
        let tokens = Lexer::new(query).tokenize();
        if tokens == [Token::Invalid] {
            warn!(query, "query could not be tokenized, predicate will match nothing");
        }
        Parser {
            tokens,
            position: 0,
            default_fields,
            schema,
        }
    }

    /// Consumes the whole token stream, merging one statement at a time
    /// into the accumulator. An empty stream yields the `true` constant.
    pub fn build_where_statement(mut self) -> Statement {
        let mut accumulated: Option<Statement> = None;
        while self.remaining() > 0 {
            accumulated = Some(self.build_statement(accumulated, true));
        }
        accumulated.unwrap_or_else(Statement::always_true)
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn peek_is_separator(&self) -> bool {
        matches!(self.tokens.get(self.position), Some(Token::Separator))
    }

    /// Abandons the rest of the stream. Used when a field name arrives
    /// without a value, where resuming mid-stream would misparse.
    fn drain(&mut self) {
        self.position = self.tokens.len();
    }

    /// Builds one statement and, in merge mode, combines it with the
    /// accumulator: NOT-rooted statements attach with `AND` (Lucene's
    /// `a NOT b` reads "a and not b"), everything else with the implicit OR.
    fn build_statement(
        &mut self,
        accumulated: Option<Statement>,
        merge_with_accumulated: bool,
    ) -> Statement {
        let Some(token) = self.next() else {
            return Statement::always_false();
        };

        let current = match token {
            Token::FieldName(field_name) => {
                if self.remaining() <= 1 {
                    error!(%field_name, "field name with no value, dropping the rest of the query");
                    self.drain();
                    return Statement::always_false();
                }
                if !self.peek_is_separator() {
                    error!(%field_name, "field name without a separator");
                    return Statement::always_false();
                }
                self.position += 1;
                let column = self
                    .schema
                    .resolve(&field_name)
                    .unwrap_or(&field_name)
                    .to_string();
                let value = self.build_value(Vec::new(), 0);
                new_leaf_statement(&[column], &value)
            }
            Token::Separator => {
                let value = self.build_value(Vec::new(), 0);
                new_leaf_statement(self.default_fields, &value)
            }
            Token::Term(term) => new_leaf_statement(self.default_fields, &Value::Term(term)),
            Token::And => {
                let left = accumulated.unwrap_or_else(Statement::always_false);
                let right = self.build_statement(None, false);
                return Statement::infix(left, "AND", right);
            }
            Token::Or => {
                let left = accumulated.unwrap_or_else(Statement::always_false);
                let right = self.build_statement(None, false);
                return Statement::infix(left, "OR", right);
            }
            Token::Not => {
                let inner = self.build_statement(None, false);
                Statement::prefix("NOT", vec![inner])
            }
            Token::Exists => match self.build_value(Vec::new(), 0) {
                Value::Term(field_name) => Statement::infix(
                    Statement::column(field_name),
                    "IS",
                    Statement::literal("NOT NULL"),
                ),
                other => {
                    error!(?other, "operand of _exists_ must be a single field name");
                    return Statement::always_false();
                }
            },
            Token::LParen => Statement::parenthesized(self.build_statement(None, false)),
            Token::RParen => {
                return accumulated.unwrap_or_else(Statement::always_false);
            }
            other => {
                error!(?other, "token cannot start a statement");
                return Statement::always_false();
            }
        };

        let Some(accumulated) = accumulated else {
            return current;
        };
        if !merge_with_accumulated {
            return current;
        }
        if current.is_not_rooted() {
            Statement::infix(accumulated, "AND", current)
        } else {
            Statement::infix(accumulated, "OR", current)
        }
    }

    /// The value stack machine.
    ///
    /// Each step pushes one value; adjacent values on the stack fold into
    /// an OR (the implicit operator) unless the top of the stack is already
    /// an operator result or the step itself is an operator. Depth-0 calls
    /// parse exactly one unit and return it; inside parentheses the loop
    /// runs until the matching `)`, which ORs any leftover stack entries
    /// together.
    fn build_value(&mut self, mut stack: Vec<Value>, parenthesis_level: u32) -> Value {
        loop {
            let Some(token) = self.next() else {
                warn!(parenthesis_level, "query ended while a value was expected");
                return Value::Invalid;
            };

            let mut add_or_separator = !matches!(token, Token::RParen)
                && !stack.is_empty()
                && !matches!(
                    stack.last(),
                    Some(Value::And(..) | Value::Or(..) | Value::Not(..))
                );

            match token {
                Token::LParen => {
                    let nested = self.build_value(Vec::new(), 1);
                    stack.push(nested);
                }
                Token::RParen => {
                    if parenthesis_level == 0 {
                        error!("unmatched right parenthesis in a value");
                        return Value::Invalid;
                    }
                    if stack.is_empty() {
                        error!("right parenthesis with nothing to close");
                        return Value::Invalid;
                    }
                    while stack.len() > 1 {
                        or_last_two_values(&mut stack);
                    }
                    return stack.pop().unwrap_or(Value::Invalid);
                }
                Token::And => {
                    add_or_separator = false;
                    let Some(left) = stack.pop() else {
                        error!("AND with no left-hand operand");
                        return Value::Invalid;
                    };
                    let right = self.build_value(Vec::new(), 0);
                    stack.push(Value::And(Box::new(left), Box::new(right)));
                }
                Token::Or => {
                    add_or_separator = false;
                    if stack.is_empty() {
                        error!("OR with no left-hand operand");
                        return Value::Invalid;
                    }
                    let right = self.build_value(Vec::new(), 0);
                    stack.push(right);
                    or_last_two_values(&mut stack);
                }
                Token::Not => {
                    add_or_separator = false;
                    let inner = self.build_value(Vec::new(), 0);
                    stack.push(Value::Not(Box::new(inner)));
                }
                Token::Term(term) => stack.push(Value::Term(term)),
                Token::Range(range) => stack.push(Value::Range(range)),
                other => {
                    error!(?other, "token cannot appear in a value");
                    return Value::Invalid;
                }
            }

            if add_or_separator {
                or_last_two_values(&mut stack);
            }
            if parenthesis_level == 0 {
                return stack.pop().unwrap_or(Value::Invalid);
            }
        }
    }
}

/// Replaces the top two stack entries with their OR. The right-hand side
/// is the newer entry.
fn or_last_two_values(stack: &mut Vec<Value>) {
    if let (Some(right), Some(left)) = (stack.pop(), stack.pop()) {
        stack.push(Value::Or(Box::new(left), Box::new(right)));
    }
}

/// Broadcasts a value over every field it applies to, ORing the renditions
/// together. With no fields at all there is nothing to match against.
fn new_leaf_statement(field_names: &[String], value: &Value) -> Statement {
    let Some((first, rest)) = field_names.split_first() else {
        return Statement::always_false();
    };
    let mut statement = value.to_statement(first);
    for field_name in rest {
        statement = Statement::infix(statement, "OR", value.to_statement(field_name));
    }
    statement
}
