//! Rendering of predicate trees to SQL text.
//!
//! The output is a WHERE-clause fragment: `AND`/`OR` chains come back
//! fully parenthesized, so the caller can splice the result into a larger
//! query without thinking about precedence.

use crate::ast::statements::Statement;

/// Renders a predicate tree as a SQL fragment.
pub fn as_string(statement: &Statement) -> String {
    match statement {
        Statement::ColumnRef(name) => quote_identifier(name),
        Statement::Literal(text) => text.clone(),
        Statement::InfixOp { left, op, right } => {
            let lhs = as_string(left);
            let rhs = as_string(right);
            if op == "AND" || op == "OR" {
                format!("({lhs} {op} {rhs})")
            } else if op.contains("LIKE") || op == "IS" || op == "IN" || op == "NOT IN" {
                format!("{lhs} {op} {rhs}")
            } else {
                // comparison operators carry their own spacing
                format!("{lhs}{op}{rhs}")
            }
        }
        Statement::PrefixOp { op, args } => {
            let rendered: Vec<String> = args.iter().map(as_string).collect();
            format!("{} ({})", op, rendered.join(", "))
        }
        Statement::Function { name, args } => {
            let rendered: Vec<String> = args.iter().map(as_string).collect();
            format!("{}({})", name, rendered.join(","))
        }
        Statement::NestedProperty { object, property } => {
            format!("{}.{}", as_string(object), as_string(property))
        }
        Statement::ArrayAccess { column, index } => {
            format!("{}[{}]", as_string(column), as_string(index))
        }
        Statement::Parenthesized(inner) => format!("({})", as_string(inner)),
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\\\""))
}
