//! Passes over finished predicate trees.
//!
//! Trees are immutable, so every pass rebuilds: [`AliasResolver::rewrite`]
//! returns a new tree and [`used_columns`] folds the tree into a list.

use std::collections::HashMap;

use serde::Deserialize;

use crate::ast::statements::Statement;

/// Rewrites column references through an alias table.
///
/// Names with no alias pass through unchanged, so a resolver built from an
/// empty table is the identity. Aliases apply to whatever the parser
/// produced, including schema-resolved internal names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AliasResolver {
    aliases: HashMap<String, String>,
}

impl AliasResolver {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        AliasResolver { aliases }
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Returns a copy of the tree with every aliased column renamed.
    pub fn rewrite(&self, statement: &Statement) -> Statement {
        match statement {
            Statement::ColumnRef(name) => match self.resolve(name) {
                Some(target) => Statement::column(target),
                None => statement.clone(),
            },
            Statement::Literal(_) => statement.clone(),
            Statement::InfixOp { left, op, right } => {
                Statement::infix(self.rewrite(left), op.clone(), self.rewrite(right))
            }
            Statement::PrefixOp { op, args } => Statement::prefix(
                op.clone(),
                args.iter().map(|arg| self.rewrite(arg)).collect(),
            ),
            Statement::Function { name, args } => Statement::function(
                name.clone(),
                args.iter().map(|arg| self.rewrite(arg)).collect(),
            ),
            Statement::NestedProperty { object, property } => {
                Statement::nested_property(self.rewrite(object), self.rewrite(property))
            }
            Statement::ArrayAccess { column, index } => {
                Statement::array_access(self.rewrite(column), self.rewrite(index))
            }
            Statement::Parenthesized(inner) => Statement::parenthesized(self.rewrite(inner)),
        }
    }
}

/// Collects the columns a predicate references, in traversal order with
/// duplicates removed (first occurrence wins).
pub fn used_columns(statement: &Statement) -> Vec<String> {
    let mut columns = Vec::new();
    collect_columns(statement, &mut columns);
    columns
}

fn collect_columns(statement: &Statement, out: &mut Vec<String>) {
    match statement {
        Statement::ColumnRef(name) => {
            if !out.iter().any(|seen| seen == name) {
                out.push(name.clone());
            }
        }
        Statement::Literal(_) => {}
        Statement::InfixOp { left, right, .. } => {
            collect_columns(left, out);
            collect_columns(right, out);
        }
        Statement::PrefixOp { args, .. } | Statement::Function { args, .. } => {
            for arg in args {
                collect_columns(arg, out);
            }
        }
        Statement::NestedProperty { object, property } => {
            collect_columns(object, out);
            collect_columns(property, out);
        }
        Statement::ArrayAccess { column, index } => {
            collect_columns(column, out);
            collect_columns(index, out);
        }
        Statement::Parenthesized(inner) => collect_columns(inner, out),
    }
}
