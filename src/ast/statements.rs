/// A node of the SQL predicate tree.
///
/// This is what the parser produces and what the renderer and the visitor
/// passes consume. The tree is immutable once built; passes that change it
/// (like alias resolution) rebuild it instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Reference to a column, resolved or not
    ///
    /// # Example
    /// ```text
    /// "host.name"
    /// ```
    ColumnRef(String),

    /// Opaque rendered text: a quoted string, a boolean constant, `NOT NULL`
    ///
    /// # Examples
    /// ```text
    /// 'jakarta'
    /// true
    /// ```
    Literal(String),

    /// Binary operation
    ///
    /// Comparison operators carry their surrounding spaces in the operator
    /// string (`" >= "`, `" = "`); word operators (`AND`, `OR`, `IS`,
    /// `ILIKE`) do not, and the renderer spaces and parenthesizes them.
    ///
    /// # Example
    /// ```text
    /// ("title" = 'jakarta' OR "text" = 'jakarta')
    /// ```
    InfixOp {
        left: Box<Statement>,
        op: String,
        right: Box<Statement>,
    },

    /// Prefix operation over one or more arguments
    ///
    /// # Example
    /// ```text
    /// NOT ("status" = 'pending')
    /// ```
    PrefixOp {
        op: String,
        args: Vec<Statement>,
    },

    /// Function call
    ///
    /// # Example
    /// ```text
    /// lower("title")
    /// ```
    Function {
        name: String,
        args: Vec<Statement>,
    },

    /// Access to a property of an object-typed column
    ///
    /// # Example
    /// ```text
    /// "request".path
    /// ```
    NestedProperty {
        object: Box<Statement>,
        property: Box<Statement>,
    },

    /// Access to one element of an array-typed column
    ///
    /// # Example
    /// ```text
    /// "tags"[1]
    /// ```
    ArrayAccess {
        column: Box<Statement>,
        index: Box<Statement>,
    },

    /// Explicit grouping, kept so top-level parentheses survive rendering
    Parenthesized(Box<Statement>),
}

impl Statement {
    pub fn column(name: impl Into<String>) -> Self {
        Statement::ColumnRef(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Statement::Literal(text.into())
    }

    pub fn infix(left: Statement, op: impl Into<String>, right: Statement) -> Self {
        Statement::InfixOp {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    pub fn prefix(op: impl Into<String>, args: Vec<Statement>) -> Self {
        Statement::PrefixOp {
            op: op.into(),
            args,
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<Statement>) -> Self {
        Statement::Function {
            name: name.into(),
            args,
        }
    }

    pub fn nested_property(object: Statement, property: Statement) -> Self {
        Statement::NestedProperty {
            object: Box::new(object),
            property: Box::new(property),
        }
    }

    pub fn array_access(column: Statement, index: Statement) -> Self {
        Statement::ArrayAccess {
            column: Box::new(column),
            index: Box::new(index),
        }
    }

    pub fn parenthesized(inner: Statement) -> Self {
        Statement::Parenthesized(Box::new(inner))
    }

    /// The predicate that matches everything. An empty query renders to this.
    pub fn always_true() -> Self {
        Statement::Literal("true".to_string())
    }

    /// The predicate that matches nothing. Malformed input degrades to this.
    pub fn always_false() -> Self {
        Statement::Literal("false".to_string())
    }

    /// True when this subtree is a `NOT (...)` at its root.
    pub fn is_not_rooted(&self) -> bool {
        matches!(self, Statement::PrefixOp { op, .. } if op == "NOT")
    }
}
