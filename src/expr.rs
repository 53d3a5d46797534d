use crate::token::Token;

/// Parser-assigned identity for variable-like nodes (`Variable`, `Assign`,
/// `This`, `Super`).  The resolver keys its binding-depth side table on this
/// id; absence from the table means the name is a global.
pub type ExprId = usize;

#[derive(Debug)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// `and` / `or`; short-circuiting, so kept apart from `Binary`.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    Unary {
        operator: Token,
        right: Box<Expr>,
    },

    Grouping(Box<Expr>),

    /// The literal token itself carries the decoded payload.
    Literal(Token),

    Variable {
        id: ExprId,
        name: Token,
    },

    Assign {
        id: ExprId,
        name: Token,
        value: Box<Expr>,
    },

    Call {
        callee: Box<Expr>,
        /// Closing parenthesis, kept for error-site reporting.
        paren: Token,
        arguments: Vec<Expr>,
    },

    /// Property read.
    Get {
        object: Box<Expr>,
        name: Token,
    },

    /// Property write.
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },

    This {
        id: ExprId,
        keyword: Token,
    },

    Super {
        id: ExprId,
        keyword: Token,
        method: Token,
    },
}
