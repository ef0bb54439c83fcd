use super::Expr;

/// A statement node. `If` and `While` bodies are `Vec<Stmt>` blocks rather
/// than a linked chain of program nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl {
        name: String,
        value: Expr,
    },
    Print {
        value: Expr,
    },
    If {
        condition: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    Expression(Expr),
}
