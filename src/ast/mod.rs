//! The parsed, structured representation of an Igbo program.
//!
//! Statement sequences are plain `Vec<Stmt>` and each node kind carries
//! exactly the fields it needs, rather than the uniform three-child shape
//! of the language's reference implementation — the cleaner of the two
//! representations its own design notes call for.

mod expr;
mod stmt;

pub use expr::Expr;
pub use stmt::Stmt;

/// A complete parsed program: an ordered list of top-level statements.
pub type Program = Vec<Stmt>;
