//! TypeScript AST nodes produced by [`TsFactory`](crate::TsFactory).
//!
//! Literal expressions and type alias declarations are plain owned values;
//! [`Printer`](crate::Printer) turns them into source text.

mod consts;
mod expr;
mod types;

pub use consts::Const;
pub use expr::{ArrayLiteral, Expr, ObjectLiteral, Property, StringLiteral};
pub use types::{Identifier, Modifier, TypeAliasDeclaration, TypeParameter, TypeReference};
