//! TypeScript target for quill.
//!
//! This crate supplies the TypeScript side of the quill builders: an AST
//! ([`ast`]), a factory and JSDoc attacher implementing the
//! [`quill_codegen`] collaborator traits, and a [`Printer`] that renders the
//! nodes to source text.
//!
//! # Usage
//!
//! ```
//! use quill_codegen::{RuntimeValue, TypeAliasSpec};
//! use quill_codegen_typescript::{Printer, to_expression, type_alias};
//!
//! let value = RuntimeValue::from_json_str(r#"{ "limit": 10, "tags": ["a", "b"] }"#, "defaults.json")?;
//! let printer = Printer::default();
//!
//! let expr = to_expression(&value).expect("records always produce a node");
//! assert_eq!(printer.print_expr(&expr), "{\n  limit: 10,\n  tags: [\"a\", \"b\"]\n}");
//!
//! let alias = type_alias(&TypeAliasSpec::new("Box", "T").type_param("T").comment("A generic box."));
//! assert_eq!(printer.print_type_alias(&alias), "/** A generic box. */\nexport type Box<T> = T;\n");
//! # Ok::<(), Box<quill_codegen::Error>>(())
//! ```

mod factory;
mod naming;
mod printer;

pub mod ast;
pub mod escape;

use indexmap::IndexMap;
use quill_codegen::{DeclarationBuilder, LiteralBuilder, RuntimeValue, TypeAliasSpec};

pub use ast::{Const, Expr, TypeAliasDeclaration};
pub use escape::QuoteStyle;
pub use factory::{JsDocAttacher, TsFactory};
pub use printer::{Printer, PrinterConfig};

/// Convert `value` into a TypeScript literal with standard string escaping.
///
/// Returns `None` for [`RuntimeValue::Undefined`].
pub fn to_expression(value: &RuntimeValue) -> Option<Expr> {
    LiteralBuilder::new(&TsFactory).expression(value)
}

/// Convert `value` into a TypeScript literal; see
/// [`LiteralBuilder::to_literal_expression`].
pub fn to_literal_expression(value: &RuntimeValue, unescape_strings: bool) -> Option<Expr> {
    LiteralBuilder::new(&TsFactory).to_literal_expression(value, unescape_strings)
}

/// Build a TypeScript array literal; see [`LiteralBuilder::to_array_literal`].
pub fn to_array_literal(items: &[RuntimeValue], multi_line_override: bool) -> Expr {
    LiteralBuilder::new(&TsFactory).to_array_literal(items, multi_line_override)
}

/// Build a TypeScript object literal; see [`LiteralBuilder::to_object_literal`].
pub fn to_object_literal(entries: &IndexMap<String, RuntimeValue>, multi_line: bool) -> Expr {
    LiteralBuilder::new(&TsFactory).to_object_literal(entries, multi_line)
}

/// Build an exported TypeScript type alias with JSDoc attached.
pub fn type_alias(spec: &TypeAliasSpec) -> TypeAliasDeclaration {
    DeclarationBuilder::new(&TsFactory, &JsDocAttacher).build(spec)
}
