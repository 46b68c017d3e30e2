//! Source text rendering for TypeScript AST nodes.

use quill_codegen::{CodeBuilder, Indent, Result, SourceContext};
use serde::{Deserialize, Serialize};

use crate::{
    ast::{ArrayLiteral, Const, Expr, ObjectLiteral, StringLiteral, TypeAliasDeclaration},
    escape::{self, QuoteStyle},
    naming,
};

/// Printer settings.
///
/// Loaded from TOML with kebab-case keys, every key optional:
///
/// ```toml
/// indent-width = 4
/// tabs = false
/// quote = "single"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PrinterConfig {
    /// Spaces per indent level; ignored when `tabs` is set.
    pub indent_width: u8,
    pub tabs: bool,
    /// Preferred string delimiter.
    pub quote: QuoteStyle,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            tabs: false,
            quote: QuoteStyle::Double,
        }
    }
}

impl PrinterConfig {
    /// Parse a printer configuration from TOML source.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| SourceContext::new(src, filename).config_error(e))
    }

    /// The indentation unit described by this configuration.
    pub fn indent(&self) -> Indent {
        if self.tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_width)
        }
    }
}

/// Renders literal expressions and declarations to TypeScript source.
///
/// Single-line composites print as `[1, 2]` and `{ a: 1 }`; multi-line ones
/// put each child on its own line one level deeper, without a trailing comma.
/// Empty composites always print as `[]` and `{}`.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrinterConfig,
}

impl Printer {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// A fresh CodeBuilder using the configured indentation.
    pub fn code_builder(&self) -> CodeBuilder {
        CodeBuilder::new(self.config.indent())
    }

    /// Render an expression, without a trailing newline.
    pub fn print_expr(&self, expr: &Expr) -> String {
        let mut builder = self.code_builder();
        self.write_expr(expr, &mut builder);
        builder.build()
    }

    /// Render a type alias declaration with its leading documentation.
    pub fn print_type_alias(&self, decl: &TypeAliasDeclaration) -> String {
        let mut builder = self.code_builder();
        builder.emit(decl);
        builder.build()
    }

    /// Render a const declaration.
    pub fn print_const(&self, decl: &Const) -> String {
        let mut builder = self.code_builder();
        decl.render(self, &mut builder);
        builder.build()
    }

    /// Write `expr` at the builder's current position.
    ///
    /// Line breaks inside multi-line literals are indented relative to the
    /// builder's current level, so the expression can be embedded anywhere.
    pub fn write_expr(&self, expr: &Expr, builder: &mut CodeBuilder) {
        match expr {
            Expr::Null => {
                builder.push_raw("null");
            }
            Expr::Bool(value) => {
                builder.push_raw(if *value { "true" } else { "false" });
            }
            Expr::Number(value) => {
                builder.push_raw(&escape::format_number(*value));
            }
            Expr::String(literal) => {
                builder.push_raw(&self.string_text(literal));
            }
            Expr::Array(array) => self.write_array(array, builder),
            Expr::Object(object) => self.write_object(object, builder),
        }
    }

    fn string_text(&self, literal: &StringLiteral) -> String {
        if literal.raw {
            escape::raw_string(&literal.value, self.config.quote)
        } else {
            escape::escape_string(&literal.value, self.config.quote)
        }
    }

    fn key_text(&self, key: &str) -> String {
        if naming::is_identifier(key) {
            key.to_string()
        } else {
            escape::escape_string(key, self.config.quote)
        }
    }

    fn write_array(&self, array: &ArrayLiteral, builder: &mut CodeBuilder) {
        if array.is_empty() {
            builder.push_raw("[]");
            return;
        }

        builder.push_raw("[");
        if array.multi_line {
            builder.push_indent();
            for (i, element) in array.elements.iter().enumerate() {
                if i > 0 {
                    builder.push_raw(",");
                }
                builder.push_newline();
                self.write_expr(element, builder);
            }
            builder.push_dedent().push_newline();
        } else {
            for (i, element) in array.elements.iter().enumerate() {
                if i > 0 {
                    builder.push_raw(", ");
                }
                self.write_expr(element, builder);
            }
        }
        builder.push_raw("]");
    }

    fn write_object(&self, object: &ObjectLiteral, builder: &mut CodeBuilder) {
        if object.is_empty() {
            builder.push_raw("{}");
            return;
        }

        if object.multi_line {
            builder.push_raw("{").push_indent();
            for (i, prop) in object.properties.iter().enumerate() {
                if i > 0 {
                    builder.push_raw(",");
                }
                builder.push_newline();
                builder.push_raw(&format!("{}: ", self.key_text(&prop.key)));
                self.write_expr(&prop.value, builder);
            }
            builder.push_dedent().push_newline().push_raw("}");
        } else {
            builder.push_raw("{ ");
            for (i, prop) in object.properties.iter().enumerate() {
                if i > 0 {
                    builder.push_raw(", ");
                }
                builder.push_raw(&format!("{}: ", self.key_text(&prop.key)));
                self.write_expr(&prop.value, builder);
            }
            builder.push_raw(" }");
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_codegen::Number;

    use super::*;
    use crate::ast::Property;

    fn num(v: i64) -> Expr {
        Expr::Number(Number::Int(v))
    }

    fn obj(props: Vec<(&str, Expr)>, multi_line: bool) -> Expr {
        Expr::Object(ObjectLiteral::new(
            props
                .into_iter()
                .map(|(k, v)| Property::new(k, v))
                .collect(),
            multi_line,
        ))
    }

    fn arr(elements: Vec<Expr>, multi_line: bool) -> Expr {
        Expr::Array(ArrayLiteral::new(elements, multi_line))
    }

    #[test]
    fn test_scalars() {
        let printer = Printer::default();
        assert_eq!(printer.print_expr(&Expr::Null), "null");
        assert_eq!(printer.print_expr(&Expr::Bool(true)), "true");
        assert_eq!(printer.print_expr(&num(-7)), "-7");
        assert_eq!(
            printer.print_expr(&Expr::String(StringLiteral::new("a\"b"))),
            r#""a\"b""#
        );
    }

    #[test]
    fn test_empty_composites() {
        let printer = Printer::default();
        assert_eq!(printer.print_expr(&arr(vec![], true)), "[]");
        assert_eq!(printer.print_expr(&obj(vec![], true)), "{}");
        assert_eq!(printer.print_expr(&obj(vec![], false)), "{}");
    }

    #[test]
    fn test_single_line_composites() {
        let printer = Printer::default();
        assert_eq!(
            printer.print_expr(&arr(vec![num(1), num(2), num(3)], false)),
            "[1, 2, 3]"
        );
        assert_eq!(
            printer.print_expr(&obj(vec![("a", num(1)), ("b", Expr::Null)], false)),
            "{ a: 1, b: null }"
        );
    }

    #[test]
    fn test_multi_line_array_of_objects() {
        let printer = Printer::default();
        let expr = arr(
            vec![
                obj(vec![("a", num(1))], true),
                obj(vec![("b", num(2))], true),
            ],
            true,
        );
        assert_eq!(
            printer.print_expr(&expr),
            "[\n  {\n    a: 1\n  },\n  {\n    b: 2\n  }\n]"
        );
    }

    #[test]
    fn test_multi_line_child_in_single_line_parent() {
        let printer = Printer::default();
        let expr = arr(vec![num(1), obj(vec![("a", num(1))], true)], false);
        assert_eq!(printer.print_expr(&expr), "[1, {\n  a: 1\n}]");
    }

    #[test]
    fn test_quoted_keys() {
        let printer = Printer::default();
        let expr = obj(
            vec![("content-type", num(1)), ("200", num(2)), ("ok", num(3))],
            false,
        );
        assert_eq!(
            printer.print_expr(&expr),
            r#"{ "content-type": 1, "200": 2, ok: 3 }"#
        );
    }

    #[test]
    fn test_single_quote_config() {
        let printer = Printer::new(PrinterConfig {
            quote: QuoteStyle::Single,
            ..PrinterConfig::default()
        });
        let expr = obj(
            vec![("x-y", Expr::String(StringLiteral::new("it's")))],
            false,
        );
        assert_eq!(printer.print_expr(&expr), r#"{ 'x-y': 'it\'s' }"#);
    }

    #[test]
    fn test_raw_string() {
        let printer = Printer::default();
        let expr = Expr::String(StringLiteral::raw(r"line\nbreak"));
        assert_eq!(printer.print_expr(&expr), r#""line\nbreak""#);
    }

    #[test]
    fn test_tab_indent() {
        let printer = Printer::new(PrinterConfig {
            tabs: true,
            ..PrinterConfig::default()
        });
        let expr = obj(vec![("a", arr(vec![num(1)], true))], true);
        assert_eq!(printer.print_expr(&expr), "{\n\ta: [\n\t\t1\n\t]\n}");
    }

    #[test]
    fn test_config_defaults() {
        let config = PrinterConfig::from_toml_str("", "printer.toml").unwrap();
        assert_eq!(config, PrinterConfig::default());
        assert_eq!(config.indent(), Indent::TYPESCRIPT);
    }

    #[test]
    fn test_config_from_toml() {
        let config = PrinterConfig::from_toml_str(
            "indent-width = 4\nquote = \"single\"\n",
            "printer.toml",
        )
        .unwrap();
        assert_eq!(config.indent(), Indent::Spaces(4));
        assert_eq!(config.quote, QuoteStyle::Single);
        assert!(!config.tabs);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let err = PrinterConfig::from_toml_str("semicolons = false\n", "printer.toml").unwrap_err();
        assert!(err.to_string().starts_with("invalid printer configuration in 'printer.toml'"));
    }

    #[test]
    fn test_config_rejects_unknown_quote() {
        let err = PrinterConfig::from_toml_str("quote = \"backtick\"\n", "printer.toml").unwrap_err();
        assert!(err.to_string().contains("printer.toml"));
    }
}
