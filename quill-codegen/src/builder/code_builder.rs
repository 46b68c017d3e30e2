//! Indentation-aware output buffer.

use super::{CodeFragment, Indent, Renderable};

/// Text buffer that tracks an indentation level.
///
/// Printers walk a tree and write through the `push_*` methods; nested
/// literals open their children inline with [`push_newline`](Self::push_newline).
///
/// # Example
///
/// ```
/// use quill_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
/// builder
///     .push_jsdoc(&["Page size."])
///     .push_indentation()
///     .push_raw("export const limit = [")
///     .push_indent()
///     .push_newline()
///     .push_raw("10")
///     .push_dedent()
///     .push_newline()
///     .push_raw("];\n");
/// assert_eq!(
///     builder.build(),
///     "/** Page size. */\nexport const limit = [\n  10\n];\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Write `s` on its own line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write `s` as-is.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Break the line and indent the next one to the current level.
    pub fn push_newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.write_indent();
        self
    }

    /// Write the current indentation only.
    pub fn push_indentation(&mut self) -> &mut Self {
        self.write_indent();
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write a JSDoc comment.
    ///
    /// A single line renders as `/** text */`, several lines as a block.
    /// Embedded line breaks start a new comment line and `*/` is written as
    /// `*\/` so the comment cannot end early.
    pub fn push_jsdoc<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        let lines: Vec<String> = lines
            .iter()
            .flat_map(|line| line.as_ref().split('\n'))
            .map(|line| line.trim_end_matches('\r').replace("*/", "*\\/"))
            .collect();

        match lines.as_slice() {
            [] => {}
            [single] => {
                self.push_line(&format!("/** {} */", single));
            }
            many => {
                self.push_line("/**");
                for line in many {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            match fragment {
                CodeFragment::Line(s) => self.push_line(&s),
                CodeFragment::JsDoc(lines) => self.push_jsdoc(&lines),
            };
        }
        self
    }

    /// Consume the builder and return the written text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.push_to(&mut self.buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jsdoc(lines: &[&str]) -> String {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder.push_jsdoc(lines);
        builder.build()
    }

    #[test]
    fn test_line_indentation() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder
            .push_line("{")
            .push_indent()
            .push_line("a;")
            .push_dedent()
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n    a;\n}\n");
    }

    #[test]
    fn test_newline_keeps_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder
            .push_raw("{")
            .push_indent()
            .push_newline()
            .push_raw("a: 1")
            .push_dedent()
            .push_newline()
            .push_raw("}");
        assert_eq!(builder.build(), "{\n\ta: 1\n}");
    }

    #[test]
    fn test_single_line_jsdoc() {
        assert_eq!(jsdoc(&["A generic box."]), "/** A generic box. */\n");
    }

    #[test]
    fn test_multi_line_jsdoc_is_indented() {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder
            .push_indent()
            .push_jsdoc(&["First line.", "", "@deprecated"]);
        assert_eq!(
            builder.build(),
            "  /**\n   * First line.\n   *\n   * @deprecated\n   */\n"
        );
    }

    #[test]
    fn test_jsdoc_splits_embedded_newlines() {
        assert_eq!(jsdoc(&["one\r\ntwo"]), "/**\n * one\n * two\n */\n");
    }

    #[test]
    fn test_jsdoc_escapes_terminator() {
        assert_eq!(jsdoc(&["ends */ early"]), "/** ends *\\/ early */\n");
    }

    #[test]
    fn test_empty_jsdoc_writes_nothing() {
        assert_eq!(jsdoc(&[]), "");
    }

    #[test]
    fn test_emit_fragments() {
        struct Alias;
        impl Renderable for Alias {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::JsDoc(vec!["Doc.".to_string()]),
                    CodeFragment::Line("type A = B;".to_string()),
                ]
            }
        }

        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder.push_indent().emit(&Alias);
        assert_eq!(builder.build(), "  /** Doc. */\n  type A = B;\n");
    }
}
