//! TypeScript const declaration builder.

use quill_codegen::CodeBuilder;

use super::Expr;
use crate::printer::Printer;

/// Builder for TypeScript const declarations initialized with a literal.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: Expr,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Render the const declaration, laying out the initializer with `printer`.
    pub fn render(&self, printer: &Printer, builder: &mut CodeBuilder) {
        let export = if self.exported { "export " } else { "" };

        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        builder.push_indentation().push_raw(&format!(
            "{}const {}{} = ",
            export, self.name, type_annotation
        ));
        printer.write_expr(&self.value, builder);
        builder.push_raw(";\n");
    }
}
