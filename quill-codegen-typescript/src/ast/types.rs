//! TypeScript type alias declaration nodes.

use quill_codegen::{CodeFragment, Renderable};

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An unconstrained generic parameter without a default type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: Identifier,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Identifier::new(name),
        }
    }
}

/// A reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub name: String,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Export,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Export => "export",
        }
    }
}

/// A type alias declaration (`export type Name<T> = Ref;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub ty: TypeReference,
    /// Leading JSDoc lines.
    pub leading_docs: Vec<String>,
}

impl TypeAliasDeclaration {
    pub fn new(
        modifiers: Vec<Modifier>,
        name: Identifier,
        type_parameters: Vec<TypeParameter>,
        ty: TypeReference,
    ) -> Self {
        Self {
            modifiers,
            name,
            type_parameters,
            ty,
            leading_docs: Vec::new(),
        }
    }

    pub fn is_exported(&self) -> bool {
        self.modifiers.contains(&Modifier::Export)
    }

    /// The declaration line without documentation.
    fn signature(&self) -> String {
        let modifiers: String = self
            .modifiers
            .iter()
            .map(|m| format!("{} ", m.keyword()))
            .collect();

        let generics = if self.type_parameters.is_empty() {
            String::new()
        } else {
            let params: Vec<&str> = self
                .type_parameters
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            format!("<{}>", params.join(", "))
        };

        format!(
            "{}type {}{} = {};",
            modifiers,
            self.name.as_str(),
            generics,
            self.ty.name
        )
    }
}

impl Renderable for TypeAliasDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if !self.leading_docs.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.leading_docs.clone()));
        }

        fragments.push(CodeFragment::Line(self.signature()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use quill_codegen::{CodeBuilder, Indent, testing::assert_content_eq};

    use super::*;

    fn render(decl: &TypeAliasDeclaration) -> String {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder.emit(decl);
        builder.build()
    }

    #[test]
    fn test_type_alias() {
        let decl = TypeAliasDeclaration::new(
            vec![Modifier::Export],
            Identifier::new("UserId"),
            vec![],
            TypeReference::new("string"),
        );
        assert!(decl.is_exported());
        assert_eq!(render(&decl), "export type UserId = string;\n");
    }

    #[test]
    fn test_type_alias_with_generics() {
        let decl = TypeAliasDeclaration::new(
            vec![Modifier::Export],
            Identifier::new("Pair"),
            vec![TypeParameter::new("K"), TypeParameter::new("V")],
            TypeReference::new("Entry"),
        );
        assert_eq!(render(&decl), "export type Pair<K, V> = Entry;\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let mut decl = TypeAliasDeclaration::new(
            vec![Modifier::Export],
            Identifier::new("Callback"),
            vec![],
            TypeReference::new("Handler"),
        );
        decl.leading_docs.push("A callback function".to_string());
        assert_eq!(
            render(&decl),
            "/** A callback function */\nexport type Callback = Handler;\n"
        );
    }

    #[test]
    fn test_type_alias_with_multi_line_doc() {
        let mut decl = TypeAliasDeclaration::new(
            vec![Modifier::Export],
            Identifier::new("Page"),
            vec![TypeParameter::new("T")],
            TypeReference::new("PageBase"),
        );
        decl.leading_docs.extend([
            "A page of results.".to_string(),
            String::new(),
            "Closes with */ inside.".to_string(),
        ]);
        assert_content_eq(
            "/**\n * A page of results.\n *\n * Closes with *\\/ inside.\n */\nexport type Page<T> = PageBase;\n",
            &render(&decl),
        );
    }

    #[test]
    fn test_private_type_alias() {
        let decl = TypeAliasDeclaration::new(
            vec![],
            Identifier::new("Internal"),
            vec![],
            TypeReference::new("number"),
        );
        assert!(!decl.is_exported());
        assert_eq!(render(&decl), "type Internal = number;\n");
    }
}
