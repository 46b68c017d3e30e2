//! TypeScript implementations of the quill collaborator traits.

use quill_codegen::{AstFactory, CommentAttacher, Number};

use crate::ast::{
    ArrayLiteral, Expr, Identifier, Modifier, ObjectLiteral, Property, StringLiteral,
    TypeAliasDeclaration, TypeParameter, TypeReference,
};

/// Builds [`crate::ast`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsFactory;

impl AstFactory for TsFactory {
    type Expression = Expr;
    type Property = Property;
    type Identifier = Identifier;
    type TypeParameter = TypeParameter;
    type TypeNode = TypeReference;
    type Modifier = Modifier;
    type TypeAlias = TypeAliasDeclaration;

    fn create_null(&self) -> Expr {
        Expr::Null
    }

    fn create_boolean(&self, value: bool) -> Expr {
        Expr::Bool(value)
    }

    fn create_number(&self, value: Number) -> Expr {
        Expr::Number(value)
    }

    fn create_string(&self, value: &str, unescape: bool) -> Expr {
        if unescape {
            Expr::String(StringLiteral::raw(value))
        } else {
            Expr::String(StringLiteral::new(value))
        }
    }

    fn create_array(&self, elements: Vec<Expr>, multi_line: bool) -> Expr {
        Expr::Array(ArrayLiteral::new(elements, multi_line))
    }

    fn create_property(&self, key: &str, value: Expr) -> Property {
        Property::new(key, value)
    }

    fn create_object(&self, properties: Vec<Property>, multi_line: bool) -> Expr {
        Expr::Object(ObjectLiteral::new(properties, multi_line))
    }

    fn create_identifier(&self, name: &str) -> Identifier {
        Identifier::new(name)
    }

    fn create_type_parameter(&self, name: &str) -> TypeParameter {
        TypeParameter::new(name)
    }

    fn create_type_reference(&self, name: &str) -> TypeReference {
        TypeReference::new(name)
    }

    fn create_export_modifier(&self) -> Modifier {
        Modifier::Export
    }

    fn create_type_alias(
        &self,
        modifiers: Vec<Modifier>,
        name: Identifier,
        type_parameters: Vec<TypeParameter>,
        ty: TypeReference,
    ) -> TypeAliasDeclaration {
        TypeAliasDeclaration::new(modifiers, name, type_parameters, ty)
    }
}

/// Attaches JSDoc lines to type alias declarations.
///
/// Lines containing line breaks are split so each stored entry is one
/// comment line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsDocAttacher;

impl CommentAttacher<TypeAliasDeclaration> for JsDocAttacher {
    fn attach_leading_comments(&self, node: &mut TypeAliasDeclaration, lines: &[String]) {
        node.leading_docs.extend(
            lines
                .iter()
                .flat_map(|line| line.split('\n'))
                .map(|line| line.trim_end_matches('\r').to_string()),
        );
    }
}
