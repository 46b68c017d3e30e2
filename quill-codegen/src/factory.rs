//! Collaborator traits implemented by target languages.
//!
//! The builders in this crate never construct syntax themselves. They drive an
//! [`AstFactory`] for node construction and a [`CommentAttacher`] for leading
//! documentation, so a target language (or a test) supplies both.

use crate::value::Number;

/// Node constructors for a target syntax tree.
///
/// Implementations are expected to be stateless (or call-scoped) and safe to
/// call repeatedly and reentrantly. Every call returns a fresh, exclusively
/// owned node.
pub trait AstFactory {
    /// Any expression node; literal builders return this type.
    type Expression;
    /// A `key: value` entry of an object literal.
    type Property;
    type Identifier;
    /// A generic parameter of a declaration.
    type TypeParameter;
    /// A type position node (e.g. a type reference).
    type TypeNode;
    /// A declaration modifier such as `export`.
    type Modifier;
    /// A type alias declaration.
    type TypeAlias;

    /// `null`
    fn create_null(&self) -> Self::Expression;

    /// `true` / `false`
    fn create_boolean(&self, value: bool) -> Self::Expression;

    /// A numeric literal carrying `value` exactly, including negative and
    /// non-finite values.
    fn create_number(&self, value: Number) -> Self::Expression;

    /// A string literal. With `unescape` set, the text is embedded as-is
    /// instead of being re-escaped.
    fn create_string(&self, value: &str, unescape: bool) -> Self::Expression;

    /// An array literal with the given elements, laid out on one line or one
    /// element per line.
    fn create_array(&self, elements: Vec<Self::Expression>, multi_line: bool)
    -> Self::Expression;

    fn create_property(&self, key: &str, value: Self::Expression) -> Self::Property;

    /// An object literal with the given properties, laid out on one line or
    /// one property per line.
    fn create_object(&self, properties: Vec<Self::Property>, multi_line: bool)
    -> Self::Expression;

    fn create_identifier(&self, name: &str) -> Self::Identifier;

    /// An unconstrained generic parameter without a default.
    fn create_type_parameter(&self, name: &str) -> Self::TypeParameter;

    fn create_type_reference(&self, name: &str) -> Self::TypeNode;

    fn create_export_modifier(&self) -> Self::Modifier;

    fn create_type_alias(
        &self,
        modifiers: Vec<Self::Modifier>,
        name: Self::Identifier,
        type_parameters: Vec<Self::TypeParameter>,
        ty: Self::TypeNode,
    ) -> Self::TypeAlias;
}

/// Attaches leading documentation to a node.
pub trait CommentAttacher<N> {
    /// Decorate `node` with `lines` as leading documentation, in order.
    fn attach_leading_comments(&self, node: &mut N, lines: &[String]);
}
