//! Type alias declaration construction.

use crate::factory::{AstFactory, CommentAttacher};

/// Describes an exported type alias: `name<type_parameters> = referenced_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasSpec {
    name: String,
    referenced_type: String,
    type_parameters: Vec<String>,
    comments: Option<Vec<String>>,
}

impl TypeAliasSpec {
    pub fn new(name: impl Into<String>, referenced_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            referenced_type: referenced_type.into(),
            type_parameters: Vec::new(),
            comments: None,
        }
    }

    /// Add a generic type parameter.
    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Add several generic type parameters, in order.
    pub fn type_params(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.type_parameters.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a leading documentation line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Replace the leading documentation lines.
    pub fn comments(mut self, lines: Option<Vec<String>>) -> Self {
        self.comments = lines;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn referenced_type(&self) -> &str {
        &self.referenced_type
    }

    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    /// The documentation lines, if any were given.
    pub fn comment_lines(&self) -> Option<&[String]> {
        self.comments.as_deref()
    }
}

/// Builds type alias declarations through a borrowed [`AstFactory`] and
/// [`CommentAttacher`].
#[derive(Debug)]
pub struct DeclarationBuilder<'f, F, C> {
    factory: &'f F,
    attacher: &'f C,
}

impl<'f, F, C> DeclarationBuilder<'f, F, C>
where
    F: AstFactory,
    C: CommentAttacher<F::TypeAlias>,
{
    pub fn new(factory: &'f F, attacher: &'f C) -> Self {
        Self { factory, attacher }
    }

    /// Build an exported type alias binding `name` to a reference of
    /// `referenced_type`.
    ///
    /// Type parameters become unconstrained generic parameters in the given
    /// order. Comments are attached only when present and non-empty. Names are
    /// not validated.
    pub fn build_type_alias_declaration(
        &self,
        name: &str,
        referenced_type: &str,
        type_parameters: &[String],
        comments: Option<&[String]>,
    ) -> F::TypeAlias {
        let mut node = self.factory.create_type_alias(
            vec![self.factory.create_export_modifier()],
            self.factory.create_identifier(name),
            type_parameters
                .iter()
                .map(|param| self.factory.create_type_parameter(param))
                .collect(),
            self.factory.create_type_reference(referenced_type),
        );

        if let Some(lines) = comments.filter(|lines| !lines.is_empty()) {
            self.attacher.attach_leading_comments(&mut node, lines);
        }

        log::debug!(
            "built type alias '{}' = '{}' ({} type parameters)",
            name,
            referenced_type,
            type_parameters.len()
        );
        node
    }

    /// Build the declaration described by `spec`.
    pub fn build(&self, spec: &TypeAliasSpec) -> F::TypeAlias {
        self.build_type_alias_declaration(
            spec.name(),
            spec.referenced_type(),
            spec.type_parameters(),
            spec.comment_lines(),
        )
    }
}
