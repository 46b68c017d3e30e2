//! Shared code generation utilities for quill code generators.
//!
//! This crate provides the language-agnostic half of quill: the runtime value
//! model, the collaborator traits a target language implements, and the two
//! builders that turn values and declaration descriptors into target AST nodes.
//!
//! # Module Organization
//!
//! - [`value`] - Runtime values decoded from JSON/TOML documents
//! - [`factory`] - Collaborator traits (AstFactory, CommentAttacher)
//! - [`literal`] - Value to literal-expression conversion
//! - [`declaration`] - Type alias declaration construction
//! - [`builder`] - Printing building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`error`] - Decoding and configuration errors
//! - [`testing`] - Recording mocks and test helpers (feature-gated)

pub mod builder;
pub mod declaration;
pub mod error;
pub mod factory;
pub mod literal;
pub mod value;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use declaration::{DeclarationBuilder, TypeAliasSpec};
pub use error::{Error, Result, SourceContext};
pub use factory::{AstFactory, CommentAttacher};
pub use literal::LiteralBuilder;
pub use value::{Number, RuntimeValue};
