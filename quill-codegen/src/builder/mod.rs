//! Printing building blocks.
//!
//! - [`CodeBuilder`] - Buffer with indentation tracking and JSDoc support
//! - [`Renderable`] / [`CodeFragment`] - Declarations described as lines
//! - [`Indent`] - Indentation unit

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
