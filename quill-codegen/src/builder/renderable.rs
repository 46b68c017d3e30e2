//! Fragments emitted by declaration nodes.

/// A piece of printed declaration output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line at the current indentation; a newline is appended.
    Line(String),
    /// Leading documentation, one entry per comment line.
    JsDoc(Vec<String>),
}

/// A node that prints as a sequence of [`CodeFragment`]s.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
