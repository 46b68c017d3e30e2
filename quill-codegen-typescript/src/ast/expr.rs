//! TypeScript/JavaScript literal expression nodes.

use quill_codegen::Number;

/// A literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// A numeric literal, printed with a leading `-` when negative.
    Number(Number),
    String(StringLiteral),
    Array(ArrayLiteral),
    Object(ObjectLiteral),
}

impl Expr {
    /// The layout flag of a composite literal; scalars are always single-line.
    pub fn is_multi_line(&self) -> bool {
        match self {
            Self::Array(arr) => arr.multi_line,
            Self::Object(obj) => obj.multi_line,
            _ => false,
        }
    }
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    /// Embed `value` verbatim instead of escaping it.
    pub raw: bool,
}

impl StringLiteral {
    /// Create a string literal that is escaped when printed.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: false,
        }
    }

    /// Create a string literal whose text is already valid source content.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: true,
        }
    }
}

/// An array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expr>,
    /// Put each element on its own line.
    pub multi_line: bool,
}

impl ArrayLiteral {
    pub fn new(elements: Vec<Expr>, multi_line: bool) -> Self {
        Self {
            elements,
            multi_line,
        }
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A `key: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
    /// Put each property on its own line.
    pub multi_line: bool,
}

impl ObjectLiteral {
    pub fn new(properties: Vec<Property>, multi_line: bool) -> Self {
        Self {
            properties,
            multi_line,
        }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
