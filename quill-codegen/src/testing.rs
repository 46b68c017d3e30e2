//! Test utilities for literal and declaration builders.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::cell::Cell;

use crate::{
    factory::{AstFactory, CommentAttacher},
    value::Number,
};

/// Shape of an expression recorded by [`RecordingFactory`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Null,
    Bool(bool),
    Number(Number),
    String {
        value: String,
        unescaped: bool,
    },
    Array {
        elements: Vec<Shape>,
        multi_line: bool,
    },
    Object {
        properties: Vec<(String, Shape)>,
        multi_line: bool,
    },
}

impl Shape {
    /// Create a string shape.
    pub fn string(value: impl Into<String>, unescaped: bool) -> Self {
        Self::String {
            value: value.into(),
            unescaped,
        }
    }
}

/// Shape of a type alias recorded by [`RecordingFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasShape {
    pub modifiers: Vec<String>,
    pub name: String,
    pub type_parameters: Vec<String>,
    pub referenced_type: String,
    pub docs: Vec<String>,
}

/// An [`AstFactory`] that builds plain [`Shape`] values and counts calls.
#[derive(Debug, Default)]
pub struct RecordingFactory {
    calls: Cell<usize>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of constructor calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl AstFactory for RecordingFactory {
    type Expression = Shape;
    type Property = (String, Shape);
    type Identifier = String;
    type TypeParameter = String;
    type TypeNode = String;
    type Modifier = String;
    type TypeAlias = AliasShape;

    fn create_null(&self) -> Shape {
        self.record();
        Shape::Null
    }

    fn create_boolean(&self, value: bool) -> Shape {
        self.record();
        Shape::Bool(value)
    }

    fn create_number(&self, value: Number) -> Shape {
        self.record();
        Shape::Number(value)
    }

    fn create_string(&self, value: &str, unescape: bool) -> Shape {
        self.record();
        Shape::string(value, unescape)
    }

    fn create_array(&self, elements: Vec<Shape>, multi_line: bool) -> Shape {
        self.record();
        Shape::Array {
            elements,
            multi_line,
        }
    }

    fn create_property(&self, key: &str, value: Shape) -> (String, Shape) {
        self.record();
        (key.to_string(), value)
    }

    fn create_object(&self, properties: Vec<(String, Shape)>, multi_line: bool) -> Shape {
        self.record();
        Shape::Object {
            properties,
            multi_line,
        }
    }

    fn create_identifier(&self, name: &str) -> String {
        self.record();
        name.to_string()
    }

    fn create_type_parameter(&self, name: &str) -> String {
        self.record();
        name.to_string()
    }

    fn create_type_reference(&self, name: &str) -> String {
        self.record();
        name.to_string()
    }

    fn create_export_modifier(&self) -> String {
        self.record();
        "export".to_string()
    }

    fn create_type_alias(
        &self,
        modifiers: Vec<String>,
        name: String,
        type_parameters: Vec<String>,
        ty: String,
    ) -> AliasShape {
        self.record();
        AliasShape {
            modifiers,
            name,
            type_parameters,
            referenced_type: ty,
            docs: Vec::new(),
        }
    }
}

/// A [`CommentAttacher`] for [`AliasShape`] that counts invocations.
#[derive(Debug, Default)]
pub struct RecordingAttacher {
    invocations: Cell<usize>,
}

impl RecordingAttacher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> usize {
        self.invocations.get()
    }
}

impl CommentAttacher<AliasShape> for RecordingAttacher {
    fn attach_leading_comments(&self, node: &mut AliasShape, lines: &[String]) {
        self.invocations.set(self.invocations.get() + 1);
        node.docs.extend(lines.iter().cloned());
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (contents differ only in line endings)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
