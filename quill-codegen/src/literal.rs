//! Conversion of runtime values into literal expression nodes.
//!
//! [`LiteralBuilder`] dispatches on the [`RuntimeValue`] tag and drives an
//! [`AstFactory`] to construct the matching literal. `Undefined` values produce
//! no node; the array and object builders drop them instead of failing.

use indexmap::IndexMap;

use crate::{factory::AstFactory, value::RuntimeValue};

/// Builds literal expressions through a borrowed [`AstFactory`].
///
/// # Example
///
/// ```ignore
/// let builder = LiteralBuilder::new(&factory);
/// let expr = builder.to_literal_expression(&value, false);
/// ```
#[derive(Debug)]
pub struct LiteralBuilder<'f, F> {
    factory: &'f F,
}

impl<'f, F: AstFactory> LiteralBuilder<'f, F> {
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Convert `value` into a literal expression.
    ///
    /// Returns `None` only for [`RuntimeValue::Undefined`]. `unescape_strings`
    /// applies to a top-level string only: values nested in arrays and records
    /// are always escaped.
    pub fn to_literal_expression(
        &self,
        value: &RuntimeValue,
        unescape_strings: bool,
    ) -> Option<F::Expression> {
        let expr = match value {
            RuntimeValue::Array(items) => self.to_array_literal(items, false),
            RuntimeValue::Record(entries) => self.to_object_literal(entries, true),
            RuntimeValue::Number(n) => self.factory.create_number(*n),
            RuntimeValue::Bool(b) => self.factory.create_boolean(*b),
            RuntimeValue::String(s) => self.factory.create_string(s, unescape_strings),
            RuntimeValue::Null => self.factory.create_null(),
            RuntimeValue::Undefined => return None,
        };
        Some(expr)
    }

    /// Convert `value` with standard string escaping.
    pub fn expression(&self, value: &RuntimeValue) -> Option<F::Expression> {
        self.to_literal_expression(value, false)
    }

    /// Build an array literal from `items`, skipping undefined entries.
    ///
    /// The literal is multi-line when the first item is object-like (a record
    /// or `null`) or when `multi_line_override` is set. Later items never
    /// affect the layout.
    pub fn to_array_literal(
        &self,
        items: &[RuntimeValue],
        multi_line_override: bool,
    ) -> F::Expression {
        let elements: Vec<F::Expression> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let expr = self.expression(item);
                if expr.is_none() {
                    log::trace!("dropping undefined array element at index {}", index);
                }
                expr
            })
            .collect();

        let first_is_object = items.first().is_some_and(RuntimeValue::is_object_like);
        self.factory
            .create_array(elements, first_is_object || multi_line_override)
    }

    /// Build an object literal from `entries` in insertion order, omitting
    /// entries whose value is undefined.
    pub fn to_object_literal(
        &self,
        entries: &IndexMap<String, RuntimeValue>,
        multi_line: bool,
    ) -> F::Expression {
        let properties: Vec<F::Property> = entries
            .iter()
            .filter_map(|(key, value)| match self.expression(value) {
                Some(initializer) => Some(self.factory.create_property(key, initializer)),
                None => {
                    log::trace!("dropping undefined property '{}'", key);
                    None
                }
            })
            .collect();

        self.factory.create_object(properties, multi_line)
    }
}
