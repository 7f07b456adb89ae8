//! Columns, aliases and literal values.

use crate::ast::{Alias, Column, Fragment};
use crate::value::Value;

/// Alias that doubles as the table name.
pub fn alias(name: &str) -> Alias {
    Alias::new(name)
}

/// Unqualified column reference.
pub fn col(name: &str) -> Column {
    Column::new(name)
}

/// Unqualified `*`.
pub fn star() -> Column {
    Column::all()
}

/// Literal value, bound as a parameter.
pub fn val(value: impl Into<Value>) -> Fragment {
    Fragment::Value(value.into())
}

/// SQL NULL, bound as a parameter.
pub fn null() -> Fragment {
    Fragment::Value(Value::Null)
}
