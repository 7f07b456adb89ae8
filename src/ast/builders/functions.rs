//! Function call builders (aggregates, string, date, window).
//!
//! Names are canonical; each engine maps them to its own spelling.

use crate::ast::{Fragment, Function};

/// Call any function by canonical name.
pub fn func(name: &str) -> Function {
    Function::new(name)
}

pub fn count(expr: impl Into<Fragment>) -> Function {
    Function::new("COUNT").arg(expr)
}

pub fn count_distinct(expr: impl Into<Fragment>) -> Function {
    Function::new("COUNT").arg(expr).distinct()
}

pub fn sum(expr: impl Into<Fragment>) -> Function {
    Function::new("SUM").arg(expr)
}

pub fn avg(expr: impl Into<Fragment>) -> Function {
    Function::new("AVG").arg(expr)
}

pub fn min(expr: impl Into<Fragment>) -> Function {
    Function::new("MIN").arg(expr)
}

pub fn max(expr: impl Into<Fragment>) -> Function {
    Function::new("MAX").arg(expr)
}

pub fn coalesce<F: Into<Fragment>>(args: impl IntoIterator<Item = F>) -> Function {
    Function::new("COALESCE").args(args)
}

pub fn length(expr: impl Into<Fragment>) -> Function {
    Function::new("LENGTH").arg(expr)
}

pub fn upper(expr: impl Into<Fragment>) -> Function {
    Function::new("UPPER").arg(expr)
}

pub fn lower(expr: impl Into<Fragment>) -> Function {
    Function::new("LOWER").arg(expr)
}

pub fn trim(expr: impl Into<Fragment>) -> Function {
    Function::new("TRIM").arg(expr)
}

/// Trim `chars` from both ends.
pub fn trim_chars(expr: impl Into<Fragment>, chars: impl Into<Fragment>) -> Function {
    Function::new("TRIM").arg(expr).arg(chars)
}

/// Trim `chars` from the start.
pub fn ltrim_chars(expr: impl Into<Fragment>, chars: impl Into<Fragment>) -> Function {
    Function::new("LTRIM").arg(expr).arg(chars)
}

/// Trim `chars` from the end.
pub fn rtrim_chars(expr: impl Into<Fragment>, chars: impl Into<Fragment>) -> Function {
    Function::new("RTRIM").arg(expr).arg(chars)
}

/// SUBSTRING(expr, start, length)
pub fn substring(
    expr: impl Into<Fragment>,
    start: impl Into<Fragment>,
    length: impl Into<Fragment>,
) -> Function {
    Function::new("SUBSTRING").arg(expr).arg(start).arg(length)
}

pub fn now() -> Function {
    Function::new("NOW")
}

pub fn row_number() -> Function {
    Function::new("ROW_NUMBER")
}

pub fn rank() -> Function {
    Function::new("RANK")
}
