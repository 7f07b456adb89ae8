//! Raw SQL with positional splices.

use super::Fragment;
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

/// What gets spliced into a `{n}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArg {
    /// Compiled in place as a nested fragment
    Fragment(Fragment),
    /// Bound as a parameter
    Value(Value),
}

/// Escape hatch: literal SQL with `{0}`, `{1}` placeholders.
///
/// `{{` and `}}` produce literal braces. Arguments are referenced by
/// index and may be used more than once or not at all.
///
/// ```
/// use sqlfrag::ast::{Column, Raw};
///
/// let raw = Raw::new("DATEADD(day, {1}, {0})")
///     .fragment(Column::new("created"))
///     .value(7);
/// assert_eq!(raw.format(), "DATEADD(day, {1}, {0})");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub(crate) format: String,
    pub(crate) args: Vec<RawArg>,
}

/// A parsed piece of the format string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawPart<'a> {
    Text(std::borrow::Cow<'a, str>),
    Arg(usize),
}

impl Raw {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            args: Vec::new(),
        }
    }

    /// Splice a nested fragment.
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.args.push(RawArg::Fragment(fragment.into()));
        self
    }

    /// Splice a value as a parameter.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.args.push(RawArg::Value(value.into()));
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn arguments(&self) -> &[RawArg] {
        &self.args
    }

    /// Split the format into text runs and placeholders.
    pub(crate) fn parts(&self) -> SqlResult<Vec<RawPart<'_>>> {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut chars = self.format.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    text.push('{');
                }
                '{' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, d)) if d.is_ascii_digit() => digits.push(d),
                            _ => {
                                return Err(SqlError::RawFormat(format!(
                                    "malformed placeholder at position {}",
                                    pos
                                )));
                            }
                        }
                    }
                    let index: usize = digits.parse().map_err(|_| {
                        SqlError::RawFormat(format!("empty placeholder at position {}", pos))
                    })?;
                    if index >= self.args.len() {
                        return Err(SqlError::RawFormat(format!(
                            "argument {} is out of range ({} given)",
                            index,
                            self.args.len()
                        )));
                    }
                    if !text.is_empty() {
                        parts.push(RawPart::Text(std::mem::take(&mut text).into()));
                    }
                    parts.push(RawPart::Arg(index));
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    text.push('}');
                }
                '}' => {
                    return Err(SqlError::RawFormat(format!(
                        "unmatched '}}' at position {}",
                        pos
                    )));
                }
                _ => text.push(c),
            }
        }
        if !text.is_empty() {
            parts.push(RawPart::Text(text.into()));
        }
        Ok(parts)
    }
}
