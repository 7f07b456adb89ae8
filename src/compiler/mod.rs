//! Fragment compiler.
//!
//! [`QueryBuilder`] walks a fragment tree once, appending SQL text and
//! registering every literal as a sequentially numbered parameter. It holds
//! all per-call state, so it is created fresh for each compilation and the
//! [`Engine`] stays read-only.

mod dml;
mod expr;
mod select;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::Fragment;
use crate::engine::{Engine, Options};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

/// Placeholder name -> value, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameters(IndexMap<String, Value>);

impl Parameters {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl std::ops::Index<&str> for Parameters {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        &self.0[name]
    }
}

/// Output of a compilation: SQL text plus its bound values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Placeholders and escaped names
    Compile,
    /// Inline values, raw names, lenient metadata
    Display,
}

/// Per-call compilation context.
///
/// Custom renderers registered on an engine receive this builder and use
/// [`push`](Self::push), [`compile`](Self::compile) and
/// [`add_parameter`](Self::add_parameter) to emit their output.
#[derive(Debug)]
pub struct QueryBuilder<'e> {
    engine: &'e Engine,
    sql: String,
    parameters: Parameters,
    mode: Mode,
}

impl<'e> QueryBuilder<'e> {
    pub fn new(engine: &'e Engine) -> Self {
        Self {
            engine,
            sql: String::new(),
            parameters: Parameters::default(),
            mode: Mode::Compile,
        }
    }

    fn for_display(engine: &'e Engine) -> Self {
        Self {
            mode: Mode::Display,
            ..Self::new(engine)
        }
    }

    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    pub fn options(&self) -> &'e Options {
        &self.engine.options
    }

    pub(crate) fn is_display(&self) -> bool {
        self.mode == Mode::Display
    }

    /// Append raw SQL text.
    pub fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Append an identifier, escaped for the engine.
    pub fn push_name(&mut self, name: &str) {
        match self.mode {
            Mode::Compile => {
                let escaped = self.engine.escape_name(name);
                self.sql.push_str(&escaped);
            }
            Mode::Display => self.sql.push_str(name),
        }
    }

    /// Allocate the next placeholder for `value` and append it.
    ///
    /// Every call gets a new name, even for a value already bound.
    pub fn add_parameter(&mut self, value: &Value) -> String {
        let text = match self.mode {
            Mode::Compile => {
                let name = format!(
                    "{}{}",
                    self.engine.options.parameter_prefix,
                    self.parameters.len()
                );
                self.parameters.0.insert(name.clone(), value.clone());
                name
            }
            Mode::Display => value.to_string(),
        };
        self.sql.push_str(&text);
        text
    }

    /// Append a value inline (no parameter).
    pub(crate) fn push_literal(&mut self, value: &Value) {
        let text = value.to_string();
        self.sql.push_str(&text);
    }

    /// Compile a fragment in expression position.
    ///
    /// Subqueries and set operations are wrapped in parentheses.
    pub fn compile(&mut self, fragment: &Fragment) -> SqlResult<()> {
        if fragment.is_subquery() {
            self.push("(");
            self.compile_statement(fragment)?;
            self.push(")");
            Ok(())
        } else {
            self.compile_statement(fragment)
        }
    }

    /// Compile a fragment at statement level (no wrapping).
    pub fn compile_statement(&mut self, fragment: &Fragment) -> SqlResult<()> {
        match fragment {
            Fragment::Value(value) => {
                self.add_parameter(value);
                Ok(())
            }
            Fragment::Column(column) => expr::compile_column(self, column),
            Fragment::Alias(alias) => {
                self.push_name(alias.name());
                Ok(())
            }
            Fragment::Operation(operation) => expr::compile_operation(self, operation),
            Fragment::Function(function) => expr::compile_function(self, function),
            Fragment::Case(case) => expr::compile_case(self, case),
            Fragment::Raw(raw) => expr::compile_raw(self, raw),
            Fragment::Select(list) => select::compile_select_list(self, list),
            Fragment::Top(top) => select::compile_top(self, top),
            Fragment::Over(over) => select::compile_over(self, over),
            Fragment::Order(order) => select::compile_order(self, order),
            Fragment::Query(query) => select::compile_query(self, query),
            Fragment::SetOperation(set) => select::compile_set_operation(self, set),
            Fragment::Insert(insert) => dml::compile_insert(self, insert),
            Fragment::Update(update) => dml::compile_update(self, update),
            Fragment::Delete(delete) => dml::compile_delete(self, delete),
        }
    }

    /// Compile `items` joined by `separator`. Empty lists are an error.
    pub fn compile_list(&mut self, items: &[Fragment], separator: &str) -> SqlResult<()> {
        if items.is_empty() {
            return Err(SqlError::EmptyList);
        }
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            self.compile(item)?;
        }
        Ok(())
    }

    /// `name([DISTINCT ]args)`; no arguments renders `name()`.
    pub fn compile_call(&mut self, name: &str, args: &[Fragment], distinct: bool) -> SqlResult<()> {
        self.push(name);
        self.push("(");
        if distinct {
            self.push("DISTINCT ");
        }
        if !args.is_empty() {
            self.compile_list(args, ", ")?;
        }
        self.push(")");
        Ok(())
    }

    /// Names joined by `, `, each escaped.
    pub(crate) fn push_names<S: AsRef<str>>(&mut self, names: &[S]) -> SqlResult<()> {
        if names.is_empty() {
            return Err(SqlError::EmptyList);
        }
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_name(name.as_ref());
        }
        Ok(())
    }

    /// `AS` or a bare space before a table alias.
    pub(crate) fn push_alias_separator(&mut self) {
        if self.options().table_alias_as {
            self.push(" AS ");
        } else {
            self.push(" ");
        }
    }

    pub fn finish(self) -> CompiledQuery {
        CompiledQuery {
            sql: self.sql,
            parameters: self.parameters,
        }
    }
}

static DISPLAY_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::generic);

/// Human-readable rendering: values inline, names unquoted, no parameters.
/// Invalid trees render as `<invalid: reason>` instead of failing.
pub(crate) fn display(fragment: &Fragment) -> String {
    let mut builder = QueryBuilder::for_display(&DISPLAY_ENGINE);
    match builder.compile_statement(fragment) {
        Ok(()) => builder.sql,
        Err(e) => format!("<invalid: {}>", e),
    }
}
