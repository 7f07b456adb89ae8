//! Canonical name -> dialect spelling tables.
//!
//! Engines keep two registries with the same shape: one for functions
//! (`LENGTH`, `SUBSTRING`, ...) and one for operators, keyed by the
//! operator's canonical name (`BitXor`, `Except`, ...). An entry either
//! renames the construct or replaces its rendering with a custom closure.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ast::Fragment;
use crate::compiler::QueryBuilder;
use crate::error::{SqlError, SqlResult};

/// Custom renderer. Receives the builder and the construct's arguments
/// (function arguments or operator operands) in declaration order.
/// DISTINCT calls never reach a custom function renderer.
pub type CompileFn =
    Arc<dyn Fn(&mut QueryBuilder<'_>, &[Fragment]) -> SqlResult<()> + Send + Sync>;

/// Wrap a closure as a [`CompileFn`].
pub fn compile_fn<F>(f: F) -> CompileFn
where
    F: Fn(&mut QueryBuilder<'_>, &[Fragment]) -> SqlResult<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[derive(Clone)]
pub struct FunctionData {
    /// Dialect spelling
    pub name: String,
    /// Replaces the default `NAME(args)` / infix rendering when set
    pub compile: Option<CompileFn>,
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("name", &self.name)
            .field("custom", &self.compile.is_some())
            .finish()
    }
}

/// Case-insensitive registry of functions or operators.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, FunctionData>,
}

fn key(name: &str) -> String {
    name.to_ascii_uppercase()
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` spelled as itself.
    pub fn add(&mut self, name: &str) -> &mut Self {
        self.add_as(name, name)
    }

    /// Register `name` spelled as `spelling`.
    pub fn add_as(&mut self, name: &str, spelling: &str) -> &mut Self {
        self.entries.insert(
            key(name),
            FunctionData {
                name: spelling.to_string(),
                compile: None,
            },
        );
        self
    }

    /// Register `name` with a custom renderer.
    pub fn add_custom(&mut self, name: &str, compile: CompileFn) -> &mut Self {
        self.entries.insert(
            key(name),
            FunctionData {
                name: name.to_string(),
                compile: Some(compile),
            },
        );
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<FunctionData> {
        self.entries.remove(&key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&key(name))
    }

    pub fn get(&self, name: &str) -> Option<&FunctionData> {
        self.entries.get(&key(name))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("entries", &names).finish()
    }
}

/// Left-folded call: `a op b op c` becomes `NAME(NAME(a, b), c)`.
pub fn nested_call(name: &str) -> CompileFn {
    let name = name.to_string();
    compile_fn(move |b, args| {
        let Some((first, rest)) = args.split_first() else {
            return Err(SqlError::EmptyList);
        };
        for _ in rest {
            b.push(&name);
            b.push("(");
        }
        b.compile(first)?;
        for arg in rest {
            b.push(", ");
            b.compile(arg)?;
            b.push(")");
        }
        Ok(())
    })
}

/// Flat call over every argument: `NAME(a, b, c)`.
pub fn call_list(name: &str) -> CompileFn {
    let name = name.to_string();
    compile_fn(move |b, args| b.compile_call(&name, args, false))
}

/// Standard trim with characters: `TRIM([side ]chars FROM expr)`.
///
/// The one-argument form renders as `fallback(expr)`.
pub fn trim_from(fallback: &str, side: Option<&str>) -> CompileFn {
    let fallback = fallback.to_string();
    let side = side.map(str::to_string);
    compile_fn(move |b, args| match args {
        [expr, chars] => {
            b.push("TRIM(");
            if let Some(side) = &side {
                b.push(side);
                b.push(" ");
            }
            b.compile(chars)?;
            b.push(" FROM ");
            b.compile(expr)?;
            b.push(")");
            Ok(())
        }
        _ => b.compile_call(&fallback, args, false),
    })
}

/// Bare keyword without parentheses (`CURRENT_TIMESTAMP`).
pub fn keyword_only(text: &str) -> CompileFn {
    let text = text.to_string();
    compile_fn(move |b, args| {
        if !args.is_empty() {
            return Err(SqlError::invalid(format!(
                "{} does not take arguments.",
                text
            )));
        }
        b.push(&text);
        Ok(())
    })
}
