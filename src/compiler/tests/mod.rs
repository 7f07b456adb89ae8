//! Compiler test modules.
//!
//! Tests are organized by category:
//! - `core`: parameters, operators, functions, CASE, raw and set operations
//! - `dialects`: per-engine spelling and clause availability
//! - `features`: DML, metadata-backed aliases, window clauses, subqueries

mod core;
mod dialects;

use crate::ast::Fragment;
use crate::engine::Engine;

fn sql(engine: &Engine, fragment: impl Into<Fragment>) -> String {
    engine.compile(fragment).unwrap().sql
}

fn error(engine: &Engine, fragment: impl Into<Fragment>) -> String {
    engine.compile(fragment).unwrap_err().to_string()
}
