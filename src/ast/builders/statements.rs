//! Statement and clause builders.

use crate::ast::{
    Alias, Case, Cte, Delete, Fragment, Insert, Order, Over, Query, Raw, SelectList, SortOrder,
    Top, Update,
};

/// Empty select list; compiling it before adding items fails.
pub fn select() -> SelectList {
    SelectList::new()
}

/// SELECT statement over `select`.
pub fn query(select: SelectList) -> Query {
    Query::new(select)
}

/// Searched CASE.
pub fn case() -> Case {
    Case::new()
}

/// Simple CASE over `subject`.
pub fn case_of(subject: impl Into<Fragment>) -> Case {
    Case::of(subject)
}

pub fn over() -> Over {
    Over::new()
}

pub fn top(count: i64) -> Top {
    Top::new(count)
}

pub fn asc(expr: impl Into<Fragment>) -> Order {
    Order::new(expr, SortOrder::Asc)
}

pub fn desc(expr: impl Into<Fragment>) -> Order {
    Order::new(expr, SortOrder::Desc)
}

pub fn raw(format: &str) -> Raw {
    Raw::new(format)
}

pub fn with(name: &str, query: impl Into<Fragment>) -> Cte {
    Cte::new(name, query)
}

pub fn insert_into<S: Into<String>>(table: &Alias, columns: impl IntoIterator<Item = S>) -> Insert {
    Insert::new(table.clone(), columns)
}

pub fn update(table: &Alias) -> Update {
    Update::new(table.clone())
}

pub fn delete_from(table: &Alias) -> Delete {
    Delete::new(table.clone())
}
