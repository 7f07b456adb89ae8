//! INSERT, UPDATE and DELETE.

use super::QueryBuilder;
use super::expr::column_name;
use super::select::{compile_dummy_from, compile_table, compile_table_name};
use crate::ast::{Alias, Delete, Insert, InsertSource, Update};
use crate::error::{SqlError, SqlResult};

fn resolve_columns(
    b: &QueryBuilder<'_>,
    table: &Alias,
    properties: &[String],
) -> SqlResult<Vec<String>> {
    properties
        .iter()
        .map(|p| column_name(b, Some(table), p).map(|name| name.into_owned()))
        .collect()
}

pub(super) fn compile_insert(b: &mut QueryBuilder<'_>, insert: &Insert) -> SqlResult<()> {
    let columns = resolve_columns(b, &insert.table, &insert.columns)?;
    b.push("INSERT INTO ");
    compile_table_name(b, &insert.table)?;
    b.push(" (");
    b.push_names(&columns)?;
    b.push(")");

    match &insert.source {
        InsertSource::Values(rows) if rows.is_empty() => Err(SqlError::EmptyList),
        InsertSource::Values(rows) if rows.len() > 1 && b.options().insert_with_union => {
            for (i, row) in rows.iter().enumerate() {
                b.push(if i == 0 { " SELECT " } else { " UNION ALL SELECT " });
                b.compile_list(row, ", ")?;
                compile_dummy_from(b);
            }
            Ok(())
        }
        InsertSource::Values(rows) => {
            b.push(" VALUES ");
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push("(");
                b.compile_list(row, ", ")?;
                b.push(")");
            }
            Ok(())
        }
        InsertSource::Query(query) => {
            b.push(" ");
            b.compile_statement(query)
        }
    }
}

pub(super) fn compile_update(b: &mut QueryBuilder<'_>, update: &Update) -> SqlResult<()> {
    if update.sets.is_empty() {
        return Err(SqlError::EmptyList);
    }
    let table = &update.table;
    let with_from = !table.is_plain() && b.options().update_with_from;

    b.push("UPDATE ");
    if with_from {
        b.push_name(table.name());
    } else {
        compile_table(b, table)?;
    }
    b.push(" SET ");
    for (i, (property, value)) in update.sets.iter().enumerate() {
        if i > 0 {
            b.push(", ");
        }
        if b.options().update_set_with_table_name {
            b.push_name(table.name());
            b.push(".");
        }
        let column = column_name(b, Some(table), property)?.into_owned();
        b.push_name(&column);
        b.push(" = ");
        b.compile(value)?;
    }
    if with_from {
        b.push(" FROM ");
        compile_table(b, table)?;
    }
    if let Some(filter) = &update.filter {
        b.push(" WHERE ");
        b.compile(filter)?;
    }
    Ok(())
}

pub(super) fn compile_delete(b: &mut QueryBuilder<'_>, delete: &Delete) -> SqlResult<()> {
    let table = &delete.table;
    b.push("DELETE ");
    if !table.is_plain() && b.options().delete_with_alias {
        b.push_name(table.name());
        b.push(" ");
    }
    b.push("FROM ");
    compile_table(b, table)?;
    if let Some(filter) = &delete.filter {
        b.push(" WHERE ");
        b.compile(filter)?;
    }
    Ok(())
}
