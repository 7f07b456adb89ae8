//! SELECT statements: select list, TOP, OVER, sources, joins, paging and
//! set operations.

use super::QueryBuilder;
use crate::ast::{
    Alias, AliasTable, Cte, Join, JoinKind, Order, Over, Query, SelectList, SetOperation,
    TableSource, Top, TopValue,
};
use crate::engine::OffsetStyle;
use crate::error::{SqlError, SqlResult};
use crate::metadata::require_table;

/// Table name behind an alias, schema-qualified when known.
pub(super) fn compile_table_name(b: &mut QueryBuilder<'_>, alias: &Alias) -> SqlResult<()> {
    match alias.table() {
        AliasTable::Same => b.push_name(alias.name()),
        AliasTable::Named { table, schema } => {
            if let Some(schema) = schema {
                b.push_name(schema);
                b.push(".");
            }
            b.push_name(table);
        }
        AliasTable::Typed(key) => match require_table(b.engine().metadata(), key) {
            Ok(info) => {
                if let Some(schema) = &info.schema {
                    b.push_name(schema);
                    b.push(".");
                }
                b.push_name(&info.name);
            }
            Err(_) if b.is_display() => b.push(key.name()),
            Err(e) => return Err(e),
        },
    }
    Ok(())
}

/// `table [AS] alias`, or just the table for plain aliases.
pub(super) fn compile_table(b: &mut QueryBuilder<'_>, alias: &Alias) -> SqlResult<()> {
    compile_table_name(b, alias)?;
    if !alias.is_plain() {
        b.push_alias_separator();
        b.push_name(alias.name());
    }
    Ok(())
}

fn compile_source(b: &mut QueryBuilder<'_>, source: &TableSource) -> SqlResult<()> {
    match source {
        TableSource::Table(alias) => compile_table(b, alias),
        TableSource::Query { query, alias } => {
            b.push("(");
            b.compile_statement(query)?;
            b.push(")");
            b.push_alias_separator();
            b.push_name(alias);
            Ok(())
        }
        TableSource::Raw(raw) => super::expr::compile_raw(b, raw),
    }
}

pub(super) fn compile_select_list(b: &mut QueryBuilder<'_>, list: &SelectList) -> SqlResult<()> {
    if list.items.is_empty() {
        return Err(SqlError::EmptyList);
    }
    b.push("SELECT ");
    if list.distinct {
        b.push("DISTINCT ");
        if !list.distinct_on.is_empty() {
            if !b.options().distinct_on_supported {
                return Err(SqlError::ClauseNotSupported("Distinct on"));
            }
            b.push("ON(");
            b.compile_list(&list.distinct_on, ", ")?;
            b.push(") ");
        }
    }
    if let Some(top) = &list.top {
        compile_top(b, top)?;
        b.push(" ");
    }
    for (i, item) in list.items.iter().enumerate() {
        if i > 0 {
            b.push(", ");
        }
        b.compile(&item.expr)?;
        if let Some(over) = &item.over {
            b.push(" ");
            compile_over(b, over)?;
        }
        if let Some(alias) = &item.alias {
            b.push(" AS ");
            b.push_name(alias);
        }
    }
    Ok(())
}

pub(super) fn compile_top(b: &mut QueryBuilder<'_>, top: &Top) -> SqlResult<()> {
    if !b.options().top_supported {
        return Err(SqlError::ClauseNotSupported("Top"));
    }
    b.push("TOP(");
    match &top.value {
        TopValue::Count(count) if b.options().top_parameterized => {
            b.add_parameter(count);
        }
        TopValue::Count(count) => b.push_literal(count),
        TopValue::Raw(raw) => super::expr::compile_raw(b, raw)?,
    }
    b.push(")");
    if top.percent {
        b.push(" PERCENT");
    }
    if top.with_ties {
        b.push(" WITH TIES");
    }
    Ok(())
}

pub(super) fn compile_over(b: &mut QueryBuilder<'_>, over: &Over) -> SqlResult<()> {
    b.push("OVER(");
    let mut first = true;
    let mut separate = |b: &mut QueryBuilder<'_>| {
        if !std::mem::take(&mut first) {
            b.push(" ");
        }
    };
    if !over.partition_by.is_empty() {
        separate(b);
        b.push("PARTITION BY ");
        b.compile_list(&over.partition_by, ", ")?;
    }
    if !over.order_by.is_empty() {
        separate(b);
        b.push("ORDER BY ");
        b.compile_list(&over.order_by, ", ")?;
    }
    if let Some(frame) = &over.frame {
        separate(b);
        super::expr::compile_raw(b, frame)?;
    }
    b.push(")");
    Ok(())
}

pub(super) fn compile_order(b: &mut QueryBuilder<'_>, order: &Order) -> SqlResult<()> {
    b.compile(&order.expr)?;
    b.push(" ");
    b.push(&order.direction.to_string());
    Ok(())
}

fn compile_with(b: &mut QueryBuilder<'_>, ctes: &[Cte]) -> SqlResult<()> {
    b.push("WITH ");
    if b.options().with_recursive && ctes.iter().any(|cte| cte.recursive) {
        b.push("RECURSIVE ");
    }
    for (i, cte) in ctes.iter().enumerate() {
        if i > 0 {
            b.push(", ");
        }
        b.push_name(&cte.name);
        if !cte.columns.is_empty() {
            b.push(" (");
            b.push_names(&cte.columns)?;
            b.push(")");
        }
        b.push(" AS (");
        b.compile_statement(&cte.query)?;
        b.push(")");
    }
    b.push(" ");
    Ok(())
}

fn compile_join(b: &mut QueryBuilder<'_>, join: &Join) -> SqlResult<()> {
    match join.kind {
        JoinKind::Right if !b.options().right_join_supported => {
            return Err(SqlError::ClauseNotSupported("Right join"));
        }
        JoinKind::Full if !b.options().full_join_supported => {
            return Err(SqlError::ClauseNotSupported("Full join"));
        }
        _ => {}
    }
    b.push(" ");
    b.push(join.kind.keyword());
    b.push(" ");
    compile_source(b, &join.source)?;
    if let Some(on) = &join.on {
        b.push(" ON ");
        b.compile(on)?;
    }
    Ok(())
}

fn compile_paging(b: &mut QueryBuilder<'_>, query: &Query) -> SqlResult<()> {
    if query.offset.is_none() && query.limit.is_none() {
        return Ok(());
    }
    match b.options().offset_style {
        OffsetStyle::NotSupported => Err(SqlError::ClauseNotSupported("Offset")),
        OffsetStyle::LimitOffset => {
            match (&query.limit, &b.options().unbounded_limit) {
                (Some(limit), _) => {
                    b.push(" LIMIT ");
                    b.compile(limit)?;
                }
                (None, Some(all)) => {
                    b.push(" LIMIT ");
                    b.push(all);
                }
                (None, None) => {}
            }
            if let Some(offset) = &query.offset {
                b.push(" OFFSET ");
                b.compile(offset)?;
            }
            Ok(())
        }
        OffsetStyle::OffsetFetch => {
            b.push(" OFFSET ");
            match &query.offset {
                Some(offset) => b.compile(offset)?,
                None => b.push("0"),
            }
            b.push(" ROWS");
            if let Some(limit) = &query.limit {
                b.push(" FETCH NEXT ");
                b.compile(limit)?;
                b.push(" ROWS ONLY");
            }
            Ok(())
        }
    }
}

/// ` FROM dummy` for engines that need a source on every SELECT.
pub(super) fn compile_dummy_from(b: &mut QueryBuilder<'_>) {
    if let Some(dummy) = &b.options().dummy_table {
        b.push(" FROM ");
        b.push(dummy);
    }
}

pub(super) fn compile_query(b: &mut QueryBuilder<'_>, query: &Query) -> SqlResult<()> {
    if !query.with.is_empty() {
        compile_with(b, &query.with)?;
    }
    compile_select_list(b, &query.select)?;

    if query.from.is_empty() {
        compile_dummy_from(b);
    } else {
        b.push(" FROM ");
        for (i, source) in query.from.iter().enumerate() {
            if i > 0 {
                b.push(", ");
            }
            compile_source(b, source)?;
        }
    }
    for join in &query.joins {
        compile_join(b, join)?;
    }
    if let Some(filter) = &query.filter {
        b.push(" WHERE ");
        b.compile(filter)?;
    }
    if !query.group_by.is_empty() {
        b.push(" GROUP BY ");
        b.compile_list(&query.group_by, ", ")?;
    }
    if let Some(having) = &query.having {
        b.push(" HAVING ");
        b.compile(having)?;
    }
    if !query.order_by.is_empty() {
        b.push(" ORDER BY ");
        b.compile_list(&query.order_by, ", ")?;
    }
    compile_paging(b, query)
}

/// `(left) KEYWORD (right)`; the keyword can be respelled per engine.
pub(super) fn compile_set_operation(b: &mut QueryBuilder<'_>, set: &SetOperation) -> SqlResult<()> {
    let keyword = match b.engine().operators().get(set.op.canonical_name()) {
        Some(data) => data.name.as_str(),
        None => set.op.keyword(),
    };
    b.push("(");
    b.compile_statement(&set.left)?;
    b.push(") ");
    b.push(keyword);
    b.push(" (");
    b.compile_statement(&set.right)?;
    b.push(")");
    Ok(())
}
