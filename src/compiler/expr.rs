//! Expressions: columns, operators, functions, CASE and raw SQL.

use std::borrow::Cow;

use super::QueryBuilder;
use crate::ast::raw::RawPart;
use crate::ast::{
    Alias, AliasTable, Arity, Case, Column, Fragment, Function, Operation, Operator, Raw, RawArg,
};
use crate::error::{SqlError, SqlResult};
use crate::metadata::{flatten_property, require_column};

/// Column name for `property` as seen through `alias`.
///
/// Typed aliases resolve through the engine's metadata; other aliases use
/// the property as the column name.
pub(super) fn column_name<'a>(
    b: &QueryBuilder<'a>,
    alias: Option<&Alias>,
    property: &'a str,
) -> SqlResult<Cow<'a, str>> {
    match alias.map(Alias::table) {
        Some(AliasTable::Typed(key)) => {
            match require_column(b.engine().metadata(), key, property) {
                Ok(name) => Ok(Cow::Borrowed(name)),
                Err(_) if b.is_display() => Ok(Cow::Owned(flatten_property(property))),
                Err(e) => Err(e),
            }
        }
        _ => Ok(Cow::Borrowed(property)),
    }
}

pub(super) fn compile_column(b: &mut QueryBuilder<'_>, column: &Column) -> SqlResult<()> {
    if let Some(alias) = &column.alias {
        b.push_name(alias.name());
        b.push(".");
    }
    match &column.property {
        None => b.push("*"),
        Some(property) => {
            let name = column_name(b, column.alias.as_ref(), property)?.into_owned();
            b.push_name(&name);
        }
    }
    Ok(())
}

fn expect_operands(operation: &Operation, expected: usize) -> SqlResult<()> {
    let given = operation.operands.len();
    if given != expected {
        return Err(SqlError::invalid(format!(
            "Operator {} expects {} operand(s), got {}.",
            operation.op.canonical_name(),
            expected,
            given
        )));
    }
    Ok(())
}

/// Compile `child` as an operand of `parent`, parenthesized when it binds
/// looser than the parent.
fn compile_operand(b: &mut QueryBuilder<'_>, parent: Operator, child: &Fragment) -> SqlResult<()> {
    match child {
        Fragment::Operation(inner) if parent.wraps(inner.op) && !is_bare(inner) => {
            b.push("(");
            compile_operation(b, inner)?;
            b.push(")");
            Ok(())
        }
        _ => b.compile(child),
    }
}

/// A one-operand infix chain renders as its operand alone.
fn is_bare(operation: &Operation) -> bool {
    operation.op.arity() == Arity::Infix && operation.operands.len() == 1
}

/// `(operand)` unless the operand already brings its own parentheses.
fn compile_wrapped(b: &mut QueryBuilder<'_>, operand: &Fragment) -> SqlResult<()> {
    if operand.is_subquery() {
        b.compile(operand)
    } else {
        b.push("(");
        b.compile(operand)?;
        b.push(")");
        Ok(())
    }
}

pub(super) fn compile_operation(b: &mut QueryBuilder<'_>, operation: &Operation) -> SqlResult<()> {
    let op = operation.op;
    let operands = operation.operands.as_slice();
    if operands.is_empty() {
        return Err(SqlError::EmptyList);
    }

    let spelling = match b.engine().operators().get(op.canonical_name()) {
        Some(data) => {
            if let Some(custom) = &data.compile {
                return custom(b, operands);
            }
            data.name.as_str()
        }
        None => op.symbol(),
    };

    match op.arity() {
        Arity::Prefix => {
            expect_operands(operation, 1)?;
            b.push(spelling);
            b.push(" ");
            if op == Operator::Not {
                compile_wrapped(b, &operands[0])
            } else {
                compile_operand(b, op, &operands[0])
            }
        }
        Arity::Postfix => {
            expect_operands(operation, 1)?;
            compile_operand(b, op, &operands[0])?;
            b.push(" ");
            b.push(spelling);
            Ok(())
        }
        Arity::Between => {
            expect_operands(operation, 3)?;
            compile_operand(b, op, &operands[0])?;
            b.push(" ");
            b.push(spelling);
            b.push(" ");
            compile_operand(b, op, &operands[1])?;
            b.push(" AND ");
            compile_operand(b, op, &operands[2])
        }
        Arity::In => {
            let (left, items) = operands.split_first().ok_or(SqlError::EmptyList)?;
            compile_operand(b, op, left)?;
            b.push(" ");
            b.push(spelling);
            b.push(" ");
            match items {
                [query] if query.is_subquery() => b.compile(query),
                _ => {
                    b.push("(");
                    b.compile_list(items, ", ")?;
                    b.push(")");
                    Ok(())
                }
            }
        }
        Arity::Exists => {
            expect_operands(operation, 1)?;
            b.push(spelling);
            b.push(" ");
            compile_wrapped(b, &operands[0])
        }
        Arity::Infix => {
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    b.push(" ");
                    b.push(spelling);
                    b.push(" ");
                }
                compile_operand(b, op, operand)?;
            }
            Ok(())
        }
    }
}

pub(super) fn compile_function(b: &mut QueryBuilder<'_>, function: &Function) -> SqlResult<()> {
    let engine = b.engine();
    match engine.functions().get(&function.name) {
        Some(data) => match &data.compile {
            Some(_) if function.distinct => Err(SqlError::invalid(format!(
                "Function \"{}\" does not accept DISTINCT in this engine.",
                function.name
            ))),
            Some(custom) => custom(b, &function.args),
            None => b.compile_call(&data.name, &function.args, function.distinct),
        },
        None if engine.options.functions_only_registered => {
            Err(SqlError::UnsupportedFunction(function.name.clone()))
        }
        None => b.compile_call(&function.name, &function.args, function.distinct),
    }
}

/// CASE nested directly in a CASE slot is parenthesized.
fn compile_case_part(b: &mut QueryBuilder<'_>, part: &Fragment) -> SqlResult<()> {
    if let Fragment::Case(inner) = part {
        b.push("(");
        compile_case(b, inner)?;
        b.push(")");
        Ok(())
    } else {
        b.compile(part)
    }
}

pub(super) fn compile_case(b: &mut QueryBuilder<'_>, case: &Case) -> SqlResult<()> {
    if case.whens.is_empty() {
        return Err(SqlError::EmptyCase);
    }
    b.push("CASE");
    if let Some(subject) = &case.subject {
        b.push(" ");
        compile_case_part(b, subject)?;
    }
    for (when, then) in &case.whens {
        b.push(" WHEN ");
        compile_case_part(b, when)?;
        b.push(" THEN ");
        compile_case_part(b, then)?;
    }
    if let Some(otherwise) = &case.otherwise {
        b.push(" ELSE ");
        compile_case_part(b, otherwise)?;
    }
    b.push(" END");
    Ok(())
}

pub(super) fn compile_raw(b: &mut QueryBuilder<'_>, raw: &Raw) -> SqlResult<()> {
    for part in raw.parts()? {
        match part {
            RawPart::Text(text) => b.push(&text),
            RawPart::Arg(index) => match &raw.args[index] {
                RawArg::Fragment(fragment) => b.compile(fragment)?,
                RawArg::Value(value) => {
                    b.add_parameter(value);
                }
            },
        }
    }
    Ok(())
}
