//! Comparison and predicate builders.

use crate::ast::{Fragment, Operation, Operator};

fn binary(op: Operator, left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    Operation::with(op, vec![left.into(), right.into()])
}

/// left = right
pub fn eq(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::Eq, left, right)
}

/// left <> right
pub fn not_eq(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::NotEq, left, right)
}

pub fn gt(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::Gt, left, right)
}

pub fn gt_eq(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::GtEq, left, right)
}

pub fn lt(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::Lt, left, right)
}

pub fn lt_eq(left: impl Into<Fragment>, right: impl Into<Fragment>) -> Operation {
    binary(Operator::LtEq, left, right)
}

pub fn like(left: impl Into<Fragment>, pattern: impl Into<Fragment>) -> Operation {
    binary(Operator::Like, left, pattern)
}

pub fn not_like(left: impl Into<Fragment>, pattern: impl Into<Fragment>) -> Operation {
    binary(Operator::NotLike, left, pattern)
}

pub fn is_null(expr: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::IsNull, vec![expr.into()])
}

pub fn is_not_null(expr: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::IsNotNull, vec![expr.into()])
}

/// expr BETWEEN low AND high
pub fn between(
    expr: impl Into<Fragment>,
    low: impl Into<Fragment>,
    high: impl Into<Fragment>,
) -> Operation {
    Operation::with(Operator::Between, vec![expr.into(), low.into(), high.into()])
}

pub fn not_between(
    expr: impl Into<Fragment>,
    low: impl Into<Fragment>,
    high: impl Into<Fragment>,
) -> Operation {
    Operation::with(
        Operator::NotBetween,
        vec![expr.into(), low.into(), high.into()],
    )
}

/// expr IN (items...). An empty list fails at compile time.
pub fn is_in<F: Into<Fragment>>(
    expr: impl Into<Fragment>,
    items: impl IntoIterator<Item = F>,
) -> Operation {
    let mut operands = vec![expr.into()];
    operands.extend(items.into_iter().map(Into::into));
    Operation::with(Operator::In, operands)
}

pub fn not_in<F: Into<Fragment>>(
    expr: impl Into<Fragment>,
    items: impl IntoIterator<Item = F>,
) -> Operation {
    let mut operands = vec![expr.into()];
    operands.extend(items.into_iter().map(Into::into));
    Operation::with(Operator::NotIn, operands)
}

/// expr IN (subquery)
pub fn in_query(expr: impl Into<Fragment>, query: impl Into<Fragment>) -> Operation {
    binary(Operator::In, expr, query)
}

pub fn exists(query: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::Exists, vec![query.into()])
}

pub fn not_exists(query: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::NotExists, vec![query.into()])
}

/// NOT (expr)
pub fn not(expr: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::Not, vec![expr.into()])
}
