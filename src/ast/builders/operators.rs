//! Open-ended operator chains and set operations.
//!
//! Chains start empty and grow with [`Operation::add`]:
//!
//! ```
//! use sqlfrag::ast::builders::*;
//!
//! let mask = bit_xor().add(col("flags")).add(1).add(2);
//! assert_eq!(mask.operands().len(), 3);
//! ```

use crate::ast::{Fragment, Operation, Operator, SetOperation, SetOperator};

/// Empty chain for any infix operator.
pub fn chain(op: Operator) -> Operation {
    Operation::new(op)
}

pub fn and() -> Operation {
    Operation::new(Operator::And)
}

pub fn or() -> Operation {
    Operation::new(Operator::Or)
}

/// AND over every condition in `conditions`.
pub fn and_all<F: Into<Fragment>>(conditions: impl IntoIterator<Item = F>) -> Operation {
    Operation::with(
        Operator::And,
        conditions.into_iter().map(Into::into).collect(),
    )
}

/// OR over every condition in `conditions`.
pub fn or_any<F: Into<Fragment>>(conditions: impl IntoIterator<Item = F>) -> Operation {
    Operation::with(
        Operator::Or,
        conditions.into_iter().map(Into::into).collect(),
    )
}

pub fn plus() -> Operation {
    Operation::new(Operator::Add)
}

pub fn minus() -> Operation {
    Operation::new(Operator::Subtract)
}

pub fn times() -> Operation {
    Operation::new(Operator::Multiply)
}

pub fn divide() -> Operation {
    Operation::new(Operator::Divide)
}

pub fn modulo() -> Operation {
    Operation::new(Operator::Modulo)
}

/// String concatenation chain.
pub fn concat() -> Operation {
    Operation::new(Operator::Concat)
}

pub fn bit_and() -> Operation {
    Operation::new(Operator::BitAnd)
}

pub fn bit_or() -> Operation {
    Operation::new(Operator::BitOr)
}

pub fn bit_xor() -> Operation {
    Operation::new(Operator::BitXor)
}

/// ~ expr
pub fn bit_not(expr: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::BitNot, vec![expr.into()])
}

/// - expr
pub fn negate(expr: impl Into<Fragment>) -> Operation {
    Operation::with(Operator::Negate, vec![expr.into()])
}

pub fn union(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::Union, left, right)
}

pub fn union_all(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::UnionAll, left, right)
}

pub fn intersect(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::Intersect, left, right)
}

pub fn intersect_all(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::IntersectAll, left, right)
}

pub fn except(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::Except, left, right)
}

pub fn except_all(left: impl Into<Fragment>, right: impl Into<Fragment>) -> SetOperation {
    SetOperation::new(SetOperator::ExceptAll, left, right)
}
