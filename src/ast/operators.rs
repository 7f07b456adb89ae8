use serde::{Deserialize, Serialize};

use super::Fragment;

/// How an operator lays out its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `a op b [op c ...]`
    Infix,
    /// `op a`
    Prefix,
    /// `a op`
    Postfix,
    /// `a BETWEEN b AND c`
    Between,
    /// `a IN (b, c, ...)`
    In,
    /// `EXISTS (subquery)`
    Exists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
    Exists,
    NotExists,
    And,
    Or,
    Not,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Concat,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Negate,
}

impl Operator {
    /// Registry key used for per-engine overrides.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Operator::Eq => "Eq",
            Operator::NotEq => "NotEq",
            Operator::Gt => "Gt",
            Operator::GtEq => "GtEq",
            Operator::Lt => "Lt",
            Operator::LtEq => "LtEq",
            Operator::Like => "Like",
            Operator::NotLike => "NotLike",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::Between => "Between",
            Operator::NotBetween => "NotBetween",
            Operator::IsNull => "IsNull",
            Operator::IsNotNull => "IsNotNull",
            Operator::Exists => "Exists",
            Operator::NotExists => "NotExists",
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::Not => "Not",
            Operator::Add => "Add",
            Operator::Subtract => "Subtract",
            Operator::Multiply => "Multiply",
            Operator::Divide => "Divide",
            Operator::Modulo => "Modulo",
            Operator::Concat => "Concat",
            Operator::BitAnd => "BitAnd",
            Operator::BitOr => "BitOr",
            Operator::BitXor => "BitXor",
            Operator::BitNot => "BitNot",
            Operator::Negate => "Negate",
        }
    }

    /// Standard SQL spelling, used when the engine registers no override.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Exists => "EXISTS",
            Operator::NotExists => "NOT EXISTS",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Add => "+",
            Operator::Subtract | Operator::Negate => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Concat => "||",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitNot => "~",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Not | Operator::BitNot | Operator::Negate => Arity::Prefix,
            Operator::IsNull | Operator::IsNotNull => Arity::Postfix,
            Operator::Between | Operator::NotBetween => Arity::Between,
            Operator::In | Operator::NotIn => Arity::In,
            Operator::Exists | Operator::NotExists => Arity::Exists,
            _ => Arity::Infix,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Exists | Operator::NotExists => 10,
            Operator::BitNot | Operator::Negate => 9,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 8,
            Operator::Add | Operator::Subtract | Operator::Concat => 7,
            Operator::BitAnd | Operator::BitOr | Operator::BitXor => 6,
            Operator::Eq
            | Operator::NotEq
            | Operator::Gt
            | Operator::GtEq
            | Operator::Lt
            | Operator::LtEq
            | Operator::Like
            | Operator::NotLike
            | Operator::In
            | Operator::NotIn
            | Operator::Between
            | Operator::NotBetween
            | Operator::IsNull
            | Operator::IsNotNull => 4,
            Operator::Not => 3,
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    /// Chains of the same associative operator need no inner parentheses.
    pub fn is_associative(&self) -> bool {
        matches!(
            self,
            Operator::And
                | Operator::Or
                | Operator::Add
                | Operator::Multiply
                | Operator::Concat
                | Operator::BitAnd
                | Operator::BitOr
                | Operator::BitXor
        )
    }

    /// Whether `child`, used as an operand of `self`, must be parenthesized.
    pub fn wraps(&self, child: Operator) -> bool {
        let (parent, inner) = (self.precedence(), child.precedence());
        inner < parent || (inner == parent && !(child == *self && self.is_associative()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator applied to an ordered operand list.
///
/// Infix operators are open-ended: operands are appended with [`add`](Self::add)
/// and rendered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub(crate) op: Operator,
    pub(crate) operands: Vec<Fragment>,
}

impl Operation {
    pub fn new(op: Operator) -> Self {
        Self {
            op,
            operands: Vec::new(),
        }
    }

    pub(crate) fn with(op: Operator, operands: Vec<Fragment>) -> Self {
        Self { op, operands }
    }

    /// Append an operand.
    pub fn add(mut self, operand: impl Into<Fragment>) -> Self {
        self.operands.push(operand.into());
        self
    }

    /// Append an operand in place, for chains built in a loop.
    pub fn push(&mut self, operand: impl Into<Fragment>) {
        self.operands.push(operand.into());
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn operands(&self) -> &[Fragment] {
        &self.operands
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
    Except,
    ExceptAll,
}

impl SetOperator {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            SetOperator::Union => "Union",
            SetOperator::UnionAll => "UnionAll",
            SetOperator::Intersect => "Intersect",
            SetOperator::IntersectAll => "IntersectAll",
            SetOperator::Except => "Except",
            SetOperator::ExceptAll => "ExceptAll",
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SetOperator::Union => "UNION",
            SetOperator::UnionAll => "UNION ALL",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::IntersectAll => "INTERSECT ALL",
            SetOperator::Except => "EXCEPT",
            SetOperator::ExceptAll => "EXCEPT ALL",
        }
    }
}

/// `(left) OP (right)`; both sides are always parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOperation {
    pub(crate) op: SetOperator,
    pub(crate) left: Fragment,
    pub(crate) right: Fragment,
}

impl SetOperation {
    pub fn new(op: SetOperator, left: impl Into<Fragment>, right: impl Into<Fragment>) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn op(&self) -> SetOperator {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_by_precedence() {
        assert!(Operator::Multiply.wraps(Operator::Add));
        assert!(!Operator::Add.wraps(Operator::Multiply));
        assert!(!Operator::Add.wraps(Operator::Add));
        assert!(Operator::Subtract.wraps(Operator::Subtract));
        assert!(Operator::Add.wraps(Operator::Subtract));
        assert!(!Operator::And.wraps(Operator::Eq));
        assert!(Operator::And.wraps(Operator::Or));
        assert!(Operator::BitXor.wraps(Operator::BitAnd));
    }

    #[test]
    fn test_operation_keeps_operand_order() {
        let op = Operation::new(Operator::BitXor).add(1).add(2).add(3);
        assert_eq!(op.operands().len(), 3);
        assert_eq!(op.operands()[0], Fragment::from(1));
        assert_eq!(op.operands()[2], Fragment::from(3));
    }
}
