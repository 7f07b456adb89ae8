//! The fragment model.
//!
//! A [`Fragment`] is any node that can produce SQL text. Nodes only own
//! their shape (children, modifiers, ordering); spelling is decided by the
//! [`Engine`](crate::engine::Engine) at compile time.

pub mod builders;
pub mod case;
pub mod column;
pub mod dml;
pub mod function;
pub mod operators;
pub mod raw;
pub mod select;

pub use self::case::Case;
pub use self::column::{Alias, AliasTable, Column};
pub use self::dml::{Delete, Insert, InsertSource, Update};
pub use self::function::Function;
pub use self::operators::{Arity, Operation, Operator, SetOperation, SetOperator};
pub use self::raw::{Raw, RawArg};
pub use self::select::{
    Cte, Join, JoinKind, Order, Over, Query, SelectItem, SelectList, SortOrder, TableSource, Top,
    TopValue,
};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::value::Value;

/// A node of the query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Literal value, always compiled to a parameter placeholder
    Value(Value),
    Column(Column),
    /// Bare table alias (`"p"`)
    Alias(Alias),
    Operation(Operation),
    Function(Function),
    Case(Box<Case>),
    /// `SELECT [DISTINCT [ON(...)]] [TOP(...)] items`
    Select(Box<SelectList>),
    Top(Box<Top>),
    /// `OVER(...)` window clause
    Over(Box<Over>),
    /// Sort item (`expr ASC`)
    Order(Box<Order>),
    /// Full SELECT statement
    Query(Box<Query>),
    SetOperation(Box<SetOperation>),
    Insert(Box<Insert>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    Raw(Raw),
}

impl Fragment {
    /// Statement-like fragments get parentheses when nested in an expression.
    pub fn is_subquery(&self) -> bool {
        matches!(
            self,
            Fragment::Select(_) | Fragment::Query(_) | Fragment::SetOperation(_)
        )
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::compiler::display(self))
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        Fragment::Value(value)
    }
}

macro_rules! value_fragment {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Fragment {
                fn from(v: $t) -> Self {
                    Fragment::Value(Value::from(v))
                }
            }
        )*
    };
}

value_fragment!(
    bool,
    i32,
    i64,
    u32,
    f64,
    &str,
    String,
    Vec<u8>,
    Decimal,
    Uuid,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    serde_json::Value,
);

impl<T: Into<Value>> From<Option<T>> for Fragment {
    fn from(opt: Option<T>) -> Self {
        Fragment::Value(Value::from(opt))
    }
}

impl From<Column> for Fragment {
    fn from(column: Column) -> Self {
        Fragment::Column(column)
    }
}

impl From<Alias> for Fragment {
    fn from(alias: Alias) -> Self {
        Fragment::Alias(alias)
    }
}

impl From<Operation> for Fragment {
    fn from(operation: Operation) -> Self {
        Fragment::Operation(operation)
    }
}

impl From<Function> for Fragment {
    fn from(function: Function) -> Self {
        Fragment::Function(function)
    }
}

impl From<Case> for Fragment {
    fn from(case: Case) -> Self {
        Fragment::Case(Box::new(case))
    }
}

impl From<SelectList> for Fragment {
    fn from(select: SelectList) -> Self {
        Fragment::Select(Box::new(select))
    }
}

impl From<Top> for Fragment {
    fn from(top: Top) -> Self {
        Fragment::Top(Box::new(top))
    }
}

impl From<Over> for Fragment {
    fn from(over: Over) -> Self {
        Fragment::Over(Box::new(over))
    }
}

impl From<Order> for Fragment {
    fn from(order: Order) -> Self {
        Fragment::Order(Box::new(order))
    }
}

impl From<Query> for Fragment {
    fn from(query: Query) -> Self {
        Fragment::Query(Box::new(query))
    }
}

impl From<SetOperation> for Fragment {
    fn from(set: SetOperation) -> Self {
        Fragment::SetOperation(Box::new(set))
    }
}

impl From<Insert> for Fragment {
    fn from(insert: Insert) -> Self {
        Fragment::Insert(Box::new(insert))
    }
}

impl From<Update> for Fragment {
    fn from(update: Update) -> Self {
        Fragment::Update(Box::new(update))
    }
}

impl From<Delete> for Fragment {
    fn from(delete: Delete) -> Self {
        Fragment::Delete(Box::new(delete))
    }
}

impl From<Raw> for Fragment {
    fn from(raw: Raw) -> Self {
        Fragment::Raw(raw)
    }
}
