//! SELECT statements and their clauses.

use serde::{Deserialize, Serialize};

use super::{Alias, Fragment, Raw};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub(crate) expr: Fragment,
    pub(crate) alias: Option<String>,
    pub(crate) over: Option<Over>,
}

impl SelectItem {
    pub fn new(expr: impl Into<Fragment>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
            over: None,
        }
    }

    fn is_all(&self) -> bool {
        matches!(&self.expr, Fragment::Column(c) if c.is_all())
    }

    /// `expr AS alias`. Rejected on an "all columns" entry.
    pub fn alias(mut self, alias: impl Into<String>) -> SqlResult<Self> {
        if self.is_all() {
            return Err(SqlError::invalid(
                "An alias cannot be set on an \"all columns\" select item.",
            ));
        }
        self.alias = Some(alias.into());
        Ok(self)
    }

    /// `expr OVER(...)`. Rejected on an "all columns" entry.
    pub fn over(mut self, over: Over) -> SqlResult<Self> {
        if self.is_all() {
            return Err(SqlError::invalid(
                "An over clause cannot be set on an \"all columns\" select item.",
            ));
        }
        self.over = Some(over);
        Ok(self)
    }
}

/// `SELECT [DISTINCT [ON(...)]] [TOP(...)] items`
///
/// The header order is fixed; engines only decide whether a part is
/// available and how its tokens are spelled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectList {
    pub(crate) distinct: bool,
    pub(crate) distinct_on: Vec<Fragment>,
    pub(crate) top: Option<Top>,
    pub(crate) items: Vec<SelectItem>,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, expr: impl Into<Fragment>) -> Self {
        self.items.push(SelectItem::new(expr));
        self
    }

    pub fn add_as(self, expr: impl Into<Fragment>, alias: impl Into<String>) -> SqlResult<Self> {
        let item = SelectItem::new(expr).alias(alias)?;
        Ok(self.item(item))
    }

    pub fn add_over(self, expr: impl Into<Fragment>, over: Over) -> SqlResult<Self> {
        let item = SelectItem::new(expr).over(over)?;
        Ok(self.item(item))
    }

    pub fn add_over_as(
        self,
        expr: impl Into<Fragment>,
        over: Over,
        alias: impl Into<String>,
    ) -> SqlResult<Self> {
        let item = SelectItem::new(expr).over(over)?.alias(alias)?;
        Ok(self.item(item))
    }

    pub fn item(mut self, item: SelectItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// `DISTINCT ON(exprs)`; implies DISTINCT.
    pub fn distinct_on<F: Into<Fragment>>(mut self, exprs: impl IntoIterator<Item = F>) -> Self {
        self.distinct = true;
        self.distinct_on.extend(exprs.into_iter().map(Into::into));
        self
    }

    pub fn top(mut self, top: Top) -> Self {
        self.top = Some(top);
        self
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopValue {
    Count(Value),
    Raw(Raw),
}

/// `TOP(n) [PERCENT] [WITH TIES]`
#[derive(Debug, Clone, PartialEq)]
pub struct Top {
    pub(crate) value: TopValue,
    pub(crate) percent: bool,
    pub(crate) with_ties: bool,
}

impl Top {
    pub fn new(count: impl Into<Value>) -> Self {
        Self {
            value: TopValue::Count(count.into()),
            percent: false,
            with_ties: false,
        }
    }

    /// TOP with a raw expression; count modifiers are not available.
    pub fn raw(raw: Raw) -> Self {
        Self {
            value: TopValue::Raw(raw),
            percent: false,
            with_ties: false,
        }
    }

    pub fn percent(mut self) -> SqlResult<Self> {
        self.require_count("PERCENT")?;
        self.percent = true;
        Ok(self)
    }

    pub fn with_ties(mut self) -> SqlResult<Self> {
        self.require_count("WITH TIES")?;
        self.with_ties = true;
        Ok(self)
    }

    fn require_count(&self, modifier: &str) -> SqlResult<()> {
        match self.value {
            TopValue::Count(_) => Ok(()),
            TopValue::Raw(_) => Err(SqlError::invalid(format!(
                "{} can only be applied to a top count, not to a raw top value.",
                modifier
            ))),
        }
    }
}

/// `OVER([PARTITION BY ..] [ORDER BY ..] [frame])`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Over {
    pub(crate) partition_by: Vec<Fragment>,
    pub(crate) order_by: Vec<Fragment>,
    pub(crate) frame: Option<Raw>,
}

impl Over {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.partition_by.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    /// Frame extent, e.g. `ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`.
    pub fn frame(mut self, frame: Raw) -> Self {
        self.frame = Some(frame);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub(crate) expr: Fragment,
    pub(crate) direction: SortOrder,
}

impl Order {
    pub fn new(expr: impl Into<Fragment>, direction: SortOrder) -> Self {
        Self {
            expr: expr.into(),
            direction,
        }
    }
}

/// Something that can appear after FROM or JOIN.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    Table(Alias),
    /// `(subquery) AS alias`
    Query { query: Fragment, alias: String },
    Raw(Raw),
}

impl TableSource {
    pub fn subquery(query: impl Into<Fragment>, alias: impl Into<String>) -> Self {
        TableSource::Query {
            query: query.into(),
            alias: alias.into(),
        }
    }
}

impl From<Alias> for TableSource {
    fn from(alias: Alias) -> Self {
        TableSource::Table(alias)
    }
}

impl From<&Alias> for TableSource {
    fn from(alias: &Alias) -> Self {
        TableSource::Table(alias.clone())
    }
}

impl From<Raw> for TableSource {
    fn from(raw: Raw) -> Self {
        TableSource::Raw(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub(crate) kind: JoinKind,
    pub(crate) source: TableSource,
    pub(crate) on: Option<Fragment>,
}

/// Common table expression (`name [(cols)] AS (query)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub(crate) name: String,
    pub(crate) columns: Vec<String>,
    pub(crate) query: Fragment,
    pub(crate) recursive: bool,
}

impl Cte {
    pub fn new(name: impl Into<String>, query: impl Into<Fragment>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            query: query.into(),
            recursive: false,
        }
    }

    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

/// A complete SELECT statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub(crate) with: Vec<Cte>,
    pub(crate) select: SelectList,
    pub(crate) from: Vec<TableSource>,
    pub(crate) joins: Vec<Join>,
    pub(crate) filter: Option<Fragment>,
    pub(crate) group_by: Vec<Fragment>,
    pub(crate) having: Option<Fragment>,
    pub(crate) order_by: Vec<Fragment>,
    pub(crate) offset: Option<Fragment>,
    pub(crate) limit: Option<Fragment>,
}

impl Query {
    pub fn new(select: SelectList) -> Self {
        Self {
            select,
            ..Self::default()
        }
    }

    pub fn with(mut self, cte: Cte) -> Self {
        self.with.push(cte);
        self
    }

    pub fn from(mut self, source: impl Into<TableSource>) -> Self {
        self.from.push(source.into());
        self
    }

    pub fn join(
        mut self,
        kind: JoinKind,
        source: impl Into<TableSource>,
        on: Option<Fragment>,
    ) -> Self {
        self.joins.push(Join {
            kind,
            source: source.into(),
            on,
        });
        self
    }

    pub fn inner_join(self, source: impl Into<TableSource>, on: impl Into<Fragment>) -> Self {
        self.join(JoinKind::Inner, source, Some(on.into()))
    }

    pub fn left_join(self, source: impl Into<TableSource>, on: impl Into<Fragment>) -> Self {
        self.join(JoinKind::Left, source, Some(on.into()))
    }

    pub fn right_join(self, source: impl Into<TableSource>, on: impl Into<Fragment>) -> Self {
        self.join(JoinKind::Right, source, Some(on.into()))
    }

    pub fn full_join(self, source: impl Into<TableSource>, on: impl Into<Fragment>) -> Self {
        self.join(JoinKind::Full, source, Some(on.into()))
    }

    pub fn cross_join(self, source: impl Into<TableSource>) -> Self {
        self.join(JoinKind::Cross, source, None)
    }

    /// WHERE condition. Calling it again ANDs the conditions together.
    pub fn filter(mut self, condition: impl Into<Fragment>) -> Self {
        self.filter = Some(match self.filter.take() {
            None => condition.into(),
            Some(existing) => super::builders::and().add(existing).add(condition).into(),
        });
        self
    }

    pub fn group_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, condition: impl Into<Fragment>) -> Self {
        self.having = Some(condition.into());
        self
    }

    /// ORDER BY item; pass an [`Order`] for an explicit direction.
    pub fn order_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<Fragment>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<Fragment>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}
