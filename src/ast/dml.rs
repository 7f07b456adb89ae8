//! INSERT, UPDATE and DELETE statements.

use super::{Alias, Fragment};
use crate::error::{SqlError, SqlResult};

#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// One inner vector per row, matching the column list
    Values(Vec<Vec<Fragment>>),
    Query(Fragment),
}

/// `INSERT INTO table (columns) VALUES ... | SELECT ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub(crate) table: Alias,
    /// Property paths, resolved to column names through the alias
    pub(crate) columns: Vec<String>,
    pub(crate) source: InsertSource,
}

impl Insert {
    pub fn new<S: Into<String>>(table: Alias, columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            source: InsertSource::Values(Vec::new()),
        }
    }

    /// Append a row. Its width must match the column list.
    pub fn values<F: Into<Fragment>>(mut self, row: impl IntoIterator<Item = F>) -> SqlResult<Self> {
        let row: Vec<Fragment> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(SqlError::invalid(format!(
                "Row has {} values but {} columns were given.",
                row.len(),
                self.columns.len()
            )));
        }
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row),
            InsertSource::Query(_) => {
                return Err(SqlError::invalid(
                    "Insert cannot mix value rows and a query.",
                ));
            }
        }
        Ok(self)
    }

    /// Insert the result of a query instead of value rows.
    pub fn select(mut self, query: impl Into<Fragment>) -> SqlResult<Self> {
        if matches!(&self.source, InsertSource::Values(rows) if !rows.is_empty()) {
            return Err(SqlError::invalid(
                "Insert cannot mix value rows and a query.",
            ));
        }
        self.source = InsertSource::Query(query.into());
        Ok(self)
    }
}

/// `UPDATE table SET column = value, ... [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub(crate) table: Alias,
    pub(crate) sets: Vec<(String, Fragment)>,
    pub(crate) filter: Option<Fragment>,
}

impl Update {
    pub fn new(table: Alias) -> Self {
        Self {
            table,
            sets: Vec::new(),
            filter: None,
        }
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<Fragment>) -> Self {
        self.sets.push((property.into(), value.into()));
        self
    }

    pub fn filter(mut self, condition: impl Into<Fragment>) -> Self {
        self.filter = Some(condition.into());
        self
    }
}

/// `DELETE FROM table [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub(crate) table: Alias,
    pub(crate) filter: Option<Fragment>,
}

impl Delete {
    pub fn new(table: Alias) -> Self {
        Self {
            table,
            filter: None,
        }
    }

    pub fn filter(mut self, condition: impl Into<Fragment>) -> Self {
        self.filter = Some(condition.into());
        self
    }
}
