//! Table aliases and column references.

use crate::metadata::TypeKey;

/// What an alias points at.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasTable {
    /// The alias name is the table name (`FROM "person"`)
    Same,
    /// Explicit table (`FROM "dbo"."persons" AS "p"`)
    Named { table: String, schema: Option<String> },
    /// Table registered for a host type, resolved through the metadata provider
    Typed(TypeKey),
}

/// A named table reference.
///
/// Identity is the alias name: two aliases over the same table are
/// different references, and columns resolve against the alias they were
/// taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    name: String,
    table: AliasTable,
}

impl Alias {
    /// Alias that is also the table name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: AliasTable::Same,
        }
    }

    /// Alias `name` over the table `table`.
    pub fn for_table(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: AliasTable::Named {
                table: table.into(),
                schema: None,
            },
        }
    }

    /// Alias over the table registered for `T`.
    pub fn typed<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: AliasTable::Typed(TypeKey::of::<T>()),
        }
    }

    /// Qualify a named table with a schema. No effect on other aliases.
    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        if let AliasTable::Named { schema: s, .. } = &mut self.table {
            *s = Some(schema.into());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// True when no separate table is involved, so the alias renders alone.
    pub fn is_plain(&self) -> bool {
        matches!(self.table, AliasTable::Same)
    }

    /// Column `property` of this alias.
    pub fn col(&self, property: impl Into<String>) -> Column {
        Column {
            alias: Some(self.clone()),
            property: Some(property.into()),
        }
    }

    /// All columns of this alias (`"p".*`).
    pub fn all(&self) -> Column {
        Column {
            alias: Some(self.clone()),
            property: None,
        }
    }
}

/// A column reference, optionally qualified by an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) alias: Option<Alias>,
    /// Property path; `None` selects all columns
    pub(crate) property: Option<String>,
}

impl Column {
    /// Unqualified column.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            alias: None,
            property: Some(property.into()),
        }
    }

    /// Unqualified `*`.
    pub fn all() -> Self {
        Self {
            alias: None,
            property: None,
        }
    }

    pub fn alias(&self) -> Option<&Alias> {
        self.alias.as_ref()
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn is_all(&self) -> bool {
        self.property.is_none()
    }
}
