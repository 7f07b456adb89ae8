//! Table and column metadata lookups.
//!
//! The compiler only needs point lookups: "which table does this type map
//! to" and "which column does this property path map to". Anything that can
//! answer those implements [`MetadataProvider`]. [`Tables`] is the in-memory
//! provider, filled once through [`TablesBuilder`] and read-only afterwards.
//!
//! ```
//! use sqlfrag::metadata::Tables;
//!
//! struct Person;
//!
//! let tables = Tables::builder()
//!     .table::<Person>("person", |t| {
//!         t.key("Id").column("Name").column("Address.Street")
//!     })
//!     .build();
//! let info = tables.get::<Person>().unwrap();
//! assert_eq!(info.column_name("Address.Street"), Some("AddressStreet"));
//! ```

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt::Debug;

use indexmap::IndexMap;

use crate::error::{SqlError, SqlResult};

/// Identity of a host type registered as a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(std::any::type_name::<T>()),
        }
    }

    /// Unqualified type name, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// `my_crate::model::Person` -> `Person`, keeping generic arguments intact.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

/// Opaque key/value metadata, passed through to downstream consumers.
pub type Extra = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Dot-separated property path (`Address.Street`)
    pub property: String,
    /// Column name in the database (`AddressStreet`)
    pub name: String,
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
    pub name: String,
    pub schema: Option<String>,
    /// Property paths of the primary key, in declaration order
    pub primary_keys: Vec<String>,
    /// Columns keyed by property path, in declaration order
    pub columns: IndexMap<String, ColumnInfo>,
    pub extra: Extra,
}

impl TableInfo {
    pub fn column_name(&self, property: &str) -> Option<&str> {
        self.columns.get(property).map(|c| c.name.as_str())
    }

    /// Property paths in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// Source of table metadata consumed by the engine.
pub trait MetadataProvider: Send + Sync + Debug {
    fn table(&self, key: &TypeKey) -> Option<&TableInfo>;
}

/// In-memory metadata keyed by host type.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    tables: HashMap<TypeId, TableInfo>,
}

impl Tables {
    pub fn builder() -> TablesBuilder {
        TablesBuilder::default()
    }

    pub fn get<T: 'static>(&self) -> Option<&TableInfo> {
        self.tables.get(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl MetadataProvider for Tables {
    fn table(&self, key: &TypeKey) -> Option<&TableInfo> {
        self.tables.get(&key.id)
    }
}

/// Builder for [`Tables`].
#[derive(Debug, Default)]
pub struct TablesBuilder {
    tables: HashMap<TypeId, TableInfo>,
}

impl TablesBuilder {
    /// Register `T` as table `name`, configured by `configure`.
    ///
    /// Registering the same type twice replaces the earlier entry.
    pub fn table<T: 'static>(
        mut self,
        name: impl Into<String>,
        configure: impl FnOnce(TableBuilder) -> TableBuilder,
    ) -> Self {
        let builder = configure(TableBuilder::new(name.into()));
        self.tables.insert(TypeId::of::<T>(), builder.build());
        self
    }

    pub fn build(self) -> Tables {
        Tables {
            tables: self.tables,
        }
    }
}

/// Configures one table. Column names are computed here, once.
#[derive(Debug)]
pub struct TableBuilder {
    info: TableInfo,
}

impl TableBuilder {
    fn new(name: String) -> Self {
        Self {
            info: TableInfo {
                name,
                schema: None,
                primary_keys: Vec::new(),
                columns: IndexMap::new(),
                extra: Extra::new(),
            },
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.info.schema = Some(schema.into());
        self
    }

    /// Add a column with the default flattened name.
    pub fn column(self, property: &str) -> Self {
        let name = flatten_property(property);
        self.column_as(property, name)
    }

    /// Add a column with an explicit name.
    pub fn column_as(mut self, property: &str, name: impl Into<String>) -> Self {
        self.info.columns.insert(
            property.to_string(),
            ColumnInfo {
                property: property.to_string(),
                name: name.into(),
                extra: Extra::new(),
            },
        );
        self
    }

    /// Add a primary key column (also registered as a regular column).
    pub fn key(mut self, property: &str) -> Self {
        if !self.info.columns.contains_key(property) {
            self = self.column(property);
        }
        self.info.primary_keys.push(property.to_string());
        self
    }

    /// Override the column name of an already registered property.
    pub fn rename(mut self, property: &str, name: impl Into<String>) -> Self {
        if let Some(column) = self.info.columns.get_mut(property) {
            column.name = name.into();
        }
        self
    }

    /// Attach metadata to the table, or to a column when `property` is set.
    pub fn extra(
        mut self,
        property: Option<&str>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        match property {
            None => {
                self.info.extra.insert(key.into(), value.into());
            }
            Some(p) => {
                if let Some(column) = self.info.columns.get_mut(p) {
                    column.extra.insert(key.into(), value.into());
                }
            }
        }
        self
    }

    fn build(self) -> TableInfo {
        self.info
    }
}

/// Default column name for a property path: segments concatenated.
pub fn flatten_property(property: &str) -> String {
    property.split('.').collect()
}

/// Lookup helpers shared by the engine and the compiler.
pub(crate) fn require_table<'a>(
    provider: &'a dyn MetadataProvider,
    key: &TypeKey,
) -> SqlResult<&'a TableInfo> {
    provider
        .table(key)
        .ok_or_else(|| SqlError::TypeNotRegistered(key.name().to_string()))
}

pub(crate) fn require_column<'a>(
    provider: &'a dyn MetadataProvider,
    key: &TypeKey,
    property: &str,
) -> SqlResult<&'a str> {
    require_table(provider, key)?
        .column_name(property)
        .ok_or_else(|| SqlError::property(key.name(), property))
}
