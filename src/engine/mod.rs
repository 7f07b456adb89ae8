//! Engines: dialect options, registries and the compile entry point.
//!
//! An [`Engine`] is configuration only. Every call to [`Engine::compile`]
//! builds its own [`QueryBuilder`], so one engine can serve concurrent
//! compilations as long as nobody mutates it at the same time.

pub mod config;
pub mod dialect;
pub mod options;
pub mod registry;
pub mod sql;

pub use config::EngineConfig;
pub use dialect::Dialect;
pub use options::{NameCase, OffsetStyle, OptionOverrides, Options};
pub use registry::{
    CompileFn, FunctionData, Registry, call_list, compile_fn, keyword_only, nested_call, trim_from,
};

use std::sync::Arc;

use indexmap::IndexMap;

use crate::ast::Fragment;
use crate::compiler::{CompiledQuery, QueryBuilder};
use crate::error::SqlResult;
use crate::metadata::{MetadataProvider, TableInfo, Tables, TypeKey, require_column, require_table};

/// Dialect-specific compiler configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Formatting rules and feature flags, read on every compilation
    pub options: Options,
    dialect: Dialect,
    functions: Registry,
    operators: Registry,
    metadata: Arc<dyn MetadataProvider>,
}

impl Engine {
    /// Engine preset for `dialect`, without table metadata.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            options: dialect.options(),
            dialect,
            functions: dialect.functions(),
            operators: dialect.operators(),
            metadata: Arc::new(Tables::default()),
        }
    }

    pub fn generic() -> Self {
        Self::new(Dialect::Generic)
    }

    pub fn mysql() -> Self {
        Self::new(Dialect::MySql)
    }

    pub fn postgres() -> Self {
        Self::new(Dialect::Postgres)
    }

    pub fn sql_server() -> Self {
        Self::new(Dialect::SqlServer)
    }

    pub fn oracle() -> Self {
        Self::new(Dialect::Oracle)
    }

    pub fn sqlite() -> Self {
        Self::new(Dialect::Sqlite)
    }

    /// Attach a metadata provider for typed aliases.
    pub fn with_metadata(mut self, metadata: impl MetadataProvider + 'static) -> Self {
        self.metadata = Arc::new(metadata);
        self
    }

    /// Share an existing metadata provider.
    pub fn with_shared_metadata(mut self, metadata: Arc<dyn MetadataProvider>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn metadata(&self) -> &dyn MetadataProvider {
        self.metadata.as_ref()
    }

    /// Compile a fragment into SQL text and its parameters.
    pub fn compile(&self, fragment: impl Into<Fragment>) -> SqlResult<CompiledQuery> {
        self.compile_ref(&fragment.into())
    }

    /// Compile a borrowed fragment. The fragment is never modified.
    pub fn compile_ref(&self, fragment: &Fragment) -> SqlResult<CompiledQuery> {
        let mut builder = QueryBuilder::new(self);
        match builder.compile_statement(fragment) {
            Ok(()) => {
                let compiled = builder.finish();
                tracing::debug!(
                    "Compiled [{}]: {} ({} parameters)",
                    self.dialect,
                    compiled.sql,
                    compiled.parameters.len()
                );
                Ok(compiled)
            }
            Err(e) => {
                tracing::debug!("Compile failed [{}]: {}", self.dialect, e);
                Err(e)
            }
        }
    }

    /// Quote an identifier: each dot-separated segment is wrapped on its own,
    /// embedded escape characters are dropped, then case folding applies.
    pub fn escape_name(&self, name: &str) -> String {
        let options = &self.options;
        let (start, end) = (options.escape_start, options.escape_end);
        let mut escaped = String::with_capacity(name.len() + 4);
        for (i, segment) in name.split('.').enumerate() {
            if i > 0 {
                escaped.push('.');
            }
            escaped.push(start);
            escaped.extend(segment.chars().filter(|c| *c != start && *c != end));
            escaped.push(end);
        }
        options.name_case.apply(escaped)
    }

    // Function registry

    pub fn functions(&self) -> &Registry {
        &self.functions
    }

    pub fn functions_mut(&mut self) -> &mut Registry {
        &mut self.functions
    }

    pub fn add_function(&mut self, name: &str) -> &mut Self {
        tracing::trace!("Register function {} [{}]", name, self.dialect);
        self.functions.add(name);
        self
    }

    pub fn add_function_as(&mut self, name: &str, spelling: &str) -> &mut Self {
        tracing::trace!("Register function {} as {} [{}]", name, spelling, self.dialect);
        self.functions.add_as(name, spelling);
        self
    }

    pub fn add_function_custom(&mut self, name: &str, compile: CompileFn) -> &mut Self {
        tracing::trace!("Register custom function {} [{}]", name, self.dialect);
        self.functions.add_custom(name, compile);
        self
    }

    pub fn remove_function(&mut self, name: &str) -> Option<FunctionData> {
        tracing::trace!("Remove function {} [{}]", name, self.dialect);
        self.functions.remove(name)
    }

    pub fn contains_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn clear_functions(&mut self) {
        tracing::trace!("Clear functions [{}]", self.dialect);
        self.functions.clear();
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionData> {
        self.functions.get(name)
    }

    // Operator registry

    pub fn operators(&self) -> &Registry {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> &mut Registry {
        &mut self.operators
    }

    // Metadata lookups

    pub fn is_table<T: 'static>(&self) -> bool {
        self.metadata.table(&TypeKey::of::<T>()).is_some()
    }

    pub fn table_info<T: 'static>(&self) -> SqlResult<&TableInfo> {
        require_table(self.metadata.as_ref(), &TypeKey::of::<T>())
    }

    pub fn table_name<T: 'static>(&self) -> SqlResult<&str> {
        Ok(self.table_info::<T>()?.name.as_str())
    }

    pub fn primary_keys<T: 'static>(&self) -> SqlResult<&[String]> {
        Ok(&self.table_info::<T>()?.primary_keys)
    }

    /// Property paths in declaration order.
    pub fn columns<T: 'static>(&self) -> SqlResult<Vec<&str>> {
        Ok(self.table_info::<T>()?.properties().collect())
    }

    /// Column names in declaration order.
    pub fn column_names<T: 'static>(&self) -> SqlResult<Vec<&str>> {
        Ok(self
            .table_info::<T>()?
            .columns
            .values()
            .map(|c| c.name.as_str())
            .collect())
    }

    pub fn column_name<T: 'static>(&self, property: &str) -> SqlResult<&str> {
        require_column(self.metadata.as_ref(), &TypeKey::of::<T>(), property)
    }

    /// Property path -> column name, in declaration order.
    pub fn column_names_dic<T: 'static>(&self) -> SqlResult<IndexMap<&str, &str>> {
        Ok(self
            .table_info::<T>()?
            .columns
            .iter()
            .map(|(property, c)| (property.as_str(), c.name.as_str()))
            .collect())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::generic()
    }
}
