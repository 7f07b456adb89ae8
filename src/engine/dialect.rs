use serde::{Deserialize, Serialize};

use super::options::Options;
use super::registry::Registry;
use super::sql;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Standard SQL with every optional clause enabled
    #[default]
    Generic,
    MySql,
    Postgres,
    SqlServer,
    Oracle,
    Sqlite,
}

impl Dialect {
    pub fn options(&self) -> Options {
        match self {
            Dialect::Generic => sql::generic::options(),
            Dialect::MySql => sql::mysql::options(),
            Dialect::Postgres => sql::postgres::options(),
            Dialect::SqlServer => sql::sqlserver::options(),
            Dialect::Oracle => sql::oracle::options(),
            Dialect::Sqlite => sql::sqlite::options(),
        }
    }

    pub fn functions(&self) -> Registry {
        match self {
            Dialect::Generic => sql::generic::functions(),
            Dialect::MySql => sql::mysql::functions(),
            Dialect::Postgres => sql::postgres::functions(),
            Dialect::SqlServer => sql::sqlserver::functions(),
            Dialect::Oracle => sql::oracle::functions(),
            Dialect::Sqlite => sql::sqlite::functions(),
        }
    }

    pub fn operators(&self) -> Registry {
        match self {
            Dialect::Generic => Registry::new(),
            Dialect::MySql => sql::mysql::operators(),
            Dialect::Postgres => sql::postgres::operators(),
            Dialect::SqlServer => sql::sqlserver::operators(),
            Dialect::Oracle => sql::oracle::operators(),
            Dialect::Sqlite => sql::sqlite::operators(),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sqlserver",
            Dialect::Oracle => "oracle",
            Dialect::Sqlite => "sqlite",
        };
        write!(f, "{}", name)
    }
}
