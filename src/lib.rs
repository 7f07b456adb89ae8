//! # sqlfrag: dialect-aware SQL fragments
//!
//! Build a query as a tree of fragments, then compile it for a target
//! database. The tree decides structure (operand order, clause order);
//! the [`Engine`](engine::Engine) decides spelling (quoting, operator and
//! function names, which clauses exist).
//!
//! ## Quick Example
//!
//! ```
//! use sqlfrag::prelude::*;
//!
//! let person = alias("person");
//! let statement = query(select().add(person.col("Name")))
//!     .from(&person)
//!     .filter(eq(person.col("Id"), 1));
//!
//! let compiled = Engine::generic().compile(statement.clone()).unwrap();
//! assert_eq!(
//!     compiled.sql,
//!     "SELECT \"person\".\"Name\" FROM \"person\" WHERE \"person\".\"Id\" = @p0"
//! );
//! assert_eq!(compiled.parameters["@p0"], Value::Int(1));
//!
//! let compiled = Engine::mysql().compile(statement).unwrap();
//! assert_eq!(
//!     compiled.sql,
//!     "SELECT `person`.`Name` FROM `person` WHERE `person`.`Id` = @p0"
//! );
//! ```
//!
//! ## Dialects
//!
//! | Dialect    | Quoting | Case  | Paging                 | Parameters |
//! |------------|---------|-------|------------------------|------------|
//! | generic    | `"x"`   | as is | `OFFSET .. FETCH NEXT` | `@p0`      |
//! | mysql      | `` `x` `` | as is | `LIMIT .. OFFSET`  | `@p0`      |
//! | postgres   | `"x"`   | lower | `LIMIT .. OFFSET`      | `@p0`      |
//! | sqlserver  | `[x]`   | as is | `OFFSET .. FETCH NEXT` | `@p0`      |
//! | oracle     | `"X"`   | upper | `OFFSET .. FETCH NEXT` | `:p0`      |
//! | sqlite     | `"x"`   | as is | `LIMIT .. OFFSET`      | `@p0`      |

pub mod ast;
pub mod compiler;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod value;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::{
        Alias, Case, Column, Cte, Delete, Fragment, Function, Insert, JoinKind, Operation,
        Operator, Order, Over, Query, Raw, SelectItem, SelectList, SetOperation, SetOperator,
        SortOrder, TableSource, Top, Update,
    };
    pub use crate::compiler::{CompiledQuery, Parameters, QueryBuilder};
    pub use crate::engine::{Dialect, Engine, EngineConfig, NameCase, OffsetStyle, Options};
    pub use crate::error::*;
    pub use crate::metadata::{MetadataProvider, Tables};
    pub use crate::value::Value;
}
