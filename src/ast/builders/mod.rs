//! Free-function constructors for fragments.
//!
//! Every helper is a plain constructor with no hidden state, so fragment
//! trees can be built anywhere and compiled against any engine.
//!
//! # Modules
//!
//! - `columns` - Aliases, columns and literal values
//! - `conditions` - Comparisons and predicates (eq, between, in, exists)
//! - `operators` - Operator chains (and, or, arithmetic, bitwise) and set operations
//! - `functions` - Function calls (COUNT, TRIM, SUBSTRING, ...)
//! - `statements` - SELECT, CASE, OVER, TOP, ORDER and DML builders
//!
//! # Example
//! ```
//! use sqlfrag::ast::builders::*;
//!
//! let person = alias("person");
//! let statement = query(select().add(person.col("Name")))
//!     .from(&person)
//!     .filter(eq(person.col("Id"), 1))
//!     .order_by(desc(person.col("Name")));
//! ```

pub mod columns;
pub mod conditions;
pub mod functions;
pub mod operators;
pub mod statements;

pub use columns::{alias, col, null, star, val};

pub use conditions::{
    between, eq, exists, gt, gt_eq, in_query, is_in, is_not_null, is_null, like, lt, lt_eq, not,
    not_between, not_eq, not_exists, not_in, not_like,
};

pub use operators::{
    and, and_all, bit_and, bit_not, bit_or, bit_xor, chain, concat, divide, except, except_all,
    intersect, intersect_all, minus, modulo, negate, or, or_any, plus, times, union, union_all,
};

pub use functions::{
    avg, coalesce, count, count_distinct, func, length, lower, ltrim_chars, max, min, now, rank,
    row_number, rtrim_chars, substring, sum, trim, trim_chars, upper,
};

pub use statements::{
    asc, case, case_of, delete_from, desc, insert_into, over, query, raw, select, top, update,
    with,
};
