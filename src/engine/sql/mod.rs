//! Dialect presets: options plus function and operator tables.
//!
//! Presets are plain data. Adding a dialect means adding a module here and
//! a [`Dialect`](super::Dialect) variant; the compiler stays untouched.

pub mod generic;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlite;
pub mod sqlserver;

use super::registry::Registry;

/// Functions every dialect spells the same way.
const COMMON_FUNCTIONS: &[&str] = &[
    "ABS",
    "AVG",
    "CEILING",
    "COALESCE",
    "COUNT",
    "DENSE_RANK",
    "FLOOR",
    "LAG",
    "LEAD",
    "LENGTH",
    "LOWER",
    "LTRIM",
    "MAX",
    "MIN",
    "NOW",
    "NULLIF",
    "RANK",
    "REPLACE",
    "ROUND",
    "ROW_NUMBER",
    "RTRIM",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
];

pub(crate) fn common_functions() -> Registry {
    let mut registry = Registry::new();
    for name in COMMON_FUNCTIONS {
        registry.add(name);
    }
    registry
}

/// `TRIM(chars FROM x)`, `TRIM(LEADING chars FROM x)`, `TRIM(TRAILING chars FROM x)`.
pub(crate) fn standard_trims(registry: &mut Registry) {
    use super::registry::trim_from;

    registry
        .add_custom("TRIM", trim_from("TRIM", None))
        .add_custom("LTRIM", trim_from("LTRIM", Some("LEADING")))
        .add_custom("RTRIM", trim_from("RTRIM", Some("TRAILING")));
}
