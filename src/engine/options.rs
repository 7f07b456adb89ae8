//! Per-engine formatting rules and feature flags.

use serde::{Deserialize, Serialize};

use crate::error::{SqlError, SqlResult};

/// Case folding applied to escaped identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    #[default]
    Preserve,
    Upper,
    Lower,
}

impl NameCase {
    pub fn apply(&self, name: String) -> String {
        match self {
            NameCase::Preserve => name,
            NameCase::Upper => name.to_uppercase(),
            NameCase::Lower => name.to_lowercase(),
        }
    }
}

/// How OFFSET / LIMIT are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetStyle {
    NotSupported,
    /// `OFFSET x ROWS FETCH NEXT y ROWS ONLY`
    #[default]
    OffsetFetch,
    /// `LIMIT y OFFSET x`
    LimitOffset,
}

/// Engine configuration.
///
/// Owned by the engine and public so callers (and tests) can flip flags
/// between compilations. Every compilation reads the current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub escape_start: char,
    pub escape_end: char,
    pub name_case: NameCase,
    /// `FROM "person" AS "p"` instead of `FROM "person" "p"`
    pub table_alias_as: bool,
    /// Table used when a query has no FROM source (`DUAL`)
    pub dummy_table: Option<String>,
    /// Emit `RECURSIVE` after `WITH` for recursive CTEs
    pub with_recursive: bool,
    pub top_supported: bool,
    /// Bind the TOP count as a parameter instead of inlining it
    pub top_parameterized: bool,
    pub offset_style: OffsetStyle,
    /// LIMIT value meaning "all rows", for engines that reject OFFSET
    /// without LIMIT (`-1` in SQLite)
    pub unbounded_limit: Option<String>,
    pub distinct_on_supported: bool,
    pub right_join_supported: bool,
    pub full_join_supported: bool,
    /// Multi-row inserts as `SELECT .. UNION ALL SELECT ..`
    pub insert_with_union: bool,
    /// `UPDATE "a" SET .. FROM "t" AS "a"`
    pub update_with_from: bool,
    /// Qualify SET targets with the table alias
    pub update_set_with_table_name: bool,
    /// `DELETE "a" FROM "t" AS "a"`
    pub delete_with_alias: bool,
    pub parameter_prefix: String,
    /// Reject functions missing from the registry instead of passing them through
    pub functions_only_registered: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_start: '"',
            escape_end: '"',
            name_case: NameCase::Preserve,
            table_alias_as: true,
            dummy_table: None,
            with_recursive: true,
            top_supported: true,
            top_parameterized: true,
            offset_style: OffsetStyle::OffsetFetch,
            unbounded_limit: None,
            distinct_on_supported: true,
            right_join_supported: true,
            full_join_supported: true,
            insert_with_union: false,
            update_with_from: false,
            update_set_with_table_name: false,
            delete_with_alias: false,
            parameter_prefix: "@p".to_string(),
            functions_only_registered: false,
        }
    }
}

/// Partial [`Options`], applied over a dialect preset.
///
/// Also accepts the legacy `upper_case_names` / `lower_case_names` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionOverrides {
    pub escape_start: Option<char>,
    pub escape_end: Option<char>,
    pub name_case: Option<NameCase>,
    pub upper_case_names: Option<bool>,
    pub lower_case_names: Option<bool>,
    pub table_alias_as: Option<bool>,
    pub dummy_table: Option<String>,
    pub with_recursive: Option<bool>,
    pub top_supported: Option<bool>,
    pub top_parameterized: Option<bool>,
    pub offset_style: Option<OffsetStyle>,
    pub unbounded_limit: Option<String>,
    pub distinct_on_supported: Option<bool>,
    pub right_join_supported: Option<bool>,
    pub full_join_supported: Option<bool>,
    pub insert_with_union: Option<bool>,
    pub update_with_from: Option<bool>,
    pub update_set_with_table_name: Option<bool>,
    pub delete_with_alias: Option<bool>,
    pub parameter_prefix: Option<String>,
    pub functions_only_registered: Option<bool>,
}

/// Empty strings in overrides clear the option.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl OptionOverrides {
    /// Case folding requested through the legacy flags, if any.
    fn legacy_name_case(&self) -> SqlResult<Option<NameCase>> {
        match (self.upper_case_names, self.lower_case_names) {
            (None, None) => Ok(None),
            (Some(true), Some(true)) => Err(SqlError::Config(
                "upper_case_names and lower_case_names cannot both be true".to_string(),
            )),
            (Some(true), _) => Ok(Some(NameCase::Upper)),
            (_, Some(true)) => Ok(Some(NameCase::Lower)),
            _ => Ok(Some(NameCase::Preserve)),
        }
    }

    pub fn apply(&self, options: &mut Options) -> SqlResult<()> {
        let name_case = match (self.name_case, self.legacy_name_case()?) {
            (Some(explicit), Some(legacy)) if explicit != legacy => {
                return Err(SqlError::Config(format!(
                    "name_case = {:?} conflicts with the legacy case flags ({:?})",
                    explicit, legacy
                )));
            }
            (explicit, legacy) => explicit.or(legacy),
        };

        if self.parameter_prefix.as_deref() == Some("") {
            return Err(SqlError::Config(
                "parameter_prefix cannot be empty".to_string(),
            ));
        }

        if let Some(c) = self.escape_start {
            options.escape_start = c;
        }
        if let Some(c) = self.escape_end {
            options.escape_end = c;
        }
        if let Some(case) = name_case {
            options.name_case = case;
        }
        if let Some(table) = &self.dummy_table {
            options.dummy_table = non_empty(table);
        }
        if let Some(style) = self.offset_style {
            options.offset_style = style;
        }
        if let Some(limit) = &self.unbounded_limit {
            options.unbounded_limit = non_empty(limit);
        }
        if let Some(prefix) = &self.parameter_prefix {
            options.parameter_prefix = prefix.clone();
        }

        let flags = [
            (self.table_alias_as, &mut options.table_alias_as),
            (self.with_recursive, &mut options.with_recursive),
            (self.top_supported, &mut options.top_supported),
            (self.top_parameterized, &mut options.top_parameterized),
            (self.distinct_on_supported, &mut options.distinct_on_supported),
            (self.right_join_supported, &mut options.right_join_supported),
            (self.full_join_supported, &mut options.full_join_supported),
            (self.insert_with_union, &mut options.insert_with_union),
            (self.update_with_from, &mut options.update_with_from),
            (
                self.update_set_with_table_name,
                &mut options.update_set_with_table_name,
            ),
            (self.delete_with_alias, &mut options.delete_with_alias),
            (
                self.functions_only_registered,
                &mut options.functions_only_registered,
            ),
        ];
        for (value, slot) in flags {
            if let Some(v) = value {
                *slot = v;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_case_apply() {
        assert_eq!(NameCase::Upper.apply("\"Ab\"".into()), "\"AB\"");
        assert_eq!(NameCase::Lower.apply("\"Ab\"".into()), "\"ab\"");
        assert_eq!(NameCase::Preserve.apply("\"Ab\"".into()), "\"Ab\"");
    }

    #[test]
    fn test_overrides_apply() {
        let mut options = Options::default();
        let overrides = OptionOverrides {
            parameter_prefix: Some(":p".into()),
            top_supported: Some(false),
            upper_case_names: Some(true),
            ..Default::default()
        };
        overrides.apply(&mut options).unwrap();
        assert_eq!(options.parameter_prefix, ":p");
        assert!(!options.top_supported);
        assert_eq!(options.name_case, NameCase::Upper);
        assert!(options.distinct_on_supported);
    }

    #[test]
    fn test_both_case_flags_rejected() {
        let overrides = OptionOverrides {
            upper_case_names: Some(true),
            lower_case_names: Some(true),
            ..Default::default()
        };
        let err = overrides.apply(&mut Options::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: upper_case_names and lower_case_names cannot both be true"
        );
    }

    #[test]
    fn test_rejected_overrides_leave_options_untouched() {
        let mut options = Options::default();
        let overrides = OptionOverrides {
            escape_start: Some('['),
            escape_end: Some(']'),
            lower_case_names: Some(true),
            parameter_prefix: Some(String::new()),
            ..Default::default()
        };
        let err = overrides.apply(&mut options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: parameter_prefix cannot be empty"
        );
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_empty_strings_clear_options() {
        let mut options = Options {
            dummy_table: Some("DUAL".into()),
            unbounded_limit: Some("-1".into()),
            ..Options::default()
        };
        let overrides = OptionOverrides {
            dummy_table: Some(String::new()),
            unbounded_limit: Some(String::new()),
            ..Default::default()
        };
        overrides.apply(&mut options).unwrap();
        assert_eq!(options.dummy_table, None);
        assert_eq!(options.unbounded_limit, None);
    }

    #[test]
    fn test_name_case_conflict_rejected() {
        let overrides = OptionOverrides {
            name_case: Some(NameCase::Lower),
            upper_case_names: Some(true),
            ..Default::default()
        };
        assert!(overrides.apply(&mut Options::default()).is_err());

        let agreeing = OptionOverrides {
            name_case: Some(NameCase::Upper),
            upper_case_names: Some(true),
            ..Default::default()
        };
        assert!(agreeing.apply(&mut Options::default()).is_ok());
    }
}
