use crate::engine::options::{NameCase, OffsetStyle, Options};
use crate::engine::registry::{Registry, keyword_only, nested_call};

pub fn options() -> Options {
    Options {
        name_case: NameCase::Upper,
        table_alias_as: false,
        dummy_table: Some("DUAL".to_string()),
        with_recursive: false,
        top_supported: false,
        offset_style: OffsetStyle::OffsetFetch,
        distinct_on_supported: false,
        insert_with_union: true,
        parameter_prefix: ":p".to_string(),
        ..Options::default()
    }
}

pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    super::standard_trims(&mut registry);
    registry
        .add_as("CEILING", "CEIL")
        .add_as("SUBSTRING", "SUBSTR")
        .add_custom("NOW", keyword_only("CURRENT_TIMESTAMP"));
    registry
}

pub fn operators() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_custom("BitAnd", nested_call("BITAND"))
        .add_custom("BitOr", nested_call("BITOR"))
        .add_custom("BitXor", nested_call("BITXOR"))
        .add_custom("Modulo", nested_call("MOD"))
        .add_as("Except", "MINUS")
        .add_as("ExceptAll", "MINUS ALL");
    registry
}
