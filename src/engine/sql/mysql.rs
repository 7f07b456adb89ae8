use crate::engine::options::{OffsetStyle, Options};
use crate::engine::registry::{Registry, call_list};

pub fn options() -> Options {
    Options {
        escape_start: '`',
        escape_end: '`',
        top_supported: false,
        offset_style: OffsetStyle::LimitOffset,
        unbounded_limit: Some("18446744073709551615".to_string()),
        distinct_on_supported: false,
        full_join_supported: false,
        update_set_with_table_name: true,
        delete_with_alias: true,
        ..Options::default()
    }
}

pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    super::standard_trims(&mut registry);
    registry.add_as("LENGTH", "CHAR_LENGTH");
    registry
}

pub fn operators() -> Registry {
    let mut registry = Registry::new();
    // `||` is logical OR unless PIPES_AS_CONCAT is set
    registry.add_custom("Concat", call_list("CONCAT"));
    registry
}
