use crate::engine::options::{OffsetStyle, Options};
use crate::engine::registry::{Registry, trim_from};

pub fn options() -> Options {
    Options {
        escape_start: '[',
        escape_end: ']',
        with_recursive: false,
        offset_style: OffsetStyle::OffsetFetch,
        distinct_on_supported: false,
        update_with_from: true,
        delete_with_alias: true,
        ..Options::default()
    }
}

pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    registry
        .add_as("LENGTH", "LEN")
        .add_as("NOW", "GETDATE")
        .add_custom("TRIM", trim_from("TRIM", None));
    registry
}

pub fn operators() -> Registry {
    let mut registry = Registry::new();
    registry.add_as("Concat", "+");
    registry
}
