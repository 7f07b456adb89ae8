use crate::engine::options::{NameCase, OffsetStyle, Options};
use crate::engine::registry::Registry;

pub fn options() -> Options {
    Options {
        name_case: NameCase::Lower,
        top_supported: false,
        offset_style: OffsetStyle::LimitOffset,
        ..Options::default()
    }
}

pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    super::standard_trims(&mut registry);
    registry
}

pub fn operators() -> Registry {
    let mut registry = Registry::new();
    // `^` is exponentiation
    registry.add_as("BitXor", "#");
    registry
}
