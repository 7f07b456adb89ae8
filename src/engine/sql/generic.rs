use crate::engine::options::Options;
use crate::engine::registry::Registry;

pub fn options() -> Options {
    Options::default()
}

pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    super::standard_trims(&mut registry);
    registry
}
