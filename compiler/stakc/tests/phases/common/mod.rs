//! Shared test utilities for phase tests.

use stak_ir::{Program, StackId};
use stak_parse::Loaded;

pub const DOUBLE: &str = include_str!("../../fixtures/double.stak");
pub const LOOKUP: &str = include_str!("../../fixtures/lookup.stak");
pub const UNBOUND: &str = include_str!("../../fixtures/unbound.stak");

/// Load `source`, panicking with the loader's message on failure.
pub fn load_ok(source: &str) -> Loaded {
    stak_parse::load(source).unwrap_or_else(|err| panic!("load failed: {err}\n{source}"))
}

/// Handle of a stack that must exist.
pub fn stack(program: &Program, name: &str) -> StackId {
    program
        .stacks()
        .get(name)
        .unwrap_or_else(|| panic!("no stack named {name:?}"))
}
