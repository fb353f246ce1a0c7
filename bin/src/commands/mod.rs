//! CLI command implementations.

pub(crate) mod fx;
pub(crate) mod list;
pub(crate) mod macro_data;
pub(crate) mod market;
