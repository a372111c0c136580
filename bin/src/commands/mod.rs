//! CLI command implementations.

pub(crate) mod crowd;
pub(crate) mod info;
pub(crate) mod venues;
