//! HTTP request handlers.

pub(crate) mod tabs;
