//! Output formatting for tool results and agent manifests

pub mod console;
pub mod formatter;
