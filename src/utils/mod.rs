//! Terminal helpers shared by the library and the CLI.

pub mod log;
