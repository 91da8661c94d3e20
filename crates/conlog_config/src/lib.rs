//! Parsing and validation of `conlog.toml` category declarations.
//!
//! The library's own categories are fixed at compile time. This crate lets the
//! `conlog` command-line tool declare categories in a file instead, producing
//! enabled [`Category`](conlog_category::Category) values that borrow their
//! names from the loaded [`LogConfig`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::resolve_category;
pub use types::*;
