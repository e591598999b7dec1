//! Filesystem helpers: list files and configuration.

pub mod config;
pub mod list_file;
