//! Usagi: an interactive shopping list kept in memory and saved to plain text.
//!
//! - **[`core`]**: Pure logic (list storage, command parsing). No I/O.
//! - **[`io`]**: Filesystem access (list files, configuration).
//!
//! [`dispatch`] runs parsed commands against a list and [`session`] drives the
//! interactive add/confirm loop on top of it.

pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
