//! Stable exit codes for the `usagi` binary.

/// Session ended through end of input, a `n` answer, or `/quit`.
pub const OK: i32 = 0;
/// The list could not grow (out of memory).
pub const OUT_OF_MEMORY: i32 = 1;
/// Startup or terminal I/O failed (bad config, closed stdout, unreadable stdin).
pub const INVALID: i32 = 2;
