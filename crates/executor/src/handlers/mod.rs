//! Function handlers.
//!
//! Each handler checks its argument count first, then makes exactly one
//! store call.

pub mod init;
pub mod kv;
