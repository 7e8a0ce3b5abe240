//! Core types for the simple chaincode.
//!
//! This crate defines the vocabulary shared by every other crate:
//! - [`Error`] / [`StoreError`]: structured failures returned to the host
//! - [`LedgerReader`] / [`LedgerStore`]: the key/value interface the host supplies
//! - [`EntryPoint`] / [`Invocation`]: the shape of a call coming from the host
//! - [`WireError`]: JSON encoding of errors for the CLI and host responses

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod store;
pub mod types;
pub mod wire;

pub use error::{Error, Result};
pub use store::{LedgerReader, LedgerStore, StoreError};
pub use types::{EntryPoint, Invocation};
pub use wire::WireError;
