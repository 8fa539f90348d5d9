//! Cowbuf: copy-on-write shared byte buffers with an explicit lifecycle.
//!
//! # Overview
//!
//! A [`CowBuffer`] is a handle over byte storage. Handles can be duplicated
//! without copying any bytes; the copy is deferred until a handle whose
//! storage is shared is written to. At that point only the writing handle
//! moves onto a private copy, so a write through one handle is never visible
//! through another.
//!
//! # Core Guarantees
//!
//! - **Exact reference counts**: the lineage count equals the number of live
//!   handles; it moves once per clone and once per release
//! - **Lazy copies**: a write forks only while the storage is shared, and at
//!   most once per write burst
//! - **Isolation**: siblings never observe each other's writes
//! - **Safe release**: releasing twice, or using a released or default
//!   handle, is a no-op or a failure value, never undefined behavior
//! - **Deterministic reclamation**: storage is freed at the last release
//!   (explicit or on drop), never earlier and never twice
//!
//! # Module Structure
//!
//! - [`buffer`]: [`CowBuffer`] and its borrowed [`View`]
//! - [`error`]: Error types for the `try_*` operations
//! - [`tracing_compat`]: Structured logging facade
//!
//! # Example
//!
//! ```
//! use cowbuf::CowBuffer;
//!
//! let mut first = CowBuffer::new(b"abcd".to_vec());
//! let second = first.try_clone().unwrap();
//! let third = first.try_clone().unwrap();
//! assert_eq!(first.ref_count(), 3);
//!
//! assert!(first.update(0, b'g'));
//! assert_eq!(first.view(), b"gbcd");
//! assert_eq!(second.view(), b"abcd");
//! assert!(second.shares_storage_with(&third));
//! assert_eq!(second.ref_count(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod buffer;
pub mod error;
pub mod tracing_compat;

#[cfg(test)]
pub(crate) mod test_utils;

pub use buffer::{CowBuffer, View};
pub use error::{Error, ErrorKind, Result};
