//! Copy-on-write shared buffers
//!
//! # Overview
//!
//! This module provides:
//! - [`CowBuffer`]: handle over shared byte storage that forks on first write
//! - [`View`]: borrowed, zero-copy read view of a handle's bytes
//!
//! # Design Notes
//!
//! Storage and the lineage reference count live in one `Arc<Vec<u8>>`; the
//! Arc's strong count is the number of live handles, so the count and the
//! storage are created and freed together. Forking uses `Arc::make_mut`,
//! which copies only when other handles still hold the storage.
//!
//! Views borrow the handle they came from. Updating or releasing that handle
//! while a view is alive does not compile. Sibling handles can neither free
//! nor overwrite the bytes a view reads: their writes fork onto new storage
//! and their releases cannot drop the count to zero.
//!
//! # Thread Safety
//!
//! The count is atomic, so handles are `Send + Sync` and siblings may live
//! on different threads. Writing through one handle needs `&mut`; share a
//! single handle for writing only behind a lock.

mod cow;
#[cfg(feature = "serde")]
mod serde_impl;
mod view;

pub use cow::CowBuffer;
pub use view::View;
