//! Tracing compatibility layer for structured logging.
//!
//! Buffer operations log through this module so the crate works whether or
//! not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: Re-exports from the `tracing` crate.
//! - **Without feature**: No-op macros that compile to nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::tracing_compat::{debug, trace};
//!
//! trace!(refs = 2, "buffer handle cloned");
//! debug!(len = 4096, refs_left = 1, "copy-on-write fork");
//! ```
//!
//! # Feature Flag
//!
//! ```toml
//! cowbuf = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub use crate::{debug, trace};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;
