//! Shared error type.
//!
//! Downstream crates may define their own error enums and wrap `CoreError`
//! as one variant via `#[from]`; the simulator's `SimError` does exactly
//! that.

use thiserror::Error;

/// The top-level error type for `evtol-core` and a common base for the
/// other `evtol-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `evtol-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
