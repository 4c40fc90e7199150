//! Error reporting shim over the optional `tracing` sink.
//!
//! ## Purpose
//!
//! Validation failures are reported through a leveled logging sink before
//! the typed error is returned to the caller. The sink is optional: with
//! the `trace` feature disabled (or no subscriber installed) reporting is
//! a no-op and the core degrades to returning errors silently.
//!
//! ## Non-goals
//!
//! * This module does not install or configure a subscriber; that is the
//!   embedding application's concern.

/// Report an error condition through the `tracing` sink, if enabled.
///
/// Accepts the same field/message syntax as `tracing::error!`. Compiles
/// to nothing when the `trace` feature is off.
macro_rules! report_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "trace")]
        tracing::error!($($arg)*);
    }};
}

pub(crate) use report_error;
