//! # vectral: numeric buffer math for audio and signal applications
//!
//! A small toolkit of numeric-vector operations over caller-owned buffers:
//! elementwise scaling, Euclidean distance metrics, peak normalization,
//! linear interpolation and easing, Hann windowing, range statistics, and
//! the scalar helpers that accompany them.
//!
//! **Key properties:**
//! - Caller-owned memory: the library reads or mutates buffers in place
//!   and never allocates, resizes, or frees
//! - Generic over `f32`/`f64` via the [`num_traits::Float`] bound
//! - Typed errors instead of sentinel values for every guarded failure
//! - `no_std` support (disable default features)
//!
//! ## Quick Start
//!
//! ```rust
//! use vectral::prelude::*;
//!
//! let mut samples = vec![0.5_f32, -2.0, 1.0];
//!
//! // Peak-normalize to a target threshold
//! normalize(&mut samples, 1.0)?;
//! assert_eq!(samples, vec![0.25, -1.0, 0.5]);
//!
//! // Compare two feature frames
//! let a = vec![1.0_f32, 2.0, 3.0];
//! let b = vec![1.0_f32, 2.0, 4.0];
//! let distance = euclidean(&a, &b)?;
//! assert!((distance - 1.0).abs() < 1e-6);
//!
//! // Mean over an inclusive sub-range
//! let frame = vec![1.0_f64, 2.0, 3.0, 4.0];
//! assert_eq!(mean_range(&frame, 1, 2)?, 2.5);
//! # Result::<(), VectralError>::Ok(())
//! ```
//!
//! ## Operations
//!
//! | Group         | Functions                                              |
//! |---------------|--------------------------------------------------------|
//! | Elementwise   | [`scale`], [`divide`], [`sum`]                         |
//! | Interpolation | [`lerp`], [`lerp_between`], [`step_toward`]            |
//! | Statistics    | [`mean`], [`mean_range`], [`abs_mean`], [`abs_mean_range`] |
//! | Distance      | [`squared_euclidean`], [`euclidean`]                   |
//! | Normalization | [`normalize`]                                          |
//! | Windowing     | [`hann_coefficient`], [`fill_hann`]                    |
//! | Scalar        | [`clamp`], [`round_nearest`], [`round_to_int`], [`approx_zero`] |
//! | Random        | [`RandomSource`]                                       |
//!
//! [`scale`]: crate::math::elementwise::scale
//! [`divide`]: crate::math::elementwise::divide
//! [`sum`]: crate::math::elementwise::sum
//! [`lerp`]: crate::math::interpolation::lerp
//! [`lerp_between`]: crate::math::interpolation::lerp_between
//! [`step_toward`]: crate::math::interpolation::step_toward
//! [`mean`]: crate::math::statistics::mean
//! [`mean_range`]: crate::math::statistics::mean_range
//! [`abs_mean`]: crate::math::statistics::abs_mean
//! [`abs_mean_range`]: crate::math::statistics::abs_mean_range
//! [`squared_euclidean`]: crate::math::distance::squared_euclidean
//! [`euclidean`]: crate::math::distance::euclidean
//! [`normalize`]: crate::math::normalize::normalize
//! [`hann_coefficient`]: crate::math::window::hann_coefficient
//! [`fill_hann`]: crate::math::window::fill_hann
//! [`clamp`]: crate::math::scalar::clamp
//! [`round_nearest`]: crate::math::scalar::round_nearest
//! [`round_to_int`]: crate::math::scalar::round_to_int
//! [`approx_zero`]: crate::math::scalar::approx_zero
//! [`RandomSource`]: crate::random::RandomSource
//!
//! ## Error Handling
//!
//! Guarded failures (empty inputs, invalid sub-ranges, mismatched vector
//! sizes, lengths beyond the signed 32-bit count) return
//! [`VectralError`](crate::primitives::errors::VectralError) and compose
//! with `?`:
//!
//! ```rust
//! use vectral::prelude::*;
//!
//! let a = vec![1.0_f32, 2.0];
//! let b = vec![1.0_f32, 2.0, 3.0];
//!
//! match squared_euclidean(&a, &b) {
//!     Ok(d) => println!("distance^2 = {d}"),
//!     Err(VectralError::SizeMismatch { a_len, b_len }) => {
//!         eprintln!("cannot compare frames of {a_len} and {b_len} samples");
//!     }
//!     Err(e) => eprintln!("unexpected: {e}"),
//! }
//! ```
//!
//! Pure-arithmetic degeneracies are deliberately *not* guarded and
//! propagate as IEEE NaN/infinity: [`divide`] by exact zero,
//! [`lerp_between`] with coincident x-coordinates, and
//! [`hann_coefficient`] with a single-sample window. Each function
//! documents its degeneracy; [`approx_zero`] is available as a pre-check.
//!
//! ## Error Reporting
//!
//! With the default `trace` feature, guarded failures are also reported
//! through [`tracing`] at error level before the `Err` is returned.
//! Without a subscriber (or with the feature disabled) the report is a
//! no-op; the core never requires a sink to function.
//!
//! ## Randomness
//!
//! Random draws go through an explicitly seeded handle rather than
//! process-wide generator state:
//!
//! ```rust
//! use vectral::prelude::*;
//!
//! let mut source = RandomSource::seeded(42);
//!
//! let x = source.unit();           // [0, 1), two stacked draws
//! let k = source.in_range(0.0, 7.0); // integer-valued, in [0, 7]
//! assert!((0.0..1.0).contains(&x));
//! assert!((0.0..=7.0).contains(&k));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! vectral = { version = "0.1", default-features = false }
//! ```
//!
//! The crate performs no heap allocation, so no `alloc` is required;
//! float math comes from `libm` through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Modules
// ============================================================================

/// Layer 1: Primitives - errors, count conversion, validation, reporting.
pub mod primitives;

/// Layer 2: Math - the numeric buffer operations.
pub mod math;

/// Explicitly seeded random value generation.
pub mod random;

// ============================================================================
// Prelude
// ============================================================================

/// Standard vectral prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the full public surface:
///
/// ```
/// use vectral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::math::distance::{euclidean, squared_euclidean};
    pub use crate::math::elementwise::{divide, scale, sum};
    pub use crate::math::interpolation::{lerp, lerp_between, step_toward};
    pub use crate::math::normalize::normalize;
    pub use crate::math::scalar::{approx_zero, clamp, round_nearest, round_to_int};
    pub use crate::math::statistics::{abs_mean, abs_mean_range, mean, mean_range};
    pub use crate::math::window::{fill_hann, hann_coefficient};
    pub use crate::primitives::convert::to_count;
    pub use crate::primitives::errors::VectralError;
    pub use crate::primitives::validator::Validator;
    pub use crate::random::RandomSource;
}
