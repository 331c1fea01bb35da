//! Crate error type.

use thiserror::Error;

/// Errors surfaced at configuration time.
///
/// The per-sample path has no failure mode; everything that can go wrong is
/// rejected while the graph and mixer are being set up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A normalization mode name did not match any known policy.
    #[error("unknown normalization mode `{0}` (expected clip, relative, or absolute)")]
    UnknownNormalization(String),
}
