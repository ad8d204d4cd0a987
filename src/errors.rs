//! Error types for document rendering
//!
//! Rendering can fail in exactly two ways: asking an element for final
//! output (only documents produce output), or the filesystem rejecting the
//! configured output file. Anything else is the caller's composition.

use thiserror::Error;

/// Failures surfaced while producing final output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An `Element` was asked to produce final output directly.
    /// Only a `Document` is authorized to render.
    #[error("only a Document can be rendered; absorb this element into a Document first")]
    NotRenderable,

    /// The configured output file could not be written. Propagated from the
    /// filesystem unmodified, with no retry or partial-write cleanup.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}
