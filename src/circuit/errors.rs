use std::io;

use thiserror::Error;

/// Errors surfaced by circuit construction.
///
/// All failures are synchronous and atomic: a failing operation emits no
/// gates and allocates no wires before reporting.
#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("invalid input: {msg}")]
    InvalidInput { msg: String },

    #[error("shape mismatch: expected {expected:?}, got {got:?} ({var_name})")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        var_name: String,
    },

    #[error("failed to write trace to {path}: {source}")]
    TraceWrite {
        #[source]
        source: io::Error,
        path: String,
    },
}
