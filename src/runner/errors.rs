use std::io;

use thiserror::Error;

use crate::audit::AuditError;
use crate::circuit::errors::CircuitError;

/// Errors surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error while accessing {path}: {source}")]
    Io {
        #[source]
        source: io::Error,
        path: String,
    },

    #[error("JSON error in {path}: {msg}")]
    Json { path: String, msg: String },

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}
