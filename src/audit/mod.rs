//! Offline gate-kind counting for circuit cost estimation.
//!
//! The auditor is a pure, single-pass fold over an immutable trace. It
//! consumes either the structured [`GateTrace`] a builder produced in this
//! process, or the line-oriented textual serialization written by
//! [`crate::io::trace_file`] (and by older trace producers): a line
//! containing the substring `AND` records a multiplication gate, a line
//! containing `XOR` records an addition gate.
//!
//! Classification of a textual line is exclusive and checks `AND` before
//! `XOR`, so a line carrying both tokens counts once, as a multiplication.
//! Lines naming no known kind are handled according to the [`AuditMode`]:
//! the default [`AuditMode::Permissive`] skips them, while
//! [`AuditMode::Strict`] rejects any non-structural line (one containing
//! alphabetic characters) that names neither kind. Purely numeric or blank
//! lines are structural (headers, separators) and are skipped in both modes.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::circuit::{GateKind, GateTrace};

/// Errors surfaced by trace auditing.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to read trace {path}: {source}")]
    TraceRead {
        #[source]
        source: std::io::Error,
        path: String,
    },

    #[error("unrecognized gate kind on line {line_no}: {line:?}")]
    UnknownGateKind { line_no: usize, line: String },
}

/// Gate counts by kind, derived deterministically from a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    pub mul_gates: usize,
    pub add_gates: usize,
}

impl CostSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.mul_gates + self.add_gates
    }
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of mult gates {}", self.mul_gates)?;
        write!(f, "Number of add gates {}", self.add_gates)
    }
}

/// Policy for textual lines that name no known gate kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuditMode {
    /// Skip unrecognized lines. Matches existing trace auditors.
    #[default]
    Permissive,
    /// Fail with [`AuditError::UnknownGateKind`] on an unrecognized gate
    /// record.
    Strict,
}

impl fmt::Display for AuditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditModeParseError(String);

impl fmt::Display for AuditModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown audit mode: {}", self.0)
    }
}

impl std::error::Error for AuditModeParseError {}

impl FromStr for AuditMode {
    type Err = AuditModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(AuditModeParseError(other.to_string())),
        }
    }
}

/// Counts gates in a structured trace by kind tag.
///
/// `mul_gates + add_gates` always equals the number of records scanned: the
/// structured kind tag admits only the two kinds.
#[must_use]
pub fn count_gates(trace: &GateTrace) -> CostSummary {
    let mut summary = CostSummary::default();
    for gate in trace {
        match gate.kind {
            GateKind::Mul => summary.mul_gates += 1,
            GateKind::Add => summary.add_gates += 1,
        }
    }
    summary
}

fn classify_line(line: &str) -> Option<GateKind> {
    if line.contains("AND") {
        Some(GateKind::Mul)
    } else if line.contains("XOR") {
        Some(GateKind::Add)
    } else {
        None
    }
}

fn scan_lines<R: BufRead>(reader: R, mode: AuditMode, path: &str) -> Result<CostSummary, AuditError> {
    let mut summary = CostSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AuditError::TraceRead {
            source,
            path: path.to_string(),
        })?;
        match classify_line(&line) {
            Some(GateKind::Mul) => summary.mul_gates += 1,
            Some(GateKind::Add) => summary.add_gates += 1,
            None => {
                let is_gate_record = line.chars().any(|c| c.is_ascii_alphabetic());
                if is_gate_record && mode == AuditMode::Strict {
                    return Err(AuditError::UnknownGateKind {
                        line_no: idx + 1,
                        line,
                    });
                }
            }
        }
    }
    Ok(summary)
}

/// Counts gates in an in-memory textual trace.
///
/// # Errors
/// Returns [`AuditError::UnknownGateKind`] in strict mode for a gate record
/// naming no known kind.
pub fn count_trace_str(text: &str, mode: AuditMode) -> Result<CostSummary, AuditError> {
    scan_lines(text.as_bytes(), mode, "<string>")
}

/// Counts gates in a textual trace file.
///
/// # Errors
/// Returns [`AuditError::TraceRead`] if the file cannot be opened or read,
/// and [`AuditError::UnknownGateKind`] in strict mode for a gate record
/// naming no known kind.
pub fn count_trace_file<P: AsRef<Path>>(path: P, mode: AuditMode) -> Result<CostSummary, AuditError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| AuditError::TraceRead {
        source,
        path: display.clone(),
    })?;
    scan_lines(BufReader::new(file), mode, &display)
}
