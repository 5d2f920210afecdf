//! Textual serialization of gate traces.
//!
//! The format is line-oriented and backward compatible with existing trace
//! auditors: one gate per line, multiplication gates carrying the token
//! `AND` and addition gates the token `XOR`. The layout follows Bristol
//! circuit files: two numeric header lines (gate and wire totals, then
//! input/output wire counts) and a blank separator before the gate records.
//! Header lines contain neither token, so permissive audits skip them.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::circuit::errors::CircuitError;
use crate::circuit::{GateKind, GateTrace};

/// Renders a trace in the line-oriented textual format.
#[must_use]
pub fn render_trace(
    trace: &GateTrace,
    num_wires: usize,
    num_inputs: usize,
    num_outputs: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", trace.len(), num_wires);
    let _ = writeln!(out, "{num_inputs} {num_outputs}");
    out.push('\n');
    for gate in trace {
        let token = match gate.kind {
            GateKind::Mul => "AND",
            GateKind::Add => "XOR",
        };
        let _ = writeln!(
            out,
            "2 1 {} {} {} {token}",
            gate.lhs.id(),
            gate.rhs.id(),
            gate.out.id()
        );
    }
    out
}

/// Writes a rendered trace to `path`.
///
/// # Errors
/// Returns [`CircuitError::TraceWrite`] if the file cannot be created or
/// written.
pub fn write_trace_file<P: AsRef<Path>>(
    path: P,
    trace: &GateTrace,
    num_wires: usize,
    num_inputs: usize,
    num_outputs: usize,
) -> Result<(), CircuitError> {
    let path = path.as_ref();
    let rendered = render_trace(trace, num_wires, num_inputs, num_outputs);
    fs::write(path, rendered).map_err(|source| CircuitError::TraceWrite {
        source,
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{count_trace_str, AuditMode};
    use crate::circuit::field::PrimeField;
    use crate::circuit::CircuitBuilder;

    fn sample_builder() -> CircuitBuilder {
        let mut b = CircuitBuilder::new(PrimeField::new(7).unwrap());
        let x = b.alloc_secret(2);
        let y = b.alloc_secret(3);
        let p = b.mul(x, y);
        b.add(p, x);
        b
    }

    #[test]
    fn rendered_gate_lines_carry_wire_ids_and_tokens() {
        let b = sample_builder();
        let text = render_trace(b.trace(), b.num_wires(), b.num_secret_inputs(), 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 4");
        assert_eq!(lines[1], "2 1");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "2 1 0 1 2 AND");
        assert_eq!(lines[4], "2 1 2 0 3 XOR");
    }

    #[test]
    fn rendered_trace_audits_to_the_structured_counts() {
        let b = sample_builder();
        let text = render_trace(b.trace(), b.num_wires(), b.num_secret_inputs(), 1);
        let summary = count_trace_str(&text, AuditMode::Strict).unwrap();
        assert_eq!(summary.mul_gates, 1);
        assert_eq!(summary.add_gates, 1);
    }
}
