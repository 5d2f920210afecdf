//! Secret wire allocation and field-arithmetic gate emission.
//!
//! A [`CircuitBuilder`] owns every wire and gate it creates. Secret inputs
//! are allocated one wire at a time; `add` and `mul` each emit exactly one
//! [`Gate`] into the builder's append-only [`GateTrace`], in program order.
//! Reveal declarations accumulate in an opened-wire set consumed by the
//! proof-system backend; re-revealing a wire is a no-op.
//!
//! The builder is an explicit value threaded through gadget calls; there is
//! no ambient session or global trace. [`CircuitBuilder::finalize`] hands the
//! trace off by value once construction is complete.

pub mod errors;
pub mod field;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::circuit::field::{FieldElement, PrimeField};

/// Opaque handle to one secret value flowing through the circuit.
///
/// A `Wire` is only meaningful to the builder that created it; gadget code
/// never inspects the underlying value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wire(usize);

impl Wire {
    #[must_use]
    pub fn id(self) -> usize {
        self.0
    }
}

/// The two arithmetic gate kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    Mul,
    Add,
}

/// One arithmetic gate: two input wires, one output wire. Immutable once
/// emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub kind: GateKind,
    pub lhs: Wire,
    pub rhs: Wire,
    pub out: Wire,
}

/// The ordered record of every gate emitted for a circuit.
///
/// Append-only while the builder is live; immutable after
/// [`CircuitBuilder::finalize`]. Auditors read it without mutating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateTrace {
    gates: Vec<Gate>,
}

impl GateTrace {
    fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}

impl<'a> IntoIterator for &'a GateTrace {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

/// Builds a circuit over a fixed prime field.
///
/// The builder also plays the witness-store role of the proof-system
/// backend: each wire's value is held internally so that gate emission can
/// compute output witnesses and reveal declarations can disclose values.
pub struct CircuitBuilder {
    field: PrimeField,
    witness: Vec<FieldElement>,
    num_secret_inputs: usize,
    trace: GateTrace,
    revealed: BTreeSet<usize>,
}

impl CircuitBuilder {
    #[must_use]
    pub fn new(field: PrimeField) -> Self {
        Self {
            field,
            witness: Vec::new(),
            num_secret_inputs: 0,
            trace: GateTrace::default(),
            revealed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    fn new_wire(&mut self, value: FieldElement) -> Wire {
        let id = self.witness.len();
        self.witness.push(value);
        Wire(id)
    }

    /// Allocates a secret input wire bound to `value` reduced mod p.
    pub fn alloc_secret(&mut self, value: i64) -> Wire {
        let element = self.field.element(value);
        self.num_secret_inputs += 1;
        self.new_wire(element)
    }

    /// Emits one multiplication gate and returns its output wire.
    pub fn mul(&mut self, x: Wire, y: Wire) -> Wire {
        let value = self.field.mul(self.witness[x.0], self.witness[y.0]);
        let out = self.new_wire(value);
        self.trace.push(Gate {
            kind: GateKind::Mul,
            lhs: x,
            rhs: y,
            out,
        });
        out
    }

    /// Emits one addition gate and returns its output wire.
    pub fn add(&mut self, x: Wire, y: Wire) -> Wire {
        let value = self.field.add(self.witness[x.0], self.witness[y.0]);
        let out = self.new_wire(value);
        self.trace.push(Gate {
            kind: GateKind::Add,
            lhs: x,
            rhs: y,
            out,
        });
        out
    }

    /// Declares `wire` opened and returns the value the backend would
    /// disclose. Idempotent: revealing an already-revealed wire changes
    /// nothing.
    pub fn reveal(&mut self, wire: Wire) -> FieldElement {
        self.revealed.insert(wire.0);
        self.witness[wire.0]
    }

    /// The opened-wire set, in ascending wire order.
    #[must_use]
    pub fn revealed_wires(&self) -> Vec<Wire> {
        self.revealed.iter().map(|&id| Wire(id)).collect()
    }

    #[must_use]
    pub fn num_wires(&self) -> usize {
        self.witness.len()
    }

    #[must_use]
    pub fn num_secret_inputs(&self) -> usize {
        self.num_secret_inputs
    }

    #[must_use]
    pub fn num_gates(&self) -> usize {
        self.trace.len()
    }

    #[must_use]
    pub fn trace(&self) -> &GateTrace {
        &self.trace
    }

    /// Consumes the builder and hands off the trace.
    #[must_use]
    pub fn finalize(self) -> GateTrace {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_mod7() -> CircuitBuilder {
        CircuitBuilder::new(PrimeField::new(7).unwrap())
    }

    #[test]
    fn gates_are_emitted_in_program_order() {
        let mut b = builder_mod7();
        let x = b.alloc_secret(3);
        let y = b.alloc_secret(4);
        let p = b.mul(x, y);
        let s = b.add(p, x);

        let kinds: Vec<GateKind> = b.trace().iter().map(|g| g.kind).collect();
        assert_eq!(kinds, vec![GateKind::Mul, GateKind::Add]);
        assert_eq!(b.trace().gates()[0].out, p);
        assert_eq!(b.trace().gates()[1].out, s);
    }

    #[test]
    fn witness_values_follow_field_arithmetic() {
        let mut b = builder_mod7();
        let x = b.alloc_secret(3);
        let y = b.alloc_secret(4);
        let p = b.mul(x, y);
        let s = b.add(p, x);
        assert_eq!(b.reveal(p).value(), 5); // 12 mod 7
        assert_eq!(b.reveal(s).value(), 1); // 15 mod 7
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut b = builder_mod7();
        let x = b.alloc_secret(2);
        let y = b.alloc_secret(5);
        b.reveal(x);
        b.reveal(y);
        let once = b.revealed_wires();
        b.reveal(x);
        b.reveal(x);
        assert_eq!(b.revealed_wires(), once);
    }

    #[test]
    fn trace_round_trips_through_serde() {
        let mut b = builder_mod7();
        let x = b.alloc_secret(3);
        let y = b.alloc_secret(4);
        b.mul(x, y);
        b.add(x, y);

        let json = serde_json::to_string(b.trace()).unwrap();
        let restored: GateTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, b.trace());
    }

    #[test]
    fn wire_counters_track_allocations() {
        let mut b = builder_mod7();
        let x = b.alloc_secret(1);
        let y = b.alloc_secret(2);
        b.mul(x, y);
        assert_eq!(b.num_secret_inputs(), 2);
        assert_eq!(b.num_wires(), 3);
        assert_eq!(b.num_gates(), 1);
    }
}
