//! Circuit construction and cost auditing for secret matrix multiplication
//! over a large prime field.
//!
//! # Crate Structure
//!
//! - [`circuit`]: The circuit builder: secret wire allocation, field
//!   arithmetic gate emission (addition, multiplication), and reveal
//!   declarations, recorded into an append-only gate trace.
//!
//! - [`gadgets`]: Matrix-level building blocks over builder wires: secret
//!   matrix allocation, the multiply-accumulate matrix product, elementwise
//!   addition, and matrix reveal.
//!
//! - [`audit`]: The offline gate auditor, which classifies and counts gates by
//!   kind, from either a structured trace or its textual serialization, to
//!   estimate circuit cost before proof generation.
//!
//! - [`io`]: Textual serialization of gate traces in the line-oriented
//!   format consumed by existing trace auditors.
//!
//! - [`runner`]: CLI-oriented orchestration for generating matrix-product
//!   traces and counting gates in trace files.
//!
//! Typical usage constructs a [`circuit::CircuitBuilder`], composes gadgets
//! from [`gadgets`], and hands the finalized trace to [`audit`].

pub mod audit;
pub mod circuit;
pub mod gadgets;
pub mod io;
pub mod runner;

pub use circuit::field::{FieldElement, PrimeField, MERSENNE_61};
pub use circuit::{CircuitBuilder, Gate, GateKind, GateTrace, Wire};
