//! Matrix gadgets over circuit wires.
//!
//! This module provides the matrix-level building blocks of the crate:
//! secret matrix allocation, the fully-gated matrix product, elementwise
//! addition, and matrix reveal. Every cell is a [`Wire`]; the builder is an
//! explicit parameter and all gate emission happens through it.
//!
//! The matrix product is the naive multiply-accumulate shape: for an
//! `(m, n) x (n, p)` product, each output cell costs `n` multiplication
//! gates and `n - 1` addition gates, accumulated in increasing inner-index
//! order. The gate trace is therefore deterministic and its size is exactly
//! `m * p * n` MulGates and `m * p * (n - 1)` AddGates.

use ndarray::{Array2, ArrayView1};

use crate::circuit::errors::CircuitError;
use crate::circuit::field::FieldElement;
use crate::circuit::{CircuitBuilder, Wire};

/// A 2-D container of wire handles, shape `(rows, cols)`.
pub type SecretMatrix = Array2<Wire>;

// -----------------------------------------------------------------------------
// FUNCTION: allocate_secret_matrix
// -----------------------------------------------------------------------------

/// Allocates one secret wire per entry of a row-major value matrix.
///
/// Each entry is reduced mod p and bound to a fresh secret wire; wires are
/// allocated in row-major order.
///
/// # Errors
/// Returns [`CircuitError::InvalidInput`] if `rows` is empty, if the first
/// row is empty, or if any row's length differs from the first's (the caller
/// must supply exactly `rows x cols` values). No wire is allocated on
/// failure.
pub fn allocate_secret_matrix(
    builder: &mut CircuitBuilder,
    rows: &[Vec<i64>],
) -> Result<SecretMatrix, CircuitError> {
    let nrows = rows.len();
    if nrows == 0 {
        return Err(CircuitError::InvalidInput {
            msg: "matrix must have at least one row".to_string(),
        });
    }
    let ncols = rows[0].len();
    if ncols == 0 {
        return Err(CircuitError::InvalidInput {
            msg: "matrix must have at least one column".to_string(),
        });
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != ncols {
            return Err(CircuitError::InvalidInput {
                msg: format!("row {i} has {} entries, expected {ncols}", row.len()),
            });
        }
    }

    let mut wires = Vec::with_capacity(nrows * ncols);
    for row in rows {
        for &value in row {
            wires.push(builder.alloc_secret(value));
        }
    }
    Array2::from_shape_vec((nrows, ncols), wires).map_err(|_| CircuitError::InvalidInput {
        msg: "failed to build wire matrix from supplied values".to_string(),
    })
}

/// Allocates one secret wire per entry of an existing value array.
#[must_use]
pub fn allocate_secret_array(builder: &mut CircuitBuilder, values: &Array2<i64>) -> SecretMatrix {
    values.map(|&value| builder.alloc_secret(value))
}

// -----------------------------------------------------------------------------
// FUNCTION: dot
// -----------------------------------------------------------------------------

/// Computes the inner product of two wire vectors using circuit gates.
///
/// Accumulation runs left to right in increasing index order: the first
/// product needs no accumulation, so a length-`n` inner product emits `n`
/// MulGates and `n - 1` AddGates.
///
/// # Errors
/// Returns [`CircuitError::ShapeMismatch`] if the vectors differ in length,
/// or [`CircuitError::InvalidInput`] if they are empty. No gate is emitted
/// on failure.
pub fn dot(
    builder: &mut CircuitBuilder,
    x: ArrayView1<'_, Wire>,
    y: ArrayView1<'_, Wire>,
) -> Result<Wire, CircuitError> {
    if x.len() != y.len() {
        return Err(CircuitError::ShapeMismatch {
            expected: vec![x.len()],
            got: vec![y.len()],
            var_name: "dot product vector lengths".to_string(),
        });
    }
    if x.is_empty() {
        return Err(CircuitError::InvalidInput {
            msg: "dot product requires non-empty vectors".to_string(),
        });
    }

    let mut acc = builder.mul(x[0], y[0]);
    for k in 1..x.len() {
        let product = builder.mul(x[k], y[k]);
        acc = builder.add(acc, product);
    }
    Ok(acc)
}

// -----------------------------------------------------------------------------
// FUNCTION: matrix_multiplication
// -----------------------------------------------------------------------------

/// Computes the matrix product of `a` (shape `(m, n)`) and `b` (shape
/// `(n, p)`) using circuit gates, yielding a new matrix of shape `(m, p)`.
///
/// Output cells are produced in row-major `(i, j)` order and each cell's
/// inner product accumulates in increasing `k` order, so repeated builds
/// with identical inputs emit identical traces.
///
/// # Errors
/// Returns [`CircuitError::ShapeMismatch`] if `a.cols != b.rows`, or
/// [`CircuitError::InvalidInput`] if either matrix has a zero dimension.
/// The check precedes all emission: a failing call emits zero gates.
pub fn matrix_multiplication(
    builder: &mut CircuitBuilder,
    a: &SecretMatrix,
    b: &SecretMatrix,
) -> Result<SecretMatrix, CircuitError> {
    let (m, n) = a.dim();
    let (n2, p) = b.dim();
    if n != n2 {
        return Err(CircuitError::ShapeMismatch {
            expected: vec![n],
            got: vec![n2],
            var_name: "a.cols != b.rows".to_string(),
        });
    }
    if m == 0 || n == 0 || p == 0 {
        return Err(CircuitError::InvalidInput {
            msg: format!("matrix product requires non-empty operands, got ({m}, {n}) x ({n2}, {p})"),
        });
    }

    let mut cells = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            cells.push(dot(builder, a.row(i), b.column(j))?);
        }
    }
    Array2::from_shape_vec((m, p), cells).map_err(|_| CircuitError::InvalidInput {
        msg: "failed to build product matrix".to_string(),
    })
}

// -----------------------------------------------------------------------------
// FUNCTION: matrix_addition
// -----------------------------------------------------------------------------

/// Elementwise addition of two wire matrices, one AddGate per cell.
///
/// # Errors
/// Returns [`CircuitError::ShapeMismatch`] if the shapes differ. The check
/// precedes all emission.
pub fn matrix_addition(
    builder: &mut CircuitBuilder,
    a: &SecretMatrix,
    b: &SecretMatrix,
) -> Result<SecretMatrix, CircuitError> {
    if a.dim() != b.dim() {
        return Err(CircuitError::ShapeMismatch {
            expected: a.shape().to_vec(),
            got: b.shape().to_vec(),
            var_name: "matrix_b".to_string(),
        });
    }

    let cells: Vec<Wire> = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| builder.add(x, y))
        .collect();
    Array2::from_shape_vec(a.dim(), cells).map_err(|_| CircuitError::InvalidInput {
        msg: "failed to build sum matrix".to_string(),
    })
}

// -----------------------------------------------------------------------------
// FUNCTION: reveal_matrix
// -----------------------------------------------------------------------------

/// Declares every wire of `matrix` opened and returns the disclosed values.
///
/// Idempotent: revealing a matrix twice yields the same opened-wire set as
/// revealing it once.
#[must_use]
pub fn reveal_matrix(builder: &mut CircuitBuilder, matrix: &SecretMatrix) -> Array2<FieldElement> {
    matrix.map(|&wire| builder.reveal(wire))
}
