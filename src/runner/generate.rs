use std::path::Path;

use serde::Deserialize;

use crate::audit::count_gates;
use crate::circuit::field::PrimeField;
use crate::circuit::CircuitBuilder;
use crate::gadgets::{allocate_secret_matrix, matrix_multiplication, reveal_matrix};
use crate::io::trace_file::write_trace_file;
use crate::runner::errors::CliError;

#[derive(Clone, Deserialize)]
struct MatrixInputs {
    matrix_a: Vec<Vec<i64>>,
    matrix_b: Vec<Vec<i64>>,
}

/// Builds a secret matrix-product circuit, reveals the product, and writes
/// the textual gate trace to `output`.
///
/// Matrix values come from a JSON file with `matrix_a` / `matrix_b` fields
/// when `input` is given, otherwise from a deterministic `dim x dim` fill.
pub fn run(
    dim: usize,
    modulus: u64,
    input: Option<&Path>,
    output: &Path,
) -> Result<(), CliError> {
    let field = PrimeField::new(modulus)?;

    let (a_values, b_values) = match input {
        Some(path) => {
            tracing::info!("loading matrices from {}", path.display());
            let file = std::fs::File::open(path).map_err(|source| CliError::Io {
                source,
                path: path.display().to_string(),
            })?;
            let inputs: MatrixInputs =
                serde_json::from_reader(file).map_err(|e| CliError::Json {
                    path: path.display().to_string(),
                    msg: e.to_string(),
                })?;
            (inputs.matrix_a, inputs.matrix_b)
        }
        None => (demo_matrix(dim), demo_matrix(dim)),
    };

    tracing::info!("building secret matrix product circuit mod {modulus}");
    let mut builder = CircuitBuilder::new(field);
    let a = allocate_secret_matrix(&mut builder, &a_values)?;
    let b = allocate_secret_matrix(&mut builder, &b_values)?;
    let product = matrix_multiplication(&mut builder, &a, &b)?;
    let revealed = reveal_matrix(&mut builder, &product);

    tracing::info!(
        "{} gates emitted over {} wires",
        builder.num_gates(),
        builder.num_wires()
    );

    write_trace_file(
        output,
        builder.trace(),
        builder.num_wires(),
        builder.num_secret_inputs(),
        builder.revealed_wires().len(),
    )?;
    tracing::info!("trace written to {}", output.display());

    println!("{}", count_gates(builder.trace()));
    println!("Revealed product:");
    for row in revealed.rows() {
        let cells: Vec<String> = row.iter().map(|e| e.value().to_string()).collect();
        println!("{}", cells.join(" "));
    }
    Ok(())
}

fn demo_matrix(dim: usize) -> Vec<Vec<i64>> {
    (0..dim)
        .map(|i| (0..dim).map(|j| (i * dim + j + 1) as i64).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_matrix_is_square_and_deterministic() {
        let m = demo_matrix(3);
        assert_eq!(m.len(), 3);
        assert!(m.iter().all(|row| row.len() == 3));
        assert_eq!(m, demo_matrix(3));
        assert_eq!(m[0][0], 1);
        assert_eq!(m[2][2], 9);
    }
}
