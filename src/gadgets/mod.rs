pub mod linear_algebra;

pub use linear_algebra::{
    allocate_secret_array, allocate_secret_matrix, dot, matrix_addition, matrix_multiplication,
    reveal_matrix, SecretMatrix,
};
