use zkmatmul_circuits::audit::{count_gates, count_trace_file, count_trace_str, AuditMode};
use zkmatmul_circuits::circuit::CircuitBuilder;
use zkmatmul_circuits::gadgets::{
    allocate_secret_matrix, matrix_multiplication, reveal_matrix,
};
use zkmatmul_circuits::io::trace_file::{render_trace, write_trace_file};
use zkmatmul_circuits::PrimeField;

fn build_product(
    modulus: u64,
    a: &[Vec<i64>],
    b: &[Vec<i64>],
) -> (CircuitBuilder, ndarray::Array2<zkmatmul_circuits::FieldElement>) {
    let mut builder = CircuitBuilder::new(PrimeField::new(modulus).unwrap());
    let a = allocate_secret_matrix(&mut builder, a).unwrap();
    let b = allocate_secret_matrix(&mut builder, b).unwrap();
    let product = matrix_multiplication(&mut builder, &a, &b).unwrap();
    let revealed = reveal_matrix(&mut builder, &product);
    (builder, revealed)
}

#[test]
fn two_by_two_mod_seven_scenario() {
    let a = vec![vec![1, 2], vec![3, 4]];
    let b = vec![vec![5, 6], vec![0, 1]];
    let (builder, revealed) = build_product(7, &a, &b);

    let summary = count_gates(builder.trace());
    assert_eq!(summary.mul_gates, 8);
    assert_eq!(summary.add_gates, 4);

    // Product over the integers is [[5, 8], [15, 22]]; reduced mod 7.
    assert_eq!(revealed[(0, 0)].value(), 5);
    assert_eq!(revealed[(0, 1)].value(), 1);
    assert_eq!(revealed[(1, 0)].value(), 1);
    assert_eq!(revealed[(1, 1)].value(), 1);

    let text = render_trace(
        builder.trace(),
        builder.num_wires(),
        builder.num_secret_inputs(),
        builder.revealed_wires().len(),
    );
    let audited = count_trace_str(&text, AuditMode::Strict).unwrap();
    assert_eq!(audited, summary);
}

#[test]
fn gate_counts_scale_cubically() {
    for n in 1..=5usize {
        let values: Vec<Vec<i64>> = (0..n)
            .map(|i| (0..n).map(|j| (i + 2 * j) as i64).collect())
            .collect();
        let (builder, _) = build_product(zkmatmul_circuits::MERSENNE_61, &values, &values);

        let summary = count_gates(builder.trace());
        assert_eq!(summary.mul_gates, n * n * n);
        assert_eq!(summary.add_gates, n * n * (n - 1));
        assert_eq!(summary.total(), builder.num_gates());
    }
}

#[test]
fn identical_builds_render_identical_traces() {
    let a = vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]];
    let b = vec![vec![1, 0, 2], vec![0, 3, 0], vec![4, 0, 5]];

    let (first, _) = build_product(97, &a, &b);
    let (second, _) = build_product(97, &a, &b);

    let render = |builder: &CircuitBuilder| {
        render_trace(
            builder.trace(),
            builder.num_wires(),
            builder.num_secret_inputs(),
            builder.revealed_wires().len(),
        )
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn repeated_reveal_leaves_the_opened_set_unchanged() {
    let a = vec![vec![1, 2], vec![3, 4]];
    let b = vec![vec![5, 6], vec![7, 8]];

    let mut builder = CircuitBuilder::new(PrimeField::new(11).unwrap());
    let a = allocate_secret_matrix(&mut builder, &a).unwrap();
    let b = allocate_secret_matrix(&mut builder, &b).unwrap();
    let product = matrix_multiplication(&mut builder, &a, &b).unwrap();

    let first = reveal_matrix(&mut builder, &product);
    let opened_once = builder.revealed_wires();

    let second = reveal_matrix(&mut builder, &product);
    assert_eq!(builder.revealed_wires(), opened_once);
    assert_eq!(first, second);
}

#[test]
fn trace_file_round_trip_matches_structured_counts() {
    let a = vec![vec![2, 0, 1], vec![1, 1, 1]];
    let b = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    let (builder, _) = build_product(101, &a, &b);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("matmul.txt");
    write_trace_file(
        &path,
        builder.trace(),
        builder.num_wires(),
        builder.num_secret_inputs(),
        builder.revealed_wires().len(),
    )
    .unwrap();

    let summary = count_trace_file(&path, AuditMode::Permissive).unwrap();
    assert_eq!(summary.mul_gates, 2 * 2 * 3);
    assert_eq!(summary.add_gates, 2 * 2 * 2);

    // The finalized trace hands off by value and audits to the same counts.
    let trace = builder.finalize();
    assert_eq!(count_gates(&trace), summary);
}
