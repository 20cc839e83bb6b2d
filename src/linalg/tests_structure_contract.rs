// =========================================================================
// FALSIFY-CL: structure classifier and rank contract (matriz linalg)
//
// Each test tries to falsify one classifier/rank invariant with the
// smallest input that could break it.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use crate::primitives::Matrix;

/// FALSIFY-CL-001: Zero matrix suite — every zero n×n matrix is zero,
/// diagonal, symmetric, both triangulars, and has rank 0.
#[test]
fn falsify_cl_001_zero_matrix_suite() {
    for n in 1..=4 {
        let z = Matrix::<f64>::zeros(n, n);
        assert!(z.is_zero(), "FALSIFIED CL-001: zero {n}x{n} not zero");
        assert_eq!(
            z.is_diagonal(),
            Ok(true),
            "FALSIFIED CL-001: zero {n}x{n} not diagonal"
        );
        assert_eq!(
            z.is_symmetric(),
            Ok(true),
            "FALSIFIED CL-001: zero {n}x{n} not symmetric"
        );
        assert!(
            z.is_lower_triangular(),
            "FALSIFIED CL-001: zero {n}x{n} not lower triangular"
        );
        assert!(
            z.is_upper_triangular(),
            "FALSIFIED CL-001: zero {n}x{n} not upper triangular"
        );
        assert_eq!(z.rank(), 0, "FALSIFIED CL-001: zero {n}x{n} rank != 0");
    }
}

/// FALSIFY-CL-002: Identity suite — I_n is diagonal, symmetric, and has
/// full rank n.
#[test]
fn falsify_cl_002_identity_suite() {
    for n in 1..=4 {
        let id = Matrix::<f64>::identity(n);
        assert_eq!(
            id.is_diagonal(),
            Ok(true),
            "FALSIFIED CL-002: I_{n} not diagonal"
        );
        assert_eq!(
            id.is_symmetric(),
            Ok(true),
            "FALSIFIED CL-002: I_{n} not symmetric"
        );
        assert_eq!(id.rank(), n, "FALSIFIED CL-002: rank(I_{n}) != {n}");
    }
}

/// FALSIFY-CL-003: Every square-only predicate rejects a non-square input
/// before traversing it.
#[test]
fn falsify_cl_003_non_square_rejection() {
    let m = Matrix::<f64>::zeros(3, 4);
    assert!(m.is_diagonal().is_err(), "FALSIFIED CL-003: is_diagonal");
    assert!(m.is_symmetric().is_err(), "FALSIFIED CL-003: is_symmetric");
    assert!(
        m.is_anti_symmetric().is_err(),
        "FALSIFIED CL-003: is_anti_symmetric"
    );
    assert!(m.is_hermitian().is_err(), "FALSIFIED CL-003: is_hermitian");
    assert!(
        m.is_permutation().is_err(),
        "FALSIFIED CL-003: is_permutation"
    );
    assert!(m.is_normal().is_err(), "FALSIFIED CL-003: is_normal");
    assert!(m.is_orthogonal().is_err(), "FALSIFIED CL-003: is_orthogonal");
    assert!(m.is_unitary().is_err(), "FALSIFIED CL-003: is_unitary");
}

/// FALSIFY-CL-004: Permutation characterization — true exactly for matrices
/// built from a bijection on {0..n-1}.
#[test]
fn falsify_cl_004_permutation_characterization() {
    // Every permutation of {0,1,2} as a 0/1 matrix must pass.
    let perms: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for p in perms {
        let m = Matrix::from_fn(3, 3, |r, c| i64::from(p[r] == c));
        assert_eq!(
            m.is_permutation(),
            Ok(true),
            "FALSIFIED CL-004: bijection {p:?} rejected"
        );
    }

    // A non-injective assignment (two rows map to column 0) must fail.
    let broken = Matrix::from_fn(3, 3, |r, c| i64::from([0, 0, 2][r] == c));
    assert_eq!(
        broken.is_permutation(),
        Ok(false),
        "FALSIFIED CL-004: non-bijection accepted"
    );
}

/// FALSIFY-CL-005: Concrete rank scenarios.
#[test]
fn falsify_cl_005_rank_scenarios() {
    let singular = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("valid");
    assert_eq!(singular.rank(), 1, "FALSIFIED CL-005: [[1,2],[2,4]]");

    let full = Matrix::from_vec(3, 3, vec![2.0, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.0])
        .expect("valid");
    assert_eq!(full.rank(), 3, "FALSIFIED CL-005: full-rank 3x3");
}

/// FALSIFY-CL-006: Identity symmetry triple — symmetric and diagonal but
/// not anti-symmetric.
#[test]
fn falsify_cl_006_identity_symmetry() {
    let id = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("valid");
    assert_eq!(id.is_symmetric(), Ok(true), "FALSIFIED CL-006: symmetric");
    assert_eq!(
        id.is_anti_symmetric(),
        Ok(false),
        "FALSIFIED CL-006: anti-symmetric"
    );
    assert_eq!(id.is_diagonal(), Ok(true), "FALSIFIED CL-006: diagonal");
}

/// FALSIFY-CL-007: Degenerate shapes — a 0×n matrix is empty and the
/// full-scan predicates hold vacuously.
#[test]
fn falsify_cl_007_degenerate_shapes() {
    let m = Matrix::<f64>::zeros(0, 1);
    assert!(m.is_empty(), "FALSIFIED CL-007: 0x1 not empty");
    assert!(m.is_zero(), "FALSIFIED CL-007: 0x1 not vacuously zero");
    assert!(m.is_lower_triangular(), "FALSIFIED CL-007: lower triangular");
    assert!(m.is_upper_triangular(), "FALSIFIED CL-007: upper triangular");
    assert_eq!(m.rank(), 0, "FALSIFIED CL-007: rank of 0x1");
}
