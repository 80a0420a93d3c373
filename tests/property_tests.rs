//! Property-based tests using proptest.
//!
//! These tests verify algebraic invariants of the matrix operations.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Narrow value range keeps expansion round-off far below EPS
fn small_matrix_strategy(n: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-10.0f64..10.0, n * n).prop_map(move |data| {
        Matrix::from_vec(n, n, data).expect("Test data should be valid")
    })
}

// Any shape up to 5x5
fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(r, c)| matrix_strategy(r, c))
}

// Strictly diagonally dominant, hence invertible and well-conditioned
fn invertible_strategy(n: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-1.0f64..1.0, n * n).prop_map(move |data| {
        let mut m = Matrix::from_vec(n, n, data).expect("Test data should be valid");
        for i in 0..n {
            m[(i, i)] += n as f64 + 1.0;
        }
        m
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn equality_is_reflexive(a in any_matrix()) {
        prop_assert!(a.eq_matrix(&a));
        prop_assert_eq!(a.clone(), a);
    }

    #[test]
    fn take_moves_contents(a in any_matrix()) {
        let mut src = a.clone();
        let dst = src.take();
        prop_assert_eq!(src.shape(), (0, 0));
        prop_assert_eq!(dst, a);
    }

    #[test]
    fn construction_is_zeroed(r in 1usize..20, c in 1usize..20) {
        let m = Matrix::new(r, c).unwrap();
        prop_assert_eq!(m.shape(), (r, c));
        prop_assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn transpose_is_involution(a in any_matrix()) {
        let t = a.transpose();
        prop_assert_eq!(t.shape(), (a.cols(), a.rows()));
        prop_assert_eq!(t.transpose(), a);
    }

    #[test]
    fn scalar_mul_commutes(a in any_matrix(), s in -10.0f64..10.0) {
        prop_assert_eq!(s * &a, &a * s);
    }

    #[test]
    fn sum_then_sub_restores(a in matrix_strategy(3, 4), b in matrix_strategy(3, 4)) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn sum_is_commutative(a in matrix_strategy(2, 5), b in matrix_strategy(2, 5)) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn identity_is_neutral(a in matrix_strategy(3, 4)) {
        let left = Matrix::identity(3).unwrap();
        let right = Matrix::identity(4).unwrap();
        prop_assert_eq!(&left * &a, a.clone());
        prop_assert_eq!(&a * &right, a);
    }

    #[test]
    fn transpose_of_product(a in matrix_strategy(2, 3), b in matrix_strategy(3, 4)) {
        let lhs = (&a * &b).transpose();
        let rhs = &b.transpose() * &a.transpose();
        prop_assert!(lhs.as_slice().iter().zip(rhs.as_slice()).all(|(x, y)| (x - y).abs() < 1e-9));
    }

    #[test]
    fn determinant_transpose_invariant(a in small_matrix_strategy(4)) {
        let d = a.determinant().unwrap();
        let dt = a.transpose().determinant().unwrap();
        prop_assert!((d - dt).abs() <= 1e-6 * d.abs().max(1.0));
    }

    #[test]
    fn determinant_of_product(a in small_matrix_strategy(3), b in small_matrix_strategy(3)) {
        let dab = (&a * &b).determinant().unwrap();
        let expected = a.determinant().unwrap() * b.determinant().unwrap();
        prop_assert!((dab - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }

    #[test]
    fn inverse_times_self_is_identity(a in invertible_strategy(4)) {
        let inv = a.inverse_matrix().unwrap();
        let eye = Matrix::identity(4).unwrap();
        prop_assert_eq!(&a * &inv, eye);
    }

    #[test]
    fn resize_round_trip_preserves_overlap(a in matrix_strategy(3, 3), extra in 1usize..4) {
        let mut m = a.clone();
        m.set_rows(3 + extra).unwrap();
        m.set_cols(3 + extra).unwrap();
        m.set_rows(3).unwrap();
        m.set_cols(3).unwrap();
        prop_assert_eq!(m, a);
    }
}
