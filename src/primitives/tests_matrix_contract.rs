// =========================================================================
// Matrix algebra contract
//
// Identities every correct implementation satisfies, checked on fixed
// inputs. Property-based versions over random inputs live in
// tests/property_tests.rs.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn sample_3x3() -> Matrix {
    Matrix::from_vec(3, 3, vec![2.0, 5.0, 7.0, 6.0, 3.0, 4.0, 5.0, -2.0, -3.0]).expect("valid")
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "(A^T)^T shape mismatch");
    assert_eq!(att, a);
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = &a * &b;

    assert_eq!(
        c.shape(),
        (2, 4),
        "(2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// Identity matmul: A * I = I * A = A
#[test]
fn contract_identity_matmul() {
    let a = sample_3x3();
    let eye = Matrix::identity(3).expect("valid");

    assert_eq!(&a * &eye, a);
    assert_eq!(&eye * &a, a);
}

/// Inverse: A * A^-1 = I
#[test]
fn contract_inverse_is_two_sided() {
    let a = sample_3x3();
    let inv = a.inverse_matrix().expect("det = -1");
    let eye = Matrix::identity(3).expect("valid");

    assert_eq!(&a * &inv, eye);
    assert_eq!(&inv * &a, eye);
}

/// Adjugate identity: A * adj(A) = det(A) * I
#[test]
fn contract_adjugate_identity() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 0.0, 4.0, 2.0, 5.0, 2.0, 1.0]).expect("valid");
    let adj = a.calc_complements().expect("3x3").transpose();
    let det = a.determinant().expect("3x3");
    let eye = Matrix::identity(3).expect("valid");

    assert_eq!(&a * &adj, det * &eye);
}

/// Determinant is transpose-invariant: det(A^T) = det(A)
#[test]
fn contract_determinant_transpose_invariant() {
    let a = sample_3x3();
    let d = a.determinant().expect("3x3");
    let dt = a.transpose().determinant().expect("3x3");

    assert!((d - dt).abs() <= EPS, "det(A)={d}, det(A^T)={dt}");
}

/// Determinant is multiplicative: det(AB) = det(A) det(B)
#[test]
fn contract_determinant_multiplicative() {
    let a = sample_3x3();
    let b = Matrix::from_vec(3, 3, vec![2.0, 3.0, 1.0, 7.0, 4.0, 1.0, 9.0, -2.0, 1.0]).expect("valid");
    let dab = (&a * &b).determinant().expect("3x3");
    let da = a.determinant().expect("3x3");
    let db = b.determinant().expect("3x3");

    assert!((dab - da * db).abs() <= 1e-6, "det(AB)={dab}, det(A)det(B)={}", da * db);
}

/// Scaling an n×n matrix by k scales the determinant by k^n
#[test]
fn contract_determinant_scaling() {
    let a = sample_3x3();
    let d = a.determinant().expect("3x3");
    let d2 = (2.0 * &a).determinant().expect("3x3");

    assert!((d2 - 8.0 * d).abs() <= EPS);
}

/// Sum then subtract restores the original: (A + B) - B = A
#[test]
fn contract_sum_sub_inverse() {
    let a = sample_3x3();
    let b = Matrix::identity(3).expect("valid") * 4.5;

    assert_eq!(&(&a + &b) - &b, a);
}
