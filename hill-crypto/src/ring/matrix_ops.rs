use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring, Vector, modinv};

/// Checks that `m` is square and returns its dimension.
fn square_dimension(m: &Matrix) -> Result<usize, HillCipherError> {
    let n = m.len();
    for (i, row) in m.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix must be square, but row {} has length {} (expected {})",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// A·x where A is an n×n matrix and x is a length-n vector.
/// All arithmetic is performed in the given ring.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, HillCipherError> {
    let n = square_dimension(a)?;
    if x.len() != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; n];
    for i in 0..n {
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` in the given ring.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the matrices are not square
/// or have different dimensions.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = square_dimension(a)?;
    if square_dimension(b)? != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Matrix dimensions must match for multiplication ({} vs {})",
            n,
            b.len()
        )));
    }

    let mut c = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0i64;
            for (k, b_row) in b.iter().enumerate() {
                let term = ring.mul(a[i][k], b_row[j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// The (row, col) minor of `m`: the matrix with that row and column removed.
fn minor(m: &Matrix, row: usize, col: usize) -> Matrix {
    m.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Exact integer determinant via Laplace cofactor expansion along the first row.
///
/// No modular reduction is applied; the caller normalizes the result into the
/// ring when needed. Floating-point determinants round badly for larger
/// matrices, so everything here stays in `i64`.
pub fn determinant(m: &Matrix) -> Result<i64, HillCipherError> {
    square_dimension(m)?;
    Ok(det_unchecked(m))
}

fn det_unchecked(m: &Matrix) -> i64 {
    match m.len() {
        0 => 1,
        1 => m[0][0],
        2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
        n => {
            let mut det = 0i64;
            for j in 0..n {
                let cofactor = det_unchecked(&minor(m, 0, j));
                if j % 2 == 0 {
                    det += m[0][j] * cofactor;
                } else {
                    det -= m[0][j] * cofactor;
                }
            }
            det
        }
    }
}

/// The matrix of signed minors of `m`.
pub fn cofactor_matrix(m: &Matrix) -> Result<Matrix, HillCipherError> {
    let n = square_dimension(m)?;

    let mut cof = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let d = det_unchecked(&minor(m, i, j));
            cof[i][j] = if (i + j) % 2 == 0 { d } else { -d };
        }
    }
    Ok(cof)
}

/// The adjugate of `m`: the transpose of its cofactor matrix.
pub fn adjugate(m: &Matrix) -> Result<Matrix, HillCipherError> {
    let cof = cofactor_matrix(m)?;
    let n = cof.len();

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            adj[j][i] = cof[i][j];
        }
    }
    Ok(adj)
}

/// Inverts a square matrix in the given ring via the adjugate construction:
/// `M^-1 = det(M)^-1 · adj(M) (mod m)`, each entry reduced into `[0, m)`.
///
/// # Errors
///
/// Returns `HillCipherError::NotInvertible` carrying the normalized
/// determinant when `gcd(det(M) mod m, m) != 1`.
pub fn invert_mod(m: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let det = ring.normalize(determinant(m)?);
    let det_inv = modinv(det, ring.modulus() as i64)
        .ok_or(HillCipherError::NotInvertible { determinant: det })?;

    let adj = adjugate(m)?;
    Ok(adj
        .iter()
        .map(|row| row.iter().map(|&v| ring.mul(det_inv, v)).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Ring {
        Ring::alphabet()
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let ring = alphabet();
        let a = vec![vec![3, 3], vec![2, 5]];
        let x = vec![7, 4];
        // R1: (3*7 + 3*4) % 26 = 33 % 26 = 7
        // R2: (2*7 + 5*4) % 26 = 34 % 26 = 8
        assert_eq!(matrix_vector_mul(&a, &x, &ring).unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let ring = alphabet();
        let a = vec![vec![1, 2], vec![3, 4]];
        let x = vec![5, 6, 7];
        assert!(matrix_vector_mul(&a, &x, &ring).is_err());
    }

    #[test]
    fn test_matrix_mul_ok() {
        let ring = alphabet();
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        // C[0][0] = (1*5 + 2*7) % 26 = 19
        // C[0][1] = (1*6 + 2*8) % 26 = 22
        // C[1][0] = (3*5 + 4*7) % 26 = 43 % 26 = 17
        // C[1][1] = (3*6 + 4*8) % 26 = 50 % 26 = 24
        let expected = vec![vec![19, 22], vec![17, 24]];
        assert_eq!(matrix_mul(&a, &b, &ring).unwrap(), expected);
    }

    #[test]
    fn test_matrix_mul_dimension_mismatch() {
        let ring = alphabet();
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert!(matrix_mul(&a, &b, &ring).is_err());

        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matrix_mul(&a, &ragged, &ring).is_err());
    }

    #[test]
    fn test_identity_matrix() {
        let expected3 = vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
        assert_eq!(identity_matrix(3), expected3);
        let expected0: Matrix = Vec::new();
        assert_eq!(identity_matrix(0), expected0);
    }

    #[test]
    fn test_determinant_2x2() {
        let m = vec![vec![3, 3], vec![2, 5]];
        assert_eq!(determinant(&m).unwrap(), 9);

        let singular = vec![vec![1, 2], vec![2, 4]];
        assert_eq!(determinant(&singular).unwrap(), 0);
    }

    #[test]
    fn test_determinant_3x3_exact() {
        let m = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(determinant(&m).unwrap(), 441);

        let negative = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(determinant(&negative).unwrap(), -1);
    }

    #[test]
    fn test_determinant_expansion_matches_4x4() {
        // det of a block-diagonal matrix is the product of the block dets.
        let m = vec![
            vec![3, 3, 0, 0],
            vec![2, 5, 0, 0],
            vec![0, 0, 1, 2],
            vec![0, 0, 3, 4],
        ];
        assert_eq!(determinant(&m).unwrap(), 9 * -2);
    }

    #[test]
    fn test_adjugate_3x3() {
        let m = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        let adj = adjugate(&m).unwrap();
        // M * adj(M) = det(M) * I, exactly over the integers.
        let det = determinant(&m).unwrap();
        let n = m.len();
        for i in 0..n {
            for j in 0..n {
                let entry: i64 = (0..n).map(|k| m[i][k] * adj[k][j]).sum();
                assert_eq!(entry, if i == j { det } else { 0 });
            }
        }
    }

    #[test]
    fn test_invert_mod_hill_key() {
        let ring = alphabet();
        let m = vec![vec![3, 3], vec![2, 5]];
        // det = 9, det_inv = 3, adj = [[5, -3], [-2, 3]]
        // inv = 3 * [[5, 23], [24, 3]] = [[15, 17], [20, 9]] mod 26
        let expected = vec![vec![15, 17], vec![20, 9]];
        assert_eq!(invert_mod(&m, &ring).unwrap(), expected);

        let product = matrix_mul(&m, &expected, &ring).unwrap();
        assert_eq!(product, identity_matrix(2));
    }

    #[test]
    fn test_invert_mod_3x3() {
        let ring = alphabet();
        let m = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        let inv = invert_mod(&m, &ring).unwrap();
        assert_eq!(
            inv,
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );
        assert_eq!(matrix_mul(&m, &inv, &ring).unwrap(), identity_matrix(3));
    }

    #[test]
    fn test_invert_mod_singular() {
        let ring = alphabet();
        let m = vec![vec![1, 2], vec![2, 4]]; // det = 0
        assert_eq!(
            invert_mod(&m, &ring),
            Err(HillCipherError::NotInvertible { determinant: 0 })
        );

        let even_det = vec![vec![2, 0], vec![0, 1]]; // det = 2, gcd(2, 26) = 2
        assert_eq!(
            invert_mod(&even_det, &ring),
            Err(HillCipherError::NotInvertible { determinant: 2 })
        );
    }

    #[test]
    fn test_invert_mod_gate_matches_gcd() {
        // invert_mod succeeds iff gcd(det mod 26, 26) == 1.
        let ring = alphabet();
        for d in 0..26i64 {
            let m = vec![vec![d, 0], vec![0, 1]];
            let invertible = crate::ring::gcd(d, 26) == 1;
            assert_eq!(invert_mod(&m, &ring).is_ok(), invertible, "det = {}", d);
        }
    }
}
