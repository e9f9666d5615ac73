//! Known-plaintext key recovery.
//!
//! An N×N Hill cipher is linear, so N matched plaintext/ciphertext block
//! pairs whose plaintext blocks are linearly independent mod 26 determine the
//! key completely: with blocks as matrix columns, `C ≡ K · P (mod 26)` gives
//! `K = C · P^-1 (mod 26)`.

use crate::codec;
use crate::errors::HillCipherError;
use crate::hill::KeyMatrix;
use crate::ring::matrix_ops::{invert_mod, matrix_mul};
use crate::ring::{Matrix, Ring, Vector};

/// Places `blocks` as the columns of an n×n matrix.
fn columns_to_matrix(blocks: &[Vector], n: usize) -> Result<Matrix, HillCipherError> {
    for (i, block) in blocks.iter().enumerate() {
        if block.len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Block {} has length {}, expected {}",
                i,
                block.len(),
                n
            )));
        }
    }

    let mut matrix = vec![vec![0i64; n]; n];
    for (col, block) in blocks.iter().enumerate() {
        for (row, &value) in block.iter().enumerate() {
            matrix[row][col] = value;
        }
    }
    Ok(matrix)
}

/// Recovers the key from N matched plaintext/ciphertext blocks of length N.
///
/// # Errors
///
/// - `HillCipherError::InvalidKeyShape` if fewer than 2 block pairs are given.
/// - `HillCipherError::DimensionMismatch` if block counts or lengths disagree.
/// - `HillCipherError::PlaintextNotInvertible` if the plaintext sample matrix
///   is singular mod 26. This is the dominant failure mode in practice:
///   linear independence of the known blocks is not guaranteed by chance.
///   The failure is terminal for this sample; no other sample is searched for.
pub fn recover_key(
    p_blocks: &[Vector],
    c_blocks: &[Vector],
) -> Result<KeyMatrix, HillCipherError> {
    let n = p_blocks.len();
    if n < 2 {
        return Err(HillCipherError::InvalidKeyShape(format!(
            "Key recovery needs at least 2 block pairs, got {}",
            n
        )));
    }
    if c_blocks.len() != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Plaintext and ciphertext block counts must match ({} vs {})",
            n,
            c_blocks.len()
        )));
    }

    let ring = Ring::alphabet();
    let p = columns_to_matrix(p_blocks, n)?;
    let c = columns_to_matrix(c_blocks, n)?;

    let p_inv = match invert_mod(&p, &ring) {
        Ok(inv) => inv,
        Err(HillCipherError::NotInvertible { determinant }) => {
            return Err(HillCipherError::PlaintextNotInvertible { determinant });
        }
        Err(e) => return Err(e),
    };

    let key = matrix_mul(&c, &p_inv, &ring)?;
    KeyMatrix::try_from_rows(key)
}

/// Recovers an N×N key from the first N·N letters of matched plaintext and
/// ciphertext strings.
///
/// Both texts are cleaned first; consecutive N-letter groups become the
/// column blocks. This mirrors how an attacker feeds captured text in.
///
/// # Errors
///
/// Returns `HillCipherError::EmptyInput` if either text cleans to fewer than
/// N·N letters, plus everything [`recover_key`] can return.
pub fn recover_key_from_text(
    plaintext: &str,
    ciphertext: &str,
    dimension: usize,
) -> Result<KeyMatrix, HillCipherError> {
    let required = dimension * dimension;

    let p_indices = codec::encode(plaintext);
    let c_indices = codec::encode(ciphertext);
    if p_indices.len() < required || c_indices.len() < required {
        return Err(HillCipherError::EmptyInput);
    }

    let p_blocks = codec::segment(&p_indices[..required], dimension)?;
    let c_blocks = codec::segment(&c_indices[..required], dimension)?;

    recover_key(&p_blocks, &c_blocks)
}
