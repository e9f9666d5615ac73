//! Hill cipher block transform: key handling, encryption and decryption.
//!
//! Blocks are column vectors; encryption computes `key · block (mod 26)` and
//! decryption applies the modular inverse of the key the same way. The inverse
//! is recomputed on every decryption rather than cached.

pub mod attack;

use crate::codec;
use crate::errors::HillCipherError;
use crate::ring::matrix_ops::{determinant, invert_mod, matrix_vector_mul};
use crate::ring::{Matrix, Ring, gcd};

use rand::Rng;

use serde::{Deserialize, Serialize};

/// An N×N Hill cipher key with entries canonicalized into `[0, 25]`.
///
/// Shape is validated at construction time; invertibility modulo 26 is not,
/// since encryption works with any square key. Use [`KeyMatrix::validate`]
/// for a pre-flight check before decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMatrix {
    rows: Matrix,
    dimension: usize,
}

/// Pre-flight diagnostic for a key matrix, for CLI/GUI input validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiagnostic {
    /// The determinant reduced into `[0, 25]`.
    pub determinant: i64,
    /// Whether `gcd(determinant, 26) == 1`.
    pub invertible: bool,
}

impl KeyMatrix {
    /// Builds a key from a flat element list, row-major.
    ///
    /// The element count must be a perfect square with dimension >= 2.
    /// Entries are reduced into `[0, 25]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::hill::KeyMatrix;
    /// let key = KeyMatrix::try_from_elements(&[3, 3, 2, 5]).unwrap();
    /// assert_eq!(key.dimension(), 2);
    ///
    /// assert!(KeyMatrix::try_from_elements(&[3, 3, 2]).is_err());
    /// assert!(KeyMatrix::try_from_elements(&[7]).is_err());
    /// ```
    pub fn try_from_elements(elements: &[i64]) -> Result<Self, HillCipherError> {
        let n = elements.len().isqrt();
        if n * n != elements.len() {
            return Err(HillCipherError::InvalidKeyShape(format!(
                "Element count ({}) must be a perfect square (4, 9, 16, ...)",
                elements.len()
            )));
        }

        let rows = elements.chunks(n).map(|chunk| chunk.to_vec()).collect();
        Self::try_from_rows(rows)
    }

    /// Builds a key from explicit rows.
    ///
    /// The matrix must be square with dimension >= 2; entries are reduced
    /// into `[0, 25]`.
    pub fn try_from_rows(rows: Matrix) -> Result<Self, HillCipherError> {
        let n = rows.len();
        if n < 2 {
            return Err(HillCipherError::InvalidKeyShape(format!(
                "Key dimension must be at least 2x2, got {}x{}",
                n, n
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(HillCipherError::InvalidKeyShape(format!(
                    "Key row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        let ring = Ring::alphabet();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
            .collect();

        Ok(KeyMatrix { rows, dimension: n })
    }

    /// Generates a uniformly random key matrix that is invertible modulo 26,
    /// retrying until one is found.
    pub fn random_invertible<R: Rng>(dimension: usize, rng: &mut R) -> Result<Self, HillCipherError> {
        if dimension < 2 {
            return Err(HillCipherError::InvalidKeyShape(format!(
                "Key dimension must be at least 2x2, got {}x{}",
                dimension, dimension
            )));
        }

        loop {
            let rows: Matrix = (0..dimension)
                .map(|_| (0..dimension).map(|_| rng.random_range(0..26)).collect())
                .collect();
            let candidate = KeyMatrix {
                rows,
                dimension,
            };
            if candidate.validate().invertible {
                return Ok(candidate);
            }
        }
    }

    /// The block size N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The key entries, row-major, each in `[0, 25]`.
    pub fn rows(&self) -> &Matrix {
        &self.rows
    }

    /// The determinant reduced into `[0, 25]`.
    ///
    /// Shape is enforced at construction, so the exact integer determinant
    /// always exists.
    pub fn determinant(&self) -> i64 {
        let ring = Ring::alphabet();
        let det = determinant(&self.rows).expect("KeyMatrix is square by construction");
        ring.normalize(det)
    }

    /// Reports whether this key can be used for decryption, with the
    /// determinant as a diagnostic for the caller.
    pub fn validate(&self) -> KeyDiagnostic {
        let det = self.determinant();
        KeyDiagnostic {
            determinant: det,
            invertible: gcd(det, 26) == 1,
        }
    }

    /// Computes the inverse key matrix modulo 26.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` when `gcd(det, 26) != 1`.
    pub fn inverse(&self) -> Result<Matrix, HillCipherError> {
        invert_mod(&self.rows, &Ring::alphabet())
    }
}

/// Pre-flight key check exposed to CLI/GUI callers.
pub fn validate_key(key: &KeyMatrix) -> KeyDiagnostic {
    key.validate()
}

/// Encrypts `plaintext` with the given key.
///
/// The text is cleaned (non-alphabetic characters stripped, case folded),
/// right-padded with 'X' to a multiple of the key dimension, and transformed
/// block by block as `key · block (mod 26)`.
///
/// # Errors
///
/// Returns `HillCipherError::EmptyInput` if cleaning leaves no letters.
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    let ring = Ring::alphabet();
    let n = key.dimension();

    let indices = codec::encode(plaintext);
    if indices.is_empty() {
        return Err(HillCipherError::EmptyInput);
    }

    let padded = codec::pad_to_block(indices, n);
    let mut out = Vec::with_capacity(padded.len());
    for block in codec::segment(&padded, n)? {
        out.extend(matrix_vector_mul(key.rows(), &block, &ring)?);
    }

    codec::decode(&out)
}

/// Decrypts `ciphertext` with the given key.
///
/// The cleaned ciphertext length must already be a multiple of the key
/// dimension; no implicit padding is applied. Trailing 'X' padding from
/// encryption stays visible in the output.
///
/// # Errors
///
/// - `HillCipherError::EmptyInput` if cleaning leaves no letters.
/// - `HillCipherError::NotInvertible` if the key has no inverse modulo 26;
///   this is checked before any block is transformed.
/// - `HillCipherError::MalformedCiphertext` if the length is not a multiple
///   of the key dimension.
pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    let ring = Ring::alphabet();
    let n = key.dimension();

    let indices = codec::encode(ciphertext);
    if indices.is_empty() {
        return Err(HillCipherError::EmptyInput);
    }

    let inverse = key.inverse()?;

    let mut out = Vec::with_capacity(indices.len());
    for block in codec::segment(&indices, n)? {
        out.extend(matrix_vector_mul(&inverse, &block, &ring)?);
    }

    codec::decode(&out)
}
