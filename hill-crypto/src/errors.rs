#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HillCipherError {
    /// Error when the key element count is not a perfect square, or the
    /// resulting matrix dimension is below 2.
    #[error("InvalidKeyShape: {0}")]
    InvalidKeyShape(String),
    /// Error when a matrix determinant shares a common factor with 26, so the
    /// matrix has no inverse modulo 26.
    #[error("matrix is not invertible modulo 26 (determinant {determinant})")]
    NotInvertible { determinant: i64 },
    /// Error when the cleaned ciphertext length is not a multiple of the key
    /// dimension. Decryption never pads implicitly.
    #[error("MalformedCiphertext: length {length} is not a multiple of the block size {block_size}")]
    MalformedCiphertext { length: usize, block_size: usize },
    /// Error when the known-plaintext sample matrix is singular modulo 26.
    /// The attack needs linearly independent plaintext blocks.
    #[error("plaintext sample is not invertible modulo 26 (determinant {determinant})")]
    PlaintextNotInvertible { determinant: i64 },
    /// Error when the input text contains no alphabetic characters after cleaning.
    #[error("input contains no alphabetic characters")]
    EmptyInput,

    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InternalError: {0}")]
    InternalError(String),
}
