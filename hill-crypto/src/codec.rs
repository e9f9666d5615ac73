//! Text ↔ vector codec: letter/index mapping, block padding and segmentation.

use crate::errors::HillCipherError;
use crate::preset::alphabet::{CHAR_TO_INDEX_MAP, INDEX_TO_CHAR_MAP, PAD_CHAR};
use crate::ring::Vector;

/// Encodes text into letter indices (A=0 .. Z=25).
///
/// Non-alphabetic characters are stripped and case is normalized; the original
/// formatting is not recoverable.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::encode;
/// assert_eq!(encode("Help!"), vec![7, 4, 11, 15]);
/// assert_eq!(encode("1 2 3"), Vec::<i64>::new());
/// ```
pub fn encode(text: &str) -> Vector {
    text.chars()
        .filter_map(|ch| CHAR_TO_INDEX_MAP.get(&ch.to_ascii_uppercase()))
        .map(|&index| index as i64)
        .collect()
}

/// Decodes letter indices back into an uppercase string.
///
/// # Errors
///
/// Returns `HillCipherError::InternalError` if an index falls outside `[0, 25]`.
/// Ring-normalized values never do.
pub fn decode(indices: &[i64]) -> Result<String, HillCipherError> {
    indices
        .iter()
        .map(|&index| {
            u8::try_from(index)
                .ok()
                .and_then(|i| INDEX_TO_CHAR_MAP.get(&i))
                .copied()
                .ok_or_else(|| {
                    HillCipherError::InternalError(format!(
                        "Index {} is outside the alphabet range [0, 25]",
                        index
                    ))
                })
        })
        .collect()
}

/// Right-pads `indices` with the index of 'X' until the length is a multiple
/// of `n`.
///
/// Padding is never removed on decryption: decrypted text may show trailing
/// 'X' artifacts.
pub fn pad_to_block(mut indices: Vector, n: usize) -> Vector {
    let pad_index = CHAR_TO_INDEX_MAP[&PAD_CHAR] as i64;
    while indices.len() % n != 0 {
        indices.push(pad_index);
    }
    indices
}

/// Partitions `indices` into consecutive blocks of exactly `n` indices.
///
/// # Errors
///
/// Returns `HillCipherError::MalformedCiphertext` if the length is not a
/// multiple of `n`. Input is never truncated or padded here.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::segment;
/// let blocks = segment(&[7, 4, 11, 15], 2).unwrap();
/// assert_eq!(blocks, vec![vec![7, 4], vec![11, 15]]);
///
/// assert!(segment(&[7, 4, 11], 2).is_err());
/// ```
pub fn segment(indices: &[i64], n: usize) -> Result<Vec<Vector>, HillCipherError> {
    if indices.len() % n != 0 {
        return Err(HillCipherError::MalformedCiphertext {
            length: indices.len(),
            block_size: n,
        });
    }

    Ok(indices.chunks(n).map(|chunk| chunk.to_vec()).collect())
}
