use lazy_static::lazy_static;
use std::collections::HashMap;

/// The fixed 26-symbol cipher alphabet, in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter used to right-pad the final plaintext block.
pub const PAD_CHAR: char = 'X';

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its corresponding
    /// uppercase Latin letter (A-Z).
    pub static ref INDEX_TO_CHAR_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();

        for (i, ch) in ALPHABET.chars().enumerate() {
            map.insert(i as u8, ch);
        }

        map
    };

    /// A static HashMap mapping an uppercase Latin letter (A-Z) to its
    /// corresponding index (0 to 25).
    pub static ref CHAR_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_CHAR_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}
