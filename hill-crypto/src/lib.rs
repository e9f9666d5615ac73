//! Hill cipher core: exact modular matrix arithmetic, a text ↔ vector codec,
//! the block transform itself, and known-plaintext key recovery.
//!
//! Educational only; the Hill cipher is deliberately broken and
//! [`hill::attack::recover_key`] demonstrates exactly how.

pub mod codec;
pub mod errors;
pub mod hill;
pub mod preset;
pub mod ring;

pub use errors::HillCipherError;
pub use hill::attack::{recover_key, recover_key_from_text};
pub use hill::{KeyDiagnostic, KeyMatrix, decrypt, encrypt, validate_key};
