use hill_crypto::errors::HillCipherError;
use hill_crypto::hill::attack::{recover_key, recover_key_from_text};
use hill_crypto::hill::{KeyMatrix, decrypt, encrypt};

#[test]
fn known_plaintext_attack_breaks_2x2() -> Result<(), HillCipherError> {
    let secret = KeyMatrix::try_from_elements(&[3, 3, 2, 5])?;
    let intercepted = encrypt("HELP", &secret)?;

    // Two known blocks of two letters each are enough for a 2x2 key.
    let recovered = recover_key_from_text("HELP", &intercepted, 2)?;
    assert_eq!(recovered, secret);

    Ok(())
}

#[test]
fn known_plaintext_attack_breaks_3x3() -> Result<(), HillCipherError> {
    let secret = KeyMatrix::try_from_elements(&[6, 24, 1, 13, 16, 10, 20, 17, 15])?;
    let known_plain = "ONETWOSIX";
    let known_cipher = encrypt(known_plain, &secret)?;
    assert_eq!(known_cipher, "KOPGLCLUJ");

    let recovered = recover_key_from_text(known_plain, &known_cipher, 3)?;
    assert_eq!(recovered, secret);

    // The recovered key decrypts a longer message enciphered with the secret.
    let message = encrypt("INTERNATIONALCIPHER", &secret)?;
    assert_eq!(decrypt(&message, &recovered)?, "INTERNATIONALCIPHERXX");

    Ok(())
}

#[test]
fn dependent_plaintext_sample_is_rejected() {
    // "INT" "ERN" "ATI" columns give determinant 10 mod 26; gcd(10, 26) = 2.
    let result = recover_key_from_text("INTERNATI", "PIQDMSWUB", 3);
    assert_eq!(
        result,
        Err(HillCipherError::PlaintextNotInvertible { determinant: 10 })
    );
}

#[test]
fn attack_fails_cleanly_on_block_mismatch() {
    let p_blocks = vec![vec![7, 4], vec![11, 15]];
    let c_blocks = vec![vec![7, 8], vec![0, 19], vec![1, 2]];
    assert!(matches!(
        recover_key(&p_blocks, &c_blocks),
        Err(HillCipherError::DimensionMismatch(_))
    ));
}
