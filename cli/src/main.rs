//! Interactive menu around the `hill-crypto` core. All cipher logic lives in
//! the library; this binary only collects input and formats output.

use std::io::{self, BufRead, Write};

use hill_crypto::hill::attack::recover_key_from_text;
use hill_crypto::hill::{KeyMatrix, decrypt, encrypt, validate_key};

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for key numbers until the input forms an invertible key matrix.
/// Returns `None` when the user aborts with an empty line.
fn read_key() -> io::Result<Option<KeyMatrix>> {
    loop {
        println!("  Key format: numbers separated by spaces or commas (4 for 2x2, 9 for 3x3, ...)");
        let input = prompt("  Enter key numbers (empty line to cancel): ")?;
        if input.is_empty() {
            return Ok(None);
        }

        let parsed: Result<Vec<i64>, _> = input
            .replace(',', " ")
            .split_whitespace()
            .map(str::parse)
            .collect();
        let elements = match parsed {
            Ok(elements) => elements,
            Err(e) => {
                println!("  Error: invalid number: {}", e);
                continue;
            }
        };

        let key = match KeyMatrix::try_from_elements(&elements) {
            Ok(key) => key,
            Err(e) => {
                println!("  Error: {}", e);
                continue;
            }
        };

        let diagnostic = validate_key(&key);
        log::debug!(
            "key candidate {}x{}, determinant {} mod 26",
            key.dimension(),
            key.dimension(),
            diagnostic.determinant
        );
        if !diagnostic.invertible {
            println!(
                "  Error: key matrix is not invertible modulo 26 (determinant {}).",
                diagnostic.determinant
            );
            continue;
        }

        return Ok(Some(key));
    }
}

fn print_key(key: &KeyMatrix) {
    for row in key.rows() {
        println!("    {:?}", row);
    }
}

fn run_encryption_mode() -> io::Result<()> {
    println!("\n--- ENCRYPTION MODE ---");
    let plaintext = prompt("  Enter plaintext: ")?;

    let Some(key) = read_key()? else {
        return Ok(());
    };

    match encrypt(&plaintext, &key) {
        Ok(cipher) => {
            println!("\n  Key matrix ({n}x{n}):", n = key.dimension());
            print_key(&key);
            println!("  Ciphertext: {}\n", cipher);
        }
        Err(e) => println!("\n  Error: {}\n", e),
    }
    Ok(())
}

fn run_decryption_mode() -> io::Result<()> {
    println!("\n--- DECRYPTION MODE ---");
    let ciphertext = prompt("  Enter ciphertext (A-Z only): ")?;

    let Some(key) = read_key()? else {
        return Ok(());
    };

    match decrypt(&ciphertext, &key) {
        Ok(plain) => {
            println!("\n  Decrypted: {}", plain);
            println!("  Note: trailing X's may be padding from encryption.\n");
        }
        Err(e) => println!("\n  Error: {}\n", e),
    }
    Ok(())
}

fn run_validation_mode() -> io::Result<()> {
    println!("\n--- KEY VALIDATION MODE ---");
    let input = prompt("  Enter key numbers: ")?;

    let parsed: Result<Vec<i64>, _> = input
        .replace(',', " ")
        .split_whitespace()
        .map(str::parse)
        .collect();
    let elements = match parsed {
        Ok(elements) => elements,
        Err(e) => {
            println!("  Error: invalid number: {}\n", e);
            return Ok(());
        }
    };

    match KeyMatrix::try_from_elements(&elements) {
        Ok(key) => {
            let diagnostic = validate_key(&key);
            println!("  Determinant mod 26: {}", diagnostic.determinant);
            if diagnostic.invertible {
                println!("  Key is usable for encryption and decryption.\n");
            } else {
                println!("  Key is NOT invertible modulo 26; decryption would fail.\n");
            }
        }
        Err(e) => println!("  Error: {}\n", e),
    }
    Ok(())
}

fn run_known_plaintext_attack() -> io::Result<()> {
    println!("\n--- KNOWN-PLAINTEXT ATTACK MODE ---");
    println!("  An NxN key is recovered from N*N matched plaintext/ciphertext letters.");

    let dimension = match prompt("  Assumed key dimension (e.g. 2 or 3): ")?.parse::<usize>() {
        Ok(n) if n >= 2 => n,
        _ => {
            println!("  Error: dimension must be an integer >= 2.\n");
            return Ok(());
        }
    };
    println!(
        "  Required: at least {} alphabetic characters of each.",
        dimension * dimension
    );

    let plaintext = prompt("  Known plaintext: ")?;
    let ciphertext = prompt("  Corresponding ciphertext: ")?;

    match recover_key_from_text(&plaintext, &ciphertext, dimension) {
        Ok(key) => {
            println!("\n  Recovered key matrix:");
            print_key(&key);
            match serde_json::to_string(&key) {
                Ok(json) => println!("  As JSON: {}", json),
                Err(e) => log::warn!("could not serialize recovered key: {}", e),
            }

            // Verify against the full ciphertext, as far as it segments.
            match decrypt(&ciphertext, &key) {
                Ok(plain) => println!("  Verification (full ciphertext decrypted): {}\n", plain),
                Err(e) => println!("  Verification skipped: {}\n", e),
            }
        }
        Err(e) => {
            println!("\n  ATTACK FAILED: {}", e);
            println!("  Try a different plaintext sample; the blocks must be linearly independent mod 26.\n");
        }
    }
    Ok(())
}

fn run_random_key_mode() -> io::Result<()> {
    println!("\n--- RANDOM KEY MODE ---");
    let dimension = match prompt("  Key dimension (e.g. 2 or 3): ")?.parse::<usize>() {
        Ok(n) if n >= 2 => n,
        _ => {
            println!("  Error: dimension must be an integer >= 2.\n");
            return Ok(());
        }
    };

    let mut rng = rand::rng();
    match KeyMatrix::random_invertible(dimension, &mut rng) {
        Ok(key) => {
            println!("  Generated invertible key matrix:");
            print_key(&key);
            println!();
        }
        Err(e) => println!("  Error: {}\n", e),
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    println!("=== HILL CIPHER ===");
    loop {
        println!("  1) Encrypt");
        println!("  2) Decrypt");
        println!("  3) Validate key");
        println!("  4) Known-plaintext attack");
        println!("  5) Generate random key");
        println!("  6) Quit");

        match prompt("Choice: ")?.as_str() {
            "1" => run_encryption_mode()?,
            "2" => run_decryption_mode()?,
            "3" => run_validation_mode()?,
            "4" => run_known_plaintext_attack()?,
            "5" => run_random_key_mode()?,
            "6" | "q" | "quit" => break,
            other => println!("  Unknown choice: {:?}\n", other),
        }
    }
    Ok(())
}
