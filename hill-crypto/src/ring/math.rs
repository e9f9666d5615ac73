//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Size of the Latin alphabet; the modulus of every cipher operation.
pub const ALPHABET_MODULUS: u64 = 26;

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 every Hill cipher operation runs in.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_MODULUS,
        }
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before
    /// the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(7, 4), 2); // 28 mod 26 = 2
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26 = 14
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        if a == 0 {
            return 0;
        }

        self.normalize(((-a as i128) % self.modulus as i128) as _)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NoInverse` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), or if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
