/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        return (-old_r, -old_x, -old_y);
    }

    (old_r, old_x, old_y)
}

/// Modular inverse of `a` mod `m`, if it exists.
///
/// Returns `Some(x)` with `x` in `[0, m)` such that `a * x ≡ 1 (mod m)`,
/// or `None` when `gcd(a, m) != 1`.
pub fn modinv(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(a, m);
    if g != 1 {
        None
    } else {
        // x·a ≡ 1 (mod m)
        Some((x % m + m) % m)
    }
}
