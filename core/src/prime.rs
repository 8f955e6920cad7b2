//! Trial-division primality testing.

use core::fmt;

/// Returns true if `n` is prime.
///
/// Tries every divisor in `2..=isqrt(n)`. Anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n.unsigned_abs();
    (2..=n.isqrt()).all(|x| n % x != 0)
}

/// The primality verdict for a number, printable as a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primality {
    pub n: i64,
    pub prime: bool,
}

impl Primality {
    pub fn of(n: i64) -> Self {
        let prime = is_prime(n);
        tracing::debug!(n, prime, "checked primality");
        Self { n, prime }
    }
}

impl fmt::Display for Primality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prime {
            write!(f, "{} is a prime number", self.n)
        } else {
            write!(f, "{} is not a prime number", self.n)
        }
    }
}
