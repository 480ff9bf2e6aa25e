//! Primality helpers used to size the slot array.
//!
//! Table capacities must be prime so the double-hash probe step (which is
//! always in `1..capacity`) is coprime with the capacity and the probe
//! sequence visits every slot before cycling.

/// Returns whether `x` is prime. Values below 2 are not prime.
pub(crate) fn is_prime(x: usize) -> bool {
    if x < 2 {
        return false;
    }
    if x < 4 {
        // 2 and 3
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `x`.
pub(crate) fn next_prime(mut x: usize) -> usize {
    while !is_prime(x) {
        x += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: small primes and composites classify correctly,
    /// including the sub-2 values that are never prime.
    #[test]
    fn is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(53));
        assert!(!is_prime(55));
        assert!(is_prime(107));
        assert!(!is_prime(221)); // 13 * 17, odd composite past the easy cases
        assert!(is_prime(223));
    }

    /// Invariant: `next_prime` returns its argument when already prime and
    /// otherwise the nearest prime above it.
    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(52), 53);
        assert_eq!(next_prime(53), 53);
        assert_eq!(next_prime(54), 59);
        assert_eq!(next_prime(106), 107);
        assert_eq!(next_prime(212), 223);
    }

    /// Invariant: every value returned by `next_prime` tests prime and no
    /// smaller candidate in the scanned range does.
    #[test]
    fn next_prime_is_minimal() {
        for x in 0..500 {
            let p = next_prime(x);
            assert!(is_prime(p), "next_prime({x}) = {p} must be prime");
            for q in x..p {
                assert!(!is_prime(q), "{q} is a prime below next_prime({x})");
            }
        }
    }
}
