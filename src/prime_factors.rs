use std::num::IntErrorKind;

use tracing::{instrument, trace};

use crate::error::{Error, Result};

/// Returns the prime factors of `n` in non-decreasing order, each repeated
/// by its multiplicity. `1` has no prime factors and yields an empty vector.
///
/// Zero has no factorization and is rejected with [`Error::InvalidArgument`].
#[instrument(level = "trace")]
pub fn factorize(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(Error::invalid(n.to_string(), "zero has no prime factorization"));
    }

    let factors = trial_division(n);
    trace!(count = factors.len(), "factorized");
    Ok(factors)
}

// Composite candidates never divide `n`: their prime factors were already
// divided out by the time they are tried.
fn trial_division(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut candidate = 2;

    while n > 1 {
        while n % candidate == 0 {
            factors.push(candidate);
            n /= candidate;
        }
        candidate += 1;
    }

    factors
}

/// Parses a strictly positive decimal integer, ignoring surrounding whitespace.
pub fn parse_positive(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let n = trimmed.parse::<u64>().map_err(|err| {
        let reason = match err.kind() {
            IntErrorKind::Empty => "empty input",
            IntErrorKind::PosOverflow => "does not fit in 64 bits",
            _ if trimmed.starts_with('-') => "must be a positive integer",
            _ => "not a decimal integer",
        };
        Error::invalid(input, reason)
    })?;

    if n == 0 {
        return Err(Error::invalid(input, "must be a positive integer"));
    }
    Ok(n)
}

pub fn factorize_str(input: &str) -> Result<Vec<u64>> {
    factorize(parse_positive(input)?)
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Multiplies the factors back together. `None` on overflow; the empty
/// product is `1`.
pub fn product(factors: &[u64]) -> Option<u64> {
    factors.iter().try_fold(1u64, |acc, &f| acc.checked_mul(f))
}

/// Collapses runs of equal factors into `(prime, multiplicity)` pairs.
///
/// Expects the sorted output of [`factorize`]; unsorted input produces one
/// pair per run, not per distinct value.
pub fn group_multiplicities(factors: &[u64]) -> Vec<(u64, u32)> {
    let mut groups: Vec<(u64, u32)> = Vec::new();
    for &f in factors {
        match groups.last_mut() {
            Some((p, count)) if *p == f => *count += 1,
            _ => groups.push((f, 1)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_has_no_factors() {
        assert_eq!(factorize(1).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = factorize(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref input, .. } if input == "0"));
    }

    #[test]
    fn test_first_composites() {
        assert_eq!(factorize(4).unwrap(), vec![2, 2]);
        assert_eq!(factorize(6).unwrap(), vec![2, 3]);
        assert_eq!(factorize(8).unwrap(), vec![2, 2, 2]);
        assert_eq!(factorize(9).unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_large_prime_power() {
        assert_eq!(factorize(1 << 63).unwrap(), vec![2; 63]);
    }

    #[test]
    fn test_large_semiprime() {
        assert_eq!(factorize(999_983 * 1_000_003).unwrap(), vec![999_983, 1_000_003]);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 42\n").unwrap(), 42);
        assert_eq!(parse_positive("+7").unwrap(), 7);
    }

    #[test]
    fn test_parse_rejections() {
        for (input, reason) in [
            ("", "empty input"),
            ("  ", "empty input"),
            ("-3", "must be a positive integer"),
            ("0", "must be a positive integer"),
            ("abc", "not a decimal integer"),
            ("1.5", "not a decimal integer"),
            ("18446744073709551616", "does not fit in 64 bits"),
        ] {
            assert_eq!(
                parse_positive(input),
                Err(Error::InvalidArgument {
                    input: input.to_string(),
                    reason
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_is_prime_small() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(u32::MAX as u64 - 4)); // 4294967291
    }

    #[test]
    fn test_product() {
        assert_eq!(product(&[]), Some(1));
        assert_eq!(product(&[2, 3, 7]), Some(42));
        assert_eq!(product(&[u64::MAX, 2]), None);
    }

    #[test]
    fn test_group_multiplicities() {
        assert_eq!(group_multiplicities(&[]), vec![]);
        assert_eq!(
            group_multiplicities(&factorize(360).unwrap()),
            vec![(2, 3), (3, 2), (5, 1)]
        );
    }
}
