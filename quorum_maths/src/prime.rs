//! This module defines `PrimeModulus`, a prime number verified by a primality test, to be used as the modulus of
//! finite field arithmetic. It also provides the extended euclidean algorithm and the modular inverse built upon it.
//! Furthermore, it provides well-known Mersenne primes as lazily initialized moduli.

use std::fmt;
use std::str::FromStr;

use num::{BigInt, BigUint, Integer, Num, One, Zero};
use once_cell::sync::Lazy;

use crate::prime_test::{MillerRabin, PrimeTest};
use crate::{MathsError, Result};

/// A prime number that passed the Miller-Rabin test and can therefore be used as the modulus of a prime field. It
/// cannot be constructed from an unchecked number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeModulus(BigUint);

// do not run the primality test on these, they are known to be prime. Parse the big integers from string instead.
pub static MERSENNE_61: Lazy<PrimeModulus> = Lazy::new(|| PrimeModulus::from_literal("2305843009213693951"));
pub static MERSENNE_89: Lazy<PrimeModulus> =
    Lazy::new(|| PrimeModulus::from_literal("618970019642690137449562111"));
pub static MERSENNE_107: Lazy<PrimeModulus> =
    Lazy::new(|| PrimeModulus::from_literal("162259276829213363391578010288127"));
pub static MERSENNE_127: Lazy<PrimeModulus> =
    Lazy::new(|| PrimeModulus::from_literal("170141183460469231731687303715884105727"));
pub static MERSENNE_521: Lazy<PrimeModulus> =
    Lazy::new(|| PrimeModulus((BigUint::one() << 521u32) - BigUint::one()));

impl PrimeModulus {
    /// Check `candidate` for primality and wrap it on success.
    /// # Returns
    /// The modulus or `MathsError::NotPrime` if `candidate` is composite, zero or one.
    pub fn new(candidate: BigUint) -> Result<Self> {
        if MillerRabin::is_prime(&candidate) {
            Ok(PrimeModulus(candidate))
        } else {
            Err(MathsError::NotPrime(candidate))
        }
    }

    fn from_literal(literal: &str) -> Self {
        PrimeModulus(BigUint::from_str_radix(literal, 10).unwrap())
    }

    /// Returns the Mersenne prime `2^exponent - 1` if it is one of the moduli provided by this module.
    pub fn mersenne(exponent: u32) -> Option<&'static PrimeModulus> {
        match exponent {
            61 => Some(&*MERSENNE_61),
            89 => Some(&*MERSENNE_89),
            107 => Some(&*MERSENNE_107),
            127 => Some(&*MERSENNE_127),
            521 => Some(&*MERSENNE_521),
            _ => None,
        }
    }

    /// Returns the prime as a `BigUint` instance
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Returns the prime as a signed `BigInt`, the type residues are computed in.
    pub fn as_int(&self) -> BigInt {
        BigInt::from(self.0.clone())
    }

    /// Map `value` onto its canonical residue in `[0, p)`. Negative values wrap around the prime.
    pub fn reduce(&self, value: &BigInt) -> BigInt {
        value.mod_floor(&self.as_int())
    }

    /// Calculate the multiplicative inverse of `value` within this prime field.
    pub fn inverse(&self, value: &BigInt) -> Result<BigInt> {
        modular_inverse(value, &self.as_int())
    }
}

impl FromStr for PrimeModulus {
    type Err = MathsError;

    /// Parses a decimal literal and checks it for primality.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathsError::InvalidLiteral(s.to_owned()));
        }

        BigUint::from_str_radix(s, 10)
            .map_err(|_| MathsError::InvalidLiteral(s.to_owned()))
            .and_then(PrimeModulus::new)
    }
}

impl fmt::Display for PrimeModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<PrimeModulus> for BigUint {
    fn from(v: PrimeModulus) -> Self {
        v.0
    }
}

/// The extended euclidean algorithm. Returns `(d, s, t)` such that `d = gcd(a, b) = s * a + t * b`.
pub fn extended_greatest_common_divisor(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (quotient, remainder) = a.div_rem(b);
        let (d, s, t) = extended_greatest_common_divisor(b, &remainder);
        let delta = quotient * &t;
        (d, t, s - delta)
    }
}

/// Calculate the multiplicative inverse of `value` modulo `modulus`. The result is the canonical residue in
/// `[0, modulus)`.
/// # Returns
/// The inverse or `MathsError::NotInvertible` if `value` and `modulus` are not coprime.
pub fn modular_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    let residue = value.mod_floor(modulus);
    let (d, _, inverse) = extended_greatest_common_divisor(modulus, &residue);

    if d.is_one() {
        Ok(inverse.mod_floor(modulus))
    } else {
        Err(MathsError::NotInvertible {
            value: value.clone(),
            modulus: modulus.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_gcd() {
        let (a, b) = (BigInt::from(240), BigInt::from(46));
        let (d, s, t) = extended_greatest_common_divisor(&a, &b);
        assert_eq!(BigInt::from(2), d);
        assert_eq!(d, s * a + t * b);
    }

    #[test]
    fn test_inverse() {
        let seven = BigInt::from(7);
        assert_eq!(BigInt::from(5), modular_inverse(&BigInt::from(3), &seven).unwrap());
        assert_eq!(BigInt::from(2), modular_inverse(&BigInt::from(-3), &seven).unwrap());
        assert_eq!(BigInt::from(4), modular_inverse(&BigInt::from(9), &seven).unwrap());
    }

    #[test]
    fn test_non_invertible() {
        let modulus = BigInt::from(i64::MAX);
        assert_eq!(
            Err(MathsError::NotInvertible {
                value: BigInt::from(-14),
                modulus: modulus.clone()
            }),
            modular_inverse(&BigInt::from(-14), &modulus)
        );
        assert!(modular_inverse(&BigInt::zero(), &BigInt::from(7)).is_err());
    }

    /// Test, whether negative values correctly wrap around the mersenne number 2^89-1
    #[test]
    fn test_reduce() {
        let reduced = MERSENNE_89.reduce(&BigInt::from(-645783));
        assert_eq!(BigInt::from_str_radix("618970019642690137448916328", 10).unwrap(), reduced);
    }

    #[test]
    fn test_mersenne_moduli_are_prime() {
        for exponent in &[61u32, 89, 107, 127, 521] {
            let modulus = PrimeModulus::mersenne(*exponent).unwrap();
            assert_eq!(&((BigUint::one() << *exponent) - BigUint::one()), modulus.as_uint());
            assert!(MillerRabin::is_prime(modulus.as_uint()));
        }
        assert!(PrimeModulus::mersenne(64).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(&BigUint::from(8191u32), "8191".parse::<PrimeModulus>().unwrap().as_uint());
        assert_eq!(
            Err(MathsError::NotPrime(BigUint::from(i64::MAX as u64))),
            "9223372036854775807".parse::<PrimeModulus>()
        );
        assert_eq!(Err(MathsError::InvalidLiteral("-7".to_owned())), "-7".parse::<PrimeModulus>());
        assert_eq!(Err(MathsError::InvalidLiteral("".to_owned())), "".parse::<PrimeModulus>());
    }
}
