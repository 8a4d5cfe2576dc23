use num::{BigInt, BigUint};
use thiserror::Error;

/// Result type specialized for number theoretic operations.
pub type Result<T> = std::result::Result<T, MathsError>;

/// Errors raised while configuring or computing within a prime field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MathsError {
    #[error("{0} is not a prime number")]
    NotPrime(BigUint),
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },
    #[error("invalid modulus literal {0:?}")]
    InvalidLiteral(String),
}
