//! A crate containing number theoretic utilities used for reconstructing shared secrets: a checked prime modulus
//! type for finite field arithmetic, the extended euclidean algorithm and a primality test.

pub mod prime;

mod error;

pub use error::{MathsError, Result};
