//! Prime factorization by trial division.
//!
//! ```
//! use prime_factors::factorize;
//!
//! assert_eq!(factorize(360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
//! assert!(factorize(1).unwrap().is_empty());
//! assert!(factorize(0).is_err());
//! ```

pub mod error;
pub mod prime_factors;

pub use error::{Error, Result};
pub use prime_factors::{
    factorize, factorize_str, group_multiplicities, is_prime, parse_positive, product,
};
