//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the virevo library.
//!
//! # Example
//!
//! ```
//! use virevo::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("ATGTAA").unwrap();
//! assert_eq!(seq.amino_acid_string(), "M*");
//! ```

pub use crate::base::{AminoAcid, Nucleotide, Sequence, SequenceAlphabet};
pub use crate::errors;
pub use crate::evolution::{recombinant_length, recombine, DynamicSelection, FitnessProvider};
