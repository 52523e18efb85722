//! Base types for genome representation.
//!
//! This module provides the foundational types for representing nucleotide
//! and amino-acid states, the alphabet selector, and sequences in the virevo
//! library.

mod alphabet;
mod amino_acid;
mod nucleotide;
mod sequence;

pub use alphabet::SequenceAlphabet;
pub use amino_acid::{AminoAcid, AMINO_ACID_STATES};
pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
