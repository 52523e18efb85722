use serde::{Deserialize, Serialize};

/// Selector for reading a sequence at nucleotide or amino-acid resolution.
///
/// The set of alphabets is closed: genome state is always stored as
/// nucleotides, and the amino-acid reading is derived from triplets on
/// demand. Accessors on `Sequence` that take a `SequenceAlphabet` dispatch
/// between the two views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceAlphabet {
    Nucleotides,
    AminoAcids,
}

impl SequenceAlphabet {
    /// Number of nucleotide states consumed per symbol of this alphabet.
    #[inline(always)]
    pub const fn token_size(self) -> usize {
        match self {
            Self::Nucleotides => 1,
            Self::AminoAcids => 3,
        }
    }

    /// Number of distinct states in this alphabet.
    #[inline(always)]
    pub const fn symbols(self) -> usize {
        match self {
            Self::Nucleotides => 4,
            Self::AminoAcids => crate::base::AMINO_ACID_STATES,
        }
    }
}
