use std::fmt;
use std::str::FromStr;

use super::{AminoAcid, Nucleotide, SequenceAlphabet};
use crate::errors::{InvalidSequence, OutOfBounds};

/// Mutable genome sequence backed by a vector of `Nucleotide`s.
///
/// `Sequence` is the unit of genome state in the simulation: one instance per
/// haplotype, mutated in place by substitution and structural edits and read
/// either base-by-base or through the derived amino-acid view. Each instance
/// exclusively owns its backing storage; `Clone` is a deep copy.
///
/// Structural edits (`insert_sequence`, `delete_subsequence`) are expected to
/// preserve the reading frame when the sequence represents a complete coding
/// region. The type does not enforce this: frame preservation is the caller's
/// responsibility, and only the bounds of the edit are checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` with reserved capacity for `capacity` bases.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Create a `Sequence` of `length` bases, initialized to all `A`.
    pub fn filled(length: usize) -> Self {
        Self(vec![Nucleotide::A; length])
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Create a `Sequence` from a vector of state indices (0-3).
    /// Indices outside 0-3 are treated as A (0).
    pub fn from_indices(indices: Vec<u8>) -> Self {
        let nucleotides = indices
            .into_iter()
            .map(|i| Nucleotide::from_index(i).unwrap_or(Nucleotide::A))
            .collect();
        Self(nucleotides)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the length of the derived amino-acid view (`len() / 3`,
    /// truncating; a trailing partial codon contributes nothing).
    #[inline(always)]
    pub fn amino_acid_len(&self) -> usize {
        self.0.len() / 3
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Set the base at `index` to `base`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// sequence length.
    #[inline]
    pub fn set(&mut self, index: usize, base: Nucleotide) -> Result<(), OutOfBounds> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .map(|slot| *slot = base)
            .ok_or(OutOfBounds { index, len })
    }

    /// Return the amino acid at position `index` of the derived view, reading
    /// the nucleotide triplet `3*index .. 3*index + 3` through the standard
    /// genetic code. Returns `None` when the triplet extends past the end.
    #[inline]
    pub fn amino_acid(&self, index: usize) -> Option<AminoAcid> {
        let at = index.checked_mul(3)?;
        let codon = self.0.get(at..at + 3)?;
        Some(AminoAcid::translate([codon[0], codon[1], codon[2]]))
    }

    /// Extract a deep copy of the half-open range `[start, start + count)`.
    ///
    /// Returns `OutOfBounds` if the range extends past the end of the
    /// sequence.
    pub fn subsequence(&self, start: usize, count: usize) -> Result<Sequence, OutOfBounds> {
        let end = start
            .checked_add(count)
            .filter(|&end| end <= self.0.len())
            .ok_or(OutOfBounds {
                index: start.saturating_add(count),
                len: self.0.len(),
            })?;
        Ok(Self(self.0[start..end].to_vec()))
    }

    /// Insert all bases of `other` at position `at`, shifting the tail right.
    ///
    /// `at` may equal `len()` to append. The new buffer is built first and
    /// swapped in wholesale, so a failed call leaves the sequence untouched.
    ///
    /// Returns `OutOfBounds` if `at > len()`.
    pub fn insert_sequence(&mut self, at: usize, other: &Sequence) -> Result<(), OutOfBounds> {
        if at > self.0.len() {
            return Err(OutOfBounds {
                index: at,
                len: self.0.len(),
            });
        }

        let mut next = Vec::with_capacity(self.0.len() + other.len());
        next.extend_from_slice(&self.0[..at]);
        next.extend_from_slice(&other.0);
        next.extend_from_slice(&self.0[at..]);
        self.0 = next;
        Ok(())
    }

    /// Delete `count` bases starting at `at`, shifting the tail left.
    ///
    /// The new buffer is built first and swapped in wholesale, so a failed
    /// call leaves the sequence untouched.
    ///
    /// Returns `OutOfBounds` if `at + count > len()`.
    pub fn delete_subsequence(&mut self, at: usize, count: usize) -> Result<(), OutOfBounds> {
        let end = at
            .checked_add(count)
            .filter(|&end| end <= self.0.len())
            .ok_or(OutOfBounds {
                index: at.saturating_add(count),
                len: self.0.len(),
            })?;

        let mut next = Vec::with_capacity(self.0.len() - count);
        next.extend_from_slice(&self.0[..at]);
        next.extend_from_slice(&self.0[end..]);
        self.0 = next;
        Ok(())
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Borrow the mutable underlying `Nucleotide` slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Nucleotide] {
        &mut self.0
    }

    /// Append `base` to the end of the sequence.
    #[inline]
    pub fn push(&mut self, base: Nucleotide) {
        self.0.push(base);
    }

    /// Insert a single `base` at position `index`, shifting subsequent
    /// elements.
    #[inline]
    pub fn insert(&mut self, index: usize, base: Nucleotide) {
        self.0.insert(index, base);
    }

    /// Remove and return the base at `index`.
    ///
    /// Panics if `index` is out of bounds (matching the behavior of
    /// `Vec::remove`).
    #[inline]
    pub fn remove(&mut self, index: usize) -> Nucleotide {
        self.0.remove(index)
    }

    /// Return the full derived amino-acid view.
    pub fn amino_acids(&self) -> Vec<AminoAcid> {
        self.0
            .chunks_exact(3)
            .map(|codon| AminoAcid::translate([codon[0], codon[1], codon[2]]))
            .collect()
    }

    /// Render the derived amino-acid view as a one-letter-code string.
    pub fn amino_acid_string(&self) -> String {
        self.0
            .chunks_exact(3)
            .map(|codon| AminoAcid::translate([codon[0], codon[1], codon[2]]).to_char())
            .collect()
    }

    /// Length of the sequence as seen through `alphabet`.
    #[inline]
    pub fn len_in(&self, alphabet: SequenceAlphabet) -> usize {
        self.0.len() / alphabet.token_size()
    }

    /// State code at position `index` of the view selected by `alphabet`,
    /// or `None` if out of range.
    #[inline]
    pub fn state(&self, alphabet: SequenceAlphabet, index: usize) -> Option<u8> {
        match alphabet {
            SequenceAlphabet::Nucleotides => self.get(index).map(Nucleotide::to_index),
            SequenceAlphabet::AminoAcids => self.amino_acid(index).map(AminoAcid::to_index),
        }
    }

    /// All state codes of the view selected by `alphabet`.
    pub fn states(&self, alphabet: SequenceAlphabet) -> Vec<u8> {
        match alphabet {
            SequenceAlphabet::Nucleotides => {
                self.0.iter().map(|&nuc| nuc.to_index()).collect()
            }
            SequenceAlphabet::AminoAcids => self
                .amino_acids()
                .into_iter()
                .map(AminoAcid::to_index)
                .collect(),
        }
    }

    /// Render the view selected by `alphabet` as a symbol string.
    pub fn string_in(&self, alphabet: SequenceAlphabet) -> String {
        match alphabet {
            SequenceAlphabet::Nucleotides => self.to_string(),
            SequenceAlphabet::AminoAcids => self.amino_acid_string(),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Characters outside the nucleotide alphabet produce an
    /// `InvalidSequence` error. Parsing is case-insensitive and accepts the
    /// RNA spelling `U` for `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar(c))
            })
            .collect();

        Ok(Self(data?))
    }
}
