use core::fmt;

use super::Nucleotide;
use serde::{Deserialize, Serialize};

/// An amino-acid state: the 20 standard residues plus the stop signal `Ter`.
///
/// Like `Nucleotide`, variants carry a stable u8 index (0-20) used wherever
/// amino acids are exposed as raw state codes. Rendering uses the one-letter
/// code, with `Ter` rendered as `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AminoAcid {
    Ala = 0,
    Arg = 1,
    Asn = 2,
    Asp = 3,
    Cys = 4,
    Gln = 5,
    Glu = 6,
    Gly = 7,
    His = 8,
    Ile = 9,
    Leu = 10,
    Lys = 11,
    Met = 12,
    Phe = 13,
    Pro = 14,
    Ser = 15,
    Thr = 16,
    Trp = 17,
    Tyr = 18,
    Val = 19,
    Ter = 20,
}

/// Number of amino-acid states, including the stop signal.
pub const AMINO_ACID_STATES: usize = 21;

use AminoAcid::*;

/// Standard genetic code, indexed by `16*a + 4*b + c` over nucleotide
/// indices (A=0, C=1, G=2, T=3) of the codon positions.
const GENETIC_CODE: [AminoAcid; 64] = [
    // AAx, ACx, AGx, ATx
    Lys, Asn, Lys, Asn, Thr, Thr, Thr, Thr, Arg, Ser, Arg, Ser, Ile, Ile, Met, Ile,
    // CAx, CCx, CGx, CTx
    Gln, His, Gln, His, Pro, Pro, Pro, Pro, Arg, Arg, Arg, Arg, Leu, Leu, Leu, Leu,
    // GAx, GCx, GGx, GTx
    Glu, Asp, Glu, Asp, Ala, Ala, Ala, Ala, Gly, Gly, Gly, Gly, Val, Val, Val, Val,
    // TAx, TCx, TGx, TTx
    Ter, Tyr, Ter, Tyr, Ser, Ser, Ser, Ser, Ter, Cys, Trp, Cys, Leu, Phe, Leu, Phe,
];

impl AminoAcid {
    /// Resolve a nucleotide triplet through the standard genetic code.
    #[inline]
    pub const fn translate(codon: [Nucleotide; 3]) -> Self {
        let index = codon[0].to_index() as usize * 16
            + codon[1].to_index() as usize * 4
            + codon[2].to_index() as usize;
        GENETIC_CODE[index]
    }

    /// Convert from u8 index (0-20)
    #[inline]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Ala),
            1 => Some(Arg),
            2 => Some(Asn),
            3 => Some(Asp),
            4 => Some(Cys),
            5 => Some(Gln),
            6 => Some(Glu),
            7 => Some(Gly),
            8 => Some(His),
            9 => Some(Ile),
            10 => Some(Leu),
            11 => Some(Lys),
            12 => Some(Met),
            13 => Some(Phe),
            14 => Some(Pro),
            15 => Some(Ser),
            16 => Some(Thr),
            17 => Some(Trp),
            18 => Some(Tyr),
            19 => Some(Val),
            20 => Some(Ter),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-20).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert to the uppercase one-letter code (`*` for `Ter`).
    #[inline]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Ala => b'A',
            Arg => b'R',
            Asn => b'N',
            Asp => b'D',
            Cys => b'C',
            Gln => b'Q',
            Glu => b'E',
            Gly => b'G',
            His => b'H',
            Ile => b'I',
            Leu => b'L',
            Lys => b'K',
            Met => b'M',
            Phe => b'F',
            Pro => b'P',
            Ser => b'S',
            Thr => b'T',
            Trp => b'W',
            Tyr => b'Y',
            Val => b'V',
            Ter => b'*',
        }
    }

    /// Convert to the one-letter `char` code.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// True if this state is the stop signal.
    #[inline(always)]
    pub const fn is_stop(self) -> bool {
        matches!(self, Ter)
    }
}

impl From<AminoAcid> for u8 {
    #[inline(always)]
    fn from(aa: AminoAcid) -> u8 {
        aa.to_index()
    }
}

impl From<AminoAcid> for char {
    #[inline(always)]
    fn from(aa: AminoAcid) -> char {
        aa.to_char()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Nucleotide::{A, C, G, T};

    #[test]
    fn test_translate_start_and_stop_codons() {
        assert_eq!(AminoAcid::translate([A, T, G]), Met);
        assert_eq!(AminoAcid::translate([T, A, A]), Ter);
        assert_eq!(AminoAcid::translate([T, A, G]), Ter);
        assert_eq!(AminoAcid::translate([T, G, A]), Ter);
    }

    #[test]
    fn test_translate_representative_codons() {
        assert_eq!(AminoAcid::translate([A, A, A]), Lys);
        assert_eq!(AminoAcid::translate([C, C, C]), Pro);
        assert_eq!(AminoAcid::translate([G, G, G]), Gly);
        assert_eq!(AminoAcid::translate([T, T, T]), Phe);
        assert_eq!(AminoAcid::translate([T, G, G]), Trp);
        assert_eq!(AminoAcid::translate([G, A, T]), Asp);
        assert_eq!(AminoAcid::translate([A, G, C]), Ser);
    }

    #[test]
    fn test_translate_fourfold_degenerate_family() {
        // All GCx codons encode alanine
        for third in [A, C, G, T] {
            assert_eq!(AminoAcid::translate([G, C, third]), Ala);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..AMINO_ACID_STATES as u8 {
            let aa = AminoAcid::from_index(idx).unwrap();
            assert_eq!(aa.to_index(), idx);
        }
        assert_eq!(AminoAcid::from_index(21), None);
        assert_eq!(AminoAcid::from_index(255), None);
    }

    #[test]
    fn test_one_letter_codes_unique() {
        use std::collections::HashSet;

        let codes: HashSet<u8> = (0..AMINO_ACID_STATES as u8)
            .map(|i| AminoAcid::from_index(i).unwrap().to_ascii())
            .collect();
        assert_eq!(codes.len(), AMINO_ACID_STATES);
    }

    #[test]
    fn test_is_stop() {
        assert!(Ter.is_stop());
        assert!(!Met.is_stop());
        assert!(!Gly.is_stop());
    }

    #[test]
    fn test_display() {
        assert_eq!(Met.to_string(), "M");
        assert_eq!(Ter.to_string(), "*");

        let c: char = Trp.into();
        assert_eq!(c, 'W');
    }

    #[test]
    fn test_amino_acid_size() {
        assert_eq!(std::mem::size_of::<AminoAcid>(), 1);
    }
}
