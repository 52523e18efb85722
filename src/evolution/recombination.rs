//! Breakpoint-driven recombination between two parent sequences.
//!
//! A recombinant genome is stitched from alternating segments of two parents.
//! The breakpoint set lives in a single coordinate space shared by both
//! parents (non-homologous recombination): splicing switches the source
//! parent at each breakpoint without attempting to align homologous
//! positions, so parents of different lengths are allowed as long as the
//! shorter one is passed first. Homologous recombination would need one
//! breakpoint vector per parent identifying the points of homology.
//!
//! Which breakpoints occur on a given mating is decided by an external
//! recombination-rate model; this module only performs the splice.

use std::collections::BTreeSet;

use crate::base::Sequence;
use crate::errors::RecombinationError;

/// Check the parent ordering and that every breakpoint falls strictly inside
/// the shorter parent.
fn validate(
    p0: &Sequence,
    p1: &Sequence,
    breakpoints: &BTreeSet<usize>,
) -> Result<(), RecombinationError> {
    if p0.len() > p1.len() {
        return Err(RecombinationError::UnorderedParents {
            len0: p0.len(),
            len1: p1.len(),
        });
    }

    for &position in breakpoints {
        if position == 0 || position >= p0.len() {
            return Err(RecombinationError::InvalidBreakpoint {
                position,
                length: p0.len(),
            });
        }
    }

    Ok(())
}

/// Length of the sequence `recombine` would produce, without materializing it.
///
/// Callers use this to pre-size downstream buffers; it walks the same
/// interval/parity logic as `recombine` and always agrees with the length of
/// the materialized product.
///
/// # Errors
/// Returns an error if `p0` is longer than `p1` or any breakpoint falls
/// outside `(0, p0.len())`.
pub fn recombinant_length(
    p0: &Sequence,
    p1: &Sequence,
    breakpoints: &BTreeSet<usize>,
) -> Result<usize, RecombinationError> {
    validate(p0, p1, breakpoints)?;

    let parents = [p0, p1];
    let mut active = 0;
    let mut cursor = 0;
    let mut length = 0;

    for &breakpoint in breakpoints {
        length += breakpoint - cursor;
        cursor = breakpoint;
        active = 1 - active;
    }
    length += parents[active].len() - cursor;

    Ok(length)
}

/// Create a recombinant sequence from two parents and a set of breakpoints.
///
/// Copying starts from `p0`; at each breakpoint the half-open segment
/// `[cursor, breakpoint)` is taken from the currently active parent, then the
/// active parent flips. The tail after the last breakpoint comes from
/// whichever parent is active, so an even number of breakpoints ends on `p0`
/// and an odd number ends on `p1` (whose tail may be longer). An empty
/// breakpoint set yields an exact copy of `p0`.
///
/// # Errors
/// Returns an error if `p0` is longer than `p1` or any breakpoint falls
/// outside `(0, p0.len())`.
pub fn recombine(
    p0: &Sequence,
    p1: &Sequence,
    breakpoints: &BTreeSet<usize>,
) -> Result<Sequence, RecombinationError> {
    let length = recombinant_length(p0, p1, breakpoints)?;

    let parents = [p0, p1];
    let mut active = 0;
    let mut cursor = 0;
    let mut product = Vec::with_capacity(length);

    for &breakpoint in breakpoints {
        product.extend_from_slice(&parents[active].as_slice()[cursor..breakpoint]);
        cursor = breakpoint;
        active = 1 - active;
    }
    product.extend_from_slice(&parents[active].as_slice()[cursor..]);

    Ok(Sequence::from_nucleotides(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn breakpoints(positions: &[usize]) -> BTreeSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_empty_breakpoints_copies_first_parent() {
        let p0 = Sequence::from_str("AAACCC").unwrap();
        let p1 = Sequence::from_str("TTTGGGTTT").unwrap();

        let child = recombine(&p0, &p1, &BTreeSet::new()).unwrap();
        assert_eq!(child.to_string(), "AAACCC");
    }

    #[test]
    fn test_single_breakpoint_switches_to_second_parent() {
        let p0 = Sequence::from_str("AAAAAA").unwrap();
        let p1 = Sequence::from_str("TTTTTTTTT").unwrap();

        let child = recombine(&p0, &p1, &breakpoints(&[4])).unwrap();
        // First 4 bases from p0, remainder of p1 from offset 4
        assert_eq!(child.to_string(), "AAAATTTTT");
        assert_eq!(child.len(), p1.len());
    }

    #[test]
    fn test_two_breakpoints_even_parity_tail_from_first_parent() {
        let p0 = Sequence::from_str("AAACCCGGG").unwrap();
        let p1 = Sequence::from_str("TTTAAACCC").unwrap();

        let child = recombine(&p0, &p1, &breakpoints(&[3, 6])).unwrap();
        // p0[0..3] + p1[3..6] + p0[6..9]
        assert_eq!(child.to_string(), "AAAAAAGGG");
    }

    #[test]
    fn test_odd_breakpoints_tail_from_longer_parent() {
        let p0 = Sequence::from_str("AAAA").unwrap();
        let p1 = Sequence::from_str("CCCCCCCCCCCC").unwrap();

        let child = recombine(&p0, &p1, &breakpoints(&[1, 2, 3])).unwrap();
        // A + C + A + p1 tail from offset 3
        assert_eq!(child.to_string(), "ACACCCCCCCCC");
        assert_eq!(child.len(), p1.len());
    }

    #[test]
    fn test_equal_length_parents() {
        let p0 = Sequence::from_str("AAAAAAAA").unwrap();
        let p1 = Sequence::from_str("TTTTTTTT").unwrap();

        let child = recombine(&p0, &p1, &breakpoints(&[2, 5])).unwrap();
        assert_eq!(child.to_string(), "AATTTAAA");
    }

    #[test]
    fn test_recombinant_length_agrees_with_recombine() {
        let p0 = Sequence::from_str("ACGTACGTAC").unwrap();
        let p1 = Sequence::from_str("TGCATGCATGCATGCA").unwrap();

        let cases: Vec<BTreeSet<usize>> = vec![
            BTreeSet::new(),
            breakpoints(&[1]),
            breakpoints(&[5]),
            breakpoints(&[9]),
            breakpoints(&[2, 7]),
            breakpoints(&[1, 2, 3]),
            breakpoints(&[3, 4, 8, 9]),
        ];

        for set in &cases {
            let expected = recombinant_length(&p0, &p1, set).unwrap();
            let child = recombine(&p0, &p1, set).unwrap();
            assert_eq!(child.len(), expected, "breakpoints {set:?}");
        }
    }

    #[test]
    fn test_unordered_parents_rejected() {
        let p0 = Sequence::from_str("AAAAAA").unwrap();
        let p1 = Sequence::from_str("TTT").unwrap();

        let err = recombine(&p0, &p1, &BTreeSet::new()).unwrap_err();
        assert_eq!(err, RecombinationError::UnorderedParents { len0: 6, len1: 3 });
    }

    #[test]
    fn test_breakpoint_at_zero_rejected() {
        let p0 = Sequence::from_str("AAAA").unwrap();
        let p1 = Sequence::from_str("TTTT").unwrap();

        let err = recombine(&p0, &p1, &breakpoints(&[0])).unwrap_err();
        assert_eq!(
            err,
            RecombinationError::InvalidBreakpoint {
                position: 0,
                length: 4
            }
        );
    }

    #[test]
    fn test_breakpoint_beyond_shorter_parent_rejected() {
        let p0 = Sequence::from_str("AAAA").unwrap();
        let p1 = Sequence::from_str("TTTTTTTT").unwrap();

        // At the boundary
        assert!(recombine(&p0, &p1, &breakpoints(&[4])).is_err());
        // Inside the longer parent only
        let err = recombinant_length(&p0, &p1, &breakpoints(&[2, 6])).unwrap_err();
        assert_eq!(
            err,
            RecombinationError::InvalidBreakpoint {
                position: 6,
                length: 4
            }
        );
    }

    #[test]
    fn test_recombine_does_not_modify_parents() {
        let p0 = Sequence::from_str("AAACCC").unwrap();
        let p1 = Sequence::from_str("TTTGGG").unwrap();

        let _ = recombine(&p0, &p1, &breakpoints(&[3])).unwrap();
        assert_eq!(p0.to_string(), "AAACCC");
        assert_eq!(p1.to_string(), "TTTGGG");
    }

    #[test]
    fn test_error_display() {
        let err = RecombinationError::UnorderedParents { len0: 6, len1: 3 };
        let msg = format!("{err}");
        assert!(msg.contains("shortest-first"));

        let err = RecombinationError::InvalidBreakpoint {
            position: 9,
            length: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("9"));
        assert!(msg.contains("4"));
    }
}
