//! Virevo: genome representation and reproduction sampling for viral
//! evolution simulations.
//!
//! This library provides the data structures and algorithms at the core of a
//! forward-time viral evolution simulator: mutable nucleotide sequences with
//! derived amino-acid readings and structural edits, non-homologous
//! breakpoint recombination between parents, and density-dependent
//! stochastic parent selection under logistic-like population growth.
//!
//! Fitness computation, mutation operators, scheduling, and I/O live in the
//! surrounding simulation; this crate only assumes that individuals expose a
//! scalar fitness and that a seedable random source is supplied per run.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when driving simulations. Re-exporting them here makes
// them available as `virevo::Sequence`, `virevo::Nucleotide`, etc.
pub use base::{AminoAcid, Nucleotide, Sequence, SequenceAlphabet};
