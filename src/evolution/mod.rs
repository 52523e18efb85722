//! Evolution module providing recombination and parent selection.
//!
//! This module implements the reproductive core of the simulation:
//! - **Recombination**: breakpoint-driven splicing of two parent genomes
//! - **Selection**: density-dependent stochastic sampling of parents
//!
//! Mutation operators and fitness models are external collaborators; they
//! plug in through `Sequence` edits and the `FitnessProvider` contract.

pub mod recombination;
pub mod selection;

pub use recombination::{recombinant_length, recombine};
pub use selection::{DynamicSelection, FitnessProvider};
