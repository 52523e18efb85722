//! Density-dependent stochastic parent selection.
//!
//! Each generation, every individual contributes a Poisson-distributed number
//! of offspring whose expectation couples its fitness to logistic-like
//! population pressure: E(progeny) = fitness * (1 + r * (1 - N / K)), where
//! r is the per-generation growth rate and K the carrying capacity. N is the
//! number of parent slots already accumulated during the current pass, so
//! individuals processed later in the generation feel more crowding than
//! earlier ones. The coupling is order-sensitive: reproducible runs must
//! process individuals sequentially in input order against a single random
//! stream.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

use crate::errors::SelectionError;

/// Capability contract for anything that can be selected as a parent.
///
/// Fitness semantics (phenotype models, epistasis, environmental effects) are
/// owned by the external fitness machinery; selection only requires a
/// non-negative scalar.
pub trait FitnessProvider {
    /// Current fitness of this individual. Must be non-negative.
    fn fitness(&self) -> f64;
}

impl FitnessProvider for f64 {
    #[inline]
    fn fitness(&self) -> f64 {
        *self
    }
}

/// Parameters of the density-dependent selection model.
///
/// Use `DynamicSelection::new` to validate values; `Default` carries the
/// conventional growth rate and carrying capacity of 1000. Realistic values
/// of both depend on the organism and question under study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicSelection {
    /// Intrinsic per-generation growth rate (r)
    growth_rate: f64,
    /// Population size at which net growth balances (K)
    carrying_capacity: f64,
}

impl DynamicSelection {
    /// Create a new selection model.
    ///
    /// # Arguments
    /// * `growth_rate` - Intrinsic growth rate per generation (finite, >= 0)
    /// * `carrying_capacity` - Population ceiling (finite, > 0)
    ///
    /// # Errors
    /// Returns an error if either parameter is outside its valid range.
    pub fn new(growth_rate: f64, carrying_capacity: f64) -> Result<Self, SelectionError> {
        if !growth_rate.is_finite() || growth_rate < 0.0 {
            return Err(SelectionError::InvalidGrowthRate(growth_rate));
        }
        if !carrying_capacity.is_finite() || carrying_capacity <= 0.0 {
            return Err(SelectionError::InvalidCarryingCapacity(carrying_capacity));
        }

        Ok(Self {
            growth_rate,
            carrying_capacity,
        })
    }

    /// Get the growth rate.
    #[inline]
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Get the carrying capacity.
    #[inline]
    pub fn carrying_capacity(&self) -> f64 {
        self.carrying_capacity
    }

    /// Expected progeny count for an individual of the given fitness when
    /// `selected_so_far` parent slots have already been accumulated.
    ///
    /// Floored at `f64::MIN_POSITIVE` so the Poisson mean stays positive even
    /// when crowding pushes the logistic term negative.
    #[inline]
    pub fn expected_progeny(&self, fitness: f64, selected_so_far: usize) -> f64 {
        let pressure = 1.0 - selected_so_far as f64 / self.carrying_capacity;
        (fitness * (1.0 + self.growth_rate * pressure)).max(f64::MIN_POSITIVE)
    }

    /// Run one selection pass over `generation`, appending to `selected`.
    ///
    /// Individuals are visited sequentially in input order. Each draws a
    /// Poisson progeny count (deterministically zero for zero fitness) and
    /// appends its index `progeny * parents_per_mating` times, one slot per
    /// parent of each mating event. The whole accumulator is then shuffled
    /// uniformly in place, so downstream mating logic can consume it in
    /// consecutive groups of `parents_per_mating`.
    ///
    /// An all-zero-fitness generation contributes nothing; callers must
    /// tolerate an empty result.
    pub fn select_parents<F, R>(
        &self,
        generation: &[F],
        selected: &mut Vec<usize>,
        parents_per_mating: usize,
        rng: &mut R,
    ) where
        F: FitnessProvider,
        R: Rng + ?Sized,
    {
        for (index, individual) in generation.iter().enumerate() {
            let fitness = individual.fitness();

            let progeny = if fitness == 0.0 {
                0
            } else {
                let expected = self.expected_progeny(fitness, selected.len());
                match Poisson::new(expected) {
                    Ok(poisson) => poisson.sample(rng) as u64,
                    Err(_) => 0,
                }
            };

            for _ in 0..progeny * parents_per_mating as u64 {
                selected.push(index);
            }
        }

        selected.shuffle(rng);
    }
}

impl Default for DynamicSelection {
    fn default() -> Self {
        Self {
            growth_rate: 1000.0,
            carrying_capacity: 1000.0,
        }
    }
}
