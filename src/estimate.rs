//! Repeated-trial estimation of draw probabilities.
//!
//! Each trial draws from a fresh copy of a reference [`Urn`] and is scored
//! against a [`Target`] of minimum per-label counts. The estimate is the
//! fraction of trials whose draw met every requirement.

use crate::urn::Urn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("negative required count: {0}")]
    NegativeRequirement(i64),
    #[error("trial count must be positive")]
    ZeroTrials,
}

/// Minimum per-label counts a draw must contain to count as a success.
///
/// Labels absent from the target are unconstrained: a draw may contain any
/// number of them without affecting the outcome.
#[derive(Debug, Clone)]
pub struct Target<L> {
    required: HashMap<L, u64>,
}

impl<L: Eq + Hash> PartialEq for Target<L> {
    fn eq(&self, other: &Self) -> bool {
        self.required == other.required
    }
}

impl<L: Eq + Hash> Eq for Target<L> {}

impl<L> Target<L> {
    /// An empty target. It is met by every draw, including an empty one.
    pub fn new() -> Self {
        Self { required: HashMap::new() }
    }
}

impl<L> Default for Target<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Eq + Hash> Target<L> {
    /// Build a target from `(label, count)` pairs. Counts must be non-negative.
    pub fn try_from_counts<I>(counts: I) -> Result<Self, EstimateError>
    where
        I: IntoIterator<Item = (L, i64)>,
    {
        let mut required = HashMap::new();
        for (label, count) in counts {
            if count < 0 {
                return Err(EstimateError::NegativeRequirement(count));
            }
            required.insert(label, count as u64);
        }
        Ok(Self { required })
    }

    /// Add or replace a requirement.
    pub fn require(mut self, label: L, count: u64) -> Self {
        self.required.insert(label, count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Required count for `label`; zero if unconstrained.
    pub fn required_of(&self, label: &L) -> u64 {
        self.required.get(label).copied().unwrap_or(0)
    }

    /// True iff every required label appears in `drawn` at least its required
    /// number of times. Drawn labels without a requirement are ignored.
    pub fn is_met_by(&self, drawn: &[L]) -> bool {
        let counts = tally(drawn);
        self.required
            .iter()
            .all(|(label, &need)| counts.get(label).copied().unwrap_or(0) >= need)
    }
}

/// Per-label counts of a drawn sequence.
pub fn tally<L: Eq + Hash>(drawn: &[L]) -> HashMap<&L, u64> {
    let mut counts = HashMap::new();
    for label in drawn {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Successes out of trials for one estimation run.
///
/// ```
/// use urn_rs::estimate::Estimate;
///
/// let est = Estimate::new(471, 1287);
/// assert!((est.probability() - 0.366).abs() < 0.001);
/// assert_eq!(est.to_string(), "471/1287 (~0.3660)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    successes: u64,
    trials: u64,
}

impl Estimate {
    pub fn new(successes: u64, trials: u64) -> Self {
        debug_assert!(trials > 0 && successes <= trials);
        Self { successes, trials }
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Empirical success probability in `[0.0, 1.0]`.
    pub fn probability(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (~{:.4})", self.successes, self.trials, self.probability())
    }
}

/// Run `trials` independent draws of `draw_size` items, each against a fresh
/// copy of `urn`, and count how many satisfy `target`.
///
/// The reference urn is never modified: every trial works on its own copy
/// reset from the construction-time snapshot, so trials are mutually
/// independent. `trials` must be positive; the input is rejected before any
/// trial runs.
pub fn estimate_with<L, R>(
    urn: &Urn<L>,
    target: &Target<L>,
    draw_size: usize,
    trials: u64,
    rng: &mut R,
) -> Result<Estimate, EstimateError>
where
    L: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(EstimateError::ZeroTrials);
    }
    let mut working = urn.fresh();
    let mut successes = 0;
    for _ in 0..trials {
        working.reset();
        let drawn = working.draw_with(draw_size, rng);
        if target.is_met_by(&drawn) {
            successes += 1;
        }
    }
    Ok(Estimate { successes, trials })
}

/// Sequential estimate with a seeded RNG. The same seed and inputs reproduce
/// the identical result bit-for-bit.
///
/// ```
/// use urn_rs::estimate::{estimate_seeded, Target};
/// use urn_rs::urn::Urn;
///
/// let urn = Urn::try_from_counts([("black", 6), ("red", 4), ("green", 3)]).unwrap();
/// let target = Target::try_from_counts([("red", 2), ("green", 1)]).unwrap();
/// let a = estimate_seeded(&urn, &target, 5, 500, 42).unwrap();
/// let b = estimate_seeded(&urn, &target, 5, 500, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn estimate_seeded<L>(
    urn: &Urn<L>,
    target: &Target<L>,
    draw_size: usize,
    trials: u64,
    seed: u64,
) -> Result<Estimate, EstimateError>
where
    L: Clone + Eq + Hash,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    estimate_with(urn, target, draw_size, trials, &mut rng)
}

// Odd multiplier keeps per-trial seeds distinct for every trial index.
#[cfg(feature = "rayon")]
const TRIAL_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Partition trials across the rayon thread pool and sum the partial success
/// counts.
///
/// Trial `i` draws from its own RNG stream derived from `seed` and `i`, so
/// the result is deterministic for a given seed regardless of thread
/// scheduling. The draw sequences differ from [`estimate_seeded`]'s, so the
/// two entry points agree in distribution but not bit-for-bit.
#[cfg(feature = "rayon")]
pub fn estimate_par<L>(
    urn: &Urn<L>,
    target: &Target<L>,
    draw_size: usize,
    trials: u64,
    seed: u64,
) -> Result<Estimate, EstimateError>
where
    L: Clone + Eq + Hash + Send + Sync,
{
    use rayon::prelude::*;

    if trials == 0 {
        return Err(EstimateError::ZeroTrials);
    }
    let successes = (0..trials)
        .into_par_iter()
        .filter(|&trial| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed ^ trial.wrapping_mul(TRIAL_STREAM));
            let mut working = urn.fresh();
            let drawn = working.draw_with(draw_size, &mut rng);
            target.is_met_by(&drawn)
        })
        .count() as u64;
    Ok(Estimate { successes, trials })
}
