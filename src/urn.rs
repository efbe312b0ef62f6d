use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::Hash;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UrnError {
    #[error("negative item count: {0}")]
    NegativeCount(i64),
}

/// A depletable multiset of labeled items, drawn from uniformly at random
/// without replacement.
///
/// The urn keeps an immutable snapshot of its construction-time contents, so
/// a drained urn can be reset (or copied fresh) for another independent run.
///
/// ```
/// use urn_rs::urn::Urn;
///
/// let urn = Urn::try_from_counts([("red", 2), ("blue", 1)]).unwrap();
/// assert_eq!(urn.len(), 3);
/// assert_eq!(urn.count_of(&"red"), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Urn<L> {
    contents: Vec<L>,
    snapshot: Vec<L>,
}

impl<L: Clone + Eq + Hash> Urn<L> {
    /// Build an urn from `(label, count)` pairs. Counts must be non-negative;
    /// an urn with zero total items is legal and yields empty draws.
    pub fn try_from_counts<I>(counts: I) -> Result<Self, UrnError>
    where
        I: IntoIterator<Item = (L, i64)>,
    {
        let mut contents = Vec::new();
        for (label, count) in counts {
            if count < 0 {
                return Err(UrnError::NegativeCount(count));
            }
            contents.extend(std::iter::repeat(label).take(count as usize));
        }
        let snapshot = contents.clone();
        Ok(Self { contents, snapshot })
    }

    /// Number of items currently in the urn.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of items the urn held at construction.
    pub fn initial_len(&self) -> usize {
        self.snapshot.len()
    }

    /// Remaining occurrences of `label`.
    pub fn count_of(&self, label: &L) -> usize {
        self.contents.iter().filter(|x| *x == label).count()
    }

    /// Items still in the urn, in no particular order.
    pub fn remaining(&self) -> &[L] {
        &self.contents
    }

    /// The construction-time contents. Never changes after construction.
    pub fn snapshot(&self) -> &[L] {
        &self.snapshot
    }

    /// Remove and return one item chosen uniformly among the remaining items.
    pub fn draw_one_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<L> {
        if self.contents.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.contents.len());
        // swap_remove keeps each removal O(1); contents order is unobservable.
        Some(self.contents.swap_remove(idx))
    }

    /// Draw `n` items without replacement, returned in draw order.
    ///
    /// Each selection is uniform among the items remaining at that point, so
    /// later draws are conditioned on earlier ones. Asking for more items
    /// than remain returns everything left and empties the urn.
    ///
    /// ```
    /// use urn_rs::urn::Urn;
    ///
    /// let mut urn = Urn::try_from_counts([("red", 2), ("blue", 1)]).unwrap();
    /// let drawn = urn.draw_seeded(2, 42);
    /// assert_eq!(drawn.len(), 2);
    /// assert_eq!(urn.len(), 1);
    ///
    /// let rest = urn.draw_seeded(100, 42);
    /// assert_eq!(rest.len(), 1);
    /// assert!(urn.is_empty());
    /// ```
    pub fn draw_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<L> {
        let n = n.min(self.contents.len());
        (0..n).filter_map(|_| self.draw_one_with(rng)).collect()
    }

    /// Draw using a seeded RNG for reproducibility.
    pub fn draw_seeded(&mut self, n: usize, seed: u64) -> Vec<L> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.draw_with(n, &mut rng)
    }

    /// Restore the contents to the construction-time snapshot.
    pub fn reset(&mut self) {
        self.contents = self.snapshot.clone();
    }

    /// A new urn holding this urn's construction-time contents, independent
    /// of any draws made since. This is how repeated independent runs are
    /// isolated from each other and from the reference urn.
    pub fn fresh(&self) -> Self {
        Self { contents: self.snapshot.clone(), snapshot: self.snapshot.clone() }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountParseError {
    #[error("invalid count spec: '{0}'")]
    Invalid(String),
}

/// Parse `label=count` pairs separated by whitespace or commas.
///
/// ```
/// use urn_rs::urn::parse_counts;
///
/// let counts = parse_counts("black=6, red=4 green=3").unwrap();
/// assert_eq!(counts[1], ("red".to_string(), 4));
/// ```
pub fn parse_counts(input: &str) -> Result<Vec<(String, i64)>, CountParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (label, count) =
                entry.split_once('=').ok_or_else(|| CountParseError::Invalid(entry.to_string()))?;
            let label = label.trim();
            if label.is_empty() {
                return Err(CountParseError::Invalid(entry.to_string()));
            }
            let count = count
                .trim()
                .parse::<i64>()
                .map_err(|_| CountParseError::Invalid(entry.to_string()))?;
            Ok((label.to_string(), count))
        })
        .collect()
}
