//! Exact character tables of the finite symmetric groups.
//!
//! For partitions `lambda` and `mu` of the same `n`, [`CharTable`] computes
//! the integer value of the irreducible character of S_n indexed by
//! `lambda` on the conjugacy class of cycle type `mu`, using the
//! Murnaghan–Nakayama rule: strip a border strip of size `mu[0]` from
//! `lambda` in every possible way, recurse on what remains, and alternate
//! signs by each strip's leg length. Everything is memoized, so building a
//! whole table costs little more than its hardest entry.
//!
//! ```
//! use symchar::{CharTable, Partition};
//!
//! let mut engine = CharTable::new();
//! let lambda = Partition::new([2, 1])?;
//! let mu = Partition::new([1, 1, 1])?;
//! assert_eq!(engine.char_value(&lambda, &mu)?, 2);
//! assert_eq!(
//!     engine.character_table(3),
//!     [[1, 1, 1], [-1, 0, 2], [1, -1, 1]],
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

use internal_util::minus_one_pow;
use itertools::Itertools;
use strips::border_strips;

mod internal_util;
mod partition;
mod strips;
pub mod util;

pub use partition::{InvalidPartitionError, Partition};

/// `char_value` was asked about a character and a conjugacy class living in
/// two different symmetric groups.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct DegreeMismatchError {
    pub lambda_degree: usize,
    pub mu_degree: usize,
}
impl Display for DegreeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degree mismatch: |lambda| = {} but |mu| = {}",
            self.lambda_degree, self.mu_degree
        )
    }
}
impl std::error::Error for DegreeMismatchError {
}

/// The memoized Murnaghan–Nakayama engine.
///
/// Owns two caches that grow monotonically and are never evicted: the
/// partition table (all partitions of every degree seen so far) and the
/// character-value cache (every `(lambda, mu)` entry computed so far, each
/// written once). The engine is an ordinary owned value with no global
/// state; independent computations can use independent instances. It is
/// single-threaded by design: share one across threads only behind external
/// synchronisation.
#[derive(Debug, Clone)]
pub struct CharTable {
    /// For each degree, all partitions of that degree in descending
    /// lexicographic order
    partitions: Vec<Vec<Partition>>,
    /// For each degree, lambda -> mu -> chi^lambda(mu)
    character_values: Vec<HashMap<Partition, HashMap<Partition, i64>>>,
}
impl Default for CharTable {
    fn default() -> Self {
        Self::new()
    }
}
impl CharTable {
    pub fn new() -> Self {
        Self {
            partitions: vec![
                vec![Partition::empty()],
                vec![Partition::canonical([1])],
            ],
            character_values: vec![HashMap::new(), HashMap::new()],
        }
    }

    /// All partitions of `n`, in descending lexicographic order (`(n)`
    /// first, `(1, ..., 1)` last). Computes and caches every missing degree
    /// up to `n`; asking again for any degree already covered is a lookup.
    pub fn partitions_of(&mut self, n: usize) -> &[Partition] {
        self.extend_partitions(n);
        &self.partitions[n]
    }

    /// Populate the partition table (and a parallel character-cache slot)
    /// for every degree up to and including `n`. Partitions of a degree are
    /// built by pushing one extra part onto every partition of every
    /// smaller degree, deduplicating through canonical form.
    fn extend_partitions(&mut self, n: usize) {
        for degree in self.partitions.len()..=n {
            let mut batch = HashSet::new();
            for smaller in 0..degree {
                for partition in &self.partitions[smaller] {
                    let mut parts = partition.parts().to_vec();
                    parts.push(degree - smaller);
                    batch.insert(Partition::canonical(parts));
                }
            }
            self.partitions.push(
                batch
                    .into_iter()
                    .sorted_unstable_by(|a, b| b.cmp(a))
                    .collect(),
            );
            self.character_values.push(HashMap::new());
        }
    }

    /// The character value chi^lambda(mu) of S_n, where `n` is the shared
    /// degree of the two partitions.
    ///
    /// # Errors
    ///
    /// If `lambda` and `mu` are partitions of different integers, an error
    /// is returned; they would index a character and a class of two
    /// different groups.
    pub fn char_value(
        &mut self,
        lambda: &Partition,
        mu: &Partition,
    ) -> Result<i64, DegreeMismatchError> {
        if lambda.degree() != mu.degree() {
            return Err(DegreeMismatchError {
                lambda_degree: lambda.degree(),
                mu_degree: mu.degree(),
            });
        }
        Ok(self.char_value_memo(lambda.clone(), mu.clone()))
    }

    /// The recurrence proper; degrees are known to match
    fn char_value_memo(&mut self, lambda: Partition, mu: Partition) -> i64 {
        let degree = lambda.degree();
        if degree < 2 {
            // chi^() on the empty class, or chi^(1) on the identity of S_1
            return 1;
        }
        self.extend_partitions(degree);
        if let Some(&value) = self.character_values[degree]
            .get(&lambda)
            .and_then(|row| row.get(&mu))
        {
            return value;
        }

        let size = mu.parts()[0];
        let remaining_classes = mu.rest();
        let mut value = 0;
        for removal in border_strips(&lambda, size) {
            value += minus_one_pow(removal.rows - 1)
                * self.char_value_memo(removal.remainder, remaining_classes.clone());
        }
        self.character_values[degree]
            .entry(lambda)
            .or_default()
            .insert(mu, value);
        value
    }

    /// The full character table of S_n: `table[i][j]` is the value of the
    /// character indexed by the `i`th partition of `n` on the class indexed
    /// by the `j`th, rows and columns sharing the order of
    /// [`partitions_of`](Self::partitions_of).
    pub fn character_table(&mut self, n: usize) -> Vec<Vec<i64>> {
        let partitions = self.partitions_of(n).to_vec();
        let mut table = Vec::with_capacity(partitions.len());
        for lambda in &partitions {
            let mut row = Vec::with_capacity(partitions.len());
            for mu in &partitions {
                row.push(self.char_value_memo(lambda.clone(), mu.clone()));
            }
            table.push(row);
        }
        table
    }
}
