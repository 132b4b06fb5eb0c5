use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;

/// The supplied sequence does not describe a valid partition.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct InvalidPartitionError(pub &'static str);
impl Display for InvalidPartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid partition: {}", self.0)
    }
}
impl std::error::Error for InvalidPartitionError {
}

/// An integer partition: a weakly decreasing sequence of positive parts,
/// summing to the partition's *degree*.
///
/// A `Partition` is always held in canonical form (zero parts stripped,
/// parts sorted descending), so equality, hashing and ordering all act on
/// the canonical part vector and a `Partition` can be used directly as a
/// cache key. The empty partition is the unique partition of 0.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition(Vec<usize>);
impl Partition {
    /// The unique partition of degree 0.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a partition from a weakly decreasing sequence of parts.
    /// Trailing zeros are permitted and stripped.
    ///
    /// # Errors
    ///
    /// If the sequence increases anywhere (which includes a zero followed
    /// by a positive part), an error is returned.
    pub fn new(
        parts: impl IntoIterator<Item = usize>,
    ) -> Result<Self, InvalidPartitionError> {
        let parts = parts.into_iter().collect::<Vec<_>>();
        if parts.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(InvalidPartitionError("parts must be weakly decreasing"));
        }
        Ok(Self(
            parts.into_iter().take_while(|&part| part > 0).collect(),
        ))
    }

    /// Build a partition from parts in any order, sorting descending and
    /// stripping zeros. Total; never fails.
    pub fn canonical(parts: impl IntoIterator<Item = usize>) -> Self {
        Self(
            parts
                .into_iter()
                .filter(|&part| part > 0)
                .sorted_unstable_by(|a, b| b.cmp(a))
                .collect(),
        )
    }

    /// The parts, largest first.
    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Sum of the parts; the `n` this is a partition of.
    pub fn degree(&self) -> usize {
        self.0.iter().sum()
    }

    /// Number of (positive) parts, i.e. rows of the Young diagram.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The partition left after dropping the first (largest) part; the
    /// empty partition maps to itself.
    pub(crate) fn rest(&self) -> Self {
        Self(self.0.iter().skip(1).copied().collect())
    }
}
impl Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
impl FromStr for Partition {
    type Err = InvalidPartitionError;

    /// Parse a comma- and/or whitespace-separated part list, e.g. `"3,1,1"`
    /// or `"3 1 1"`. An empty (or all-separator) string parses to the empty
    /// partition.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| InvalidPartitionError("parts must be non-negative integers"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_weakly_decreasing() {
        let partition = Partition::new([3, 1, 1]).unwrap();
        assert_eq!(partition.parts(), &[3, 1, 1]);
        assert_eq!(partition.degree(), 5);
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn new_strips_trailing_zeros() {
        let partition = Partition::new([2, 2, 0, 0]).unwrap();
        assert_eq!(partition.parts(), &[2, 2]);
    }

    #[test]
    fn new_rejects_increasing_parts() {
        assert!(Partition::new([1, 3]).is_err());
        assert!(Partition::new([2, 0, 1]).is_err());
    }

    #[test]
    fn empty_partition_has_degree_zero() {
        let partition = Partition::new([]).unwrap();
        assert_eq!(partition, Partition::empty());
        assert_eq!(partition.degree(), 0);
        assert!(partition.is_empty());
    }

    #[test]
    fn canonical_sorts_and_strips() {
        assert_eq!(
            Partition::canonical([1, 0, 3, 1]),
            Partition::new([3, 1, 1]).unwrap()
        );
    }

    #[test]
    fn rest_drops_largest_part() {
        let mu = Partition::new([4, 2, 1]).unwrap();
        assert_eq!(mu.rest(), Partition::new([2, 1]).unwrap());
        assert_eq!(Partition::empty().rest(), Partition::empty());
    }

    #[test]
    fn parses_and_displays() {
        let partition: Partition = "3, 1 1".parse().unwrap();
        assert_eq!(partition, Partition::new([3, 1, 1]).unwrap());
        assert_eq!(partition.to_string(), "(3, 1, 1)");
        assert_eq!("".parse::<Partition>().unwrap(), Partition::empty());
        assert!("2,x".parse::<Partition>().is_err());
        assert!("1 2".parse::<Partition>().is_err());
    }
}
