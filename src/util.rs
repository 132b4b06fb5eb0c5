use itertools::Itertools;

use crate::internal_util::factorial;
use crate::Partition;

/// Order of the symmetric group S_n, i.e. n!
pub fn group_order(n: usize) -> u64 {
    factorial(n)
}

/// Order of the centraliser of any permutation with cycle type `mu`:
/// z_mu = prod over distinct part sizes k of k^(m_k) * (m_k)!, where m_k is
/// the multiplicity of k in `mu`.
pub fn centralizer_order(mu: &Partition) -> u64 {
    mu.parts()
        .iter()
        .counts()
        .into_iter()
        .map(|(&part, multiplicity)| {
            (part as u64).pow(multiplicity as u32) * factorial(multiplicity)
        })
        .product()
}

/// Number of permutations in S_n with cycle type `mu` (the size of the
/// conjugacy class indexed by `mu`), n!/z_mu.
///
/// These are the weights in the standard inner product on class functions,
/// under which distinct rows of the character table are orthogonal.
pub fn class_size(mu: &Partition) -> u64 {
    group_order(mu.degree()) / centralizer_order(mu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(parts: &[usize]) -> Partition {
        Partition::new(parts.iter().copied()).unwrap()
    }

    #[test]
    fn centralizer_orders_in_s4() {
        assert_eq!(centralizer_order(&partition(&[4])), 4);
        assert_eq!(centralizer_order(&partition(&[3, 1])), 3);
        assert_eq!(centralizer_order(&partition(&[2, 2])), 8);
        assert_eq!(centralizer_order(&partition(&[2, 1, 1])), 4);
        assert_eq!(centralizer_order(&partition(&[1, 1, 1, 1])), 24);
    }

    #[test]
    fn class_sizes_partition_the_group() {
        // 6 four-cycles + 8 three-cycles + 3 double transpositions
        // + 6 transpositions + the identity = |S_4|
        let sizes = [
            class_size(&partition(&[4])),
            class_size(&partition(&[3, 1])),
            class_size(&partition(&[2, 2])),
            class_size(&partition(&[2, 1, 1])),
            class_size(&partition(&[1, 1, 1, 1])),
        ];
        assert_eq!(sizes, [6, 8, 3, 6, 1]);
        assert_eq!(sizes.iter().sum::<u64>(), group_order(4));
    }

    #[test]
    fn identity_class_is_a_singleton() {
        let identity = partition(&[1, 1, 1, 1, 1]);
        assert_eq!(centralizer_order(&identity), group_order(5));
        assert_eq!(class_size(&identity), 1);
    }
}
