use crate::cards::Rank;

/// Ranks of a hand bucketed by multiplicity, biggest bucket first and higher rank first
/// within a bucket. `9 9 9 K 2` becomes `[(9, 3), (K, 1), (2, 1)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(ranks.len());
        for &rank in ranks {
            match groups.iter_mut().find(|(r, _)| *r == rank) {
                Some((_, count)) => *count += 1,
                None => groups.push((rank, 1)),
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn of_size(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |&&(_, count)| count == n).map(|&(rank, _)| rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.of_size(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.of_size(3).next()
    }

    /// Pair ranks, high to low.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_size(2).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
