use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use rand::seq::index;
use thiserror::Error;

use crate::data::model::NameTable;

// ---------------------------------------------------------------------------
// Candidate pool
// ---------------------------------------------------------------------------

/// Distinct names of one column, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    /// Collapse repeated values so nobody can win twice in one draw.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = values
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        CandidatePool { names }
    }

    /// Pool for `column` of `table`, missing cells dropped.
    pub fn from_column(table: &NameTable, column: &str) -> Option<Self> {
        table.present_values(column).map(Self::new)
    }

    /// Names still eligible for a draw.
    pub fn eligible<'a>(&'a self, exclusions: &ExclusionSet, exclude: bool) -> Vec<&'a str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !exclude || !exclusions.contains(name))
            .collect()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Exclusion set
// ---------------------------------------------------------------------------

/// Everyone who has won in this session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Draw
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("at least one name must be drawn")]
    NothingRequested,
    #[error("only {available} names are available after excluding previous winners, {requested} requested")]
    Shortfall { requested: usize, available: usize },
}

/// Pick `count` distinct winners uniformly from `pool`.
///
/// With `exclude` set, names already in `exclusions` are removed first. The
/// count is checked against the pool left after that filtering. Winners are
/// returned in the order they were drawn and added to `exclusions`; on error
/// `exclusions` is left as it was.
pub fn draw<R: Rng + ?Sized>(
    pool: &CandidatePool,
    count: usize,
    exclusions: &mut ExclusionSet,
    exclude: bool,
    rng: &mut R,
) -> Result<Vec<String>, DrawError> {
    if count == 0 {
        return Err(DrawError::NothingRequested);
    }
    let eligible = pool.eligible(exclusions, exclude);
    if eligible.len() < count {
        return Err(DrawError::Shortfall {
            requested: count,
            available: eligible.len(),
        });
    }

    let winners: Vec<String> = index::sample(rng, eligible.len(), count)
        .into_iter()
        .map(|i| eligible[i].to_string())
        .collect();

    for name in &winners {
        exclusions.insert(name.clone());
    }
    Ok(winners)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pool() -> CandidatePool {
        CandidatePool::new(["Ana", "Beto", "Caro", "Dana"])
    }

    #[test]
    fn draws_distinct_names_and_records_them() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut exclusions = ExclusionSet::default();

        let winners = draw(&pool(), 2, &mut exclusions, false, &mut rng).expect("draw");

        assert_eq!(winners.len(), 2);
        assert_ne!(winners[0], winners[1]);
        for w in &winners {
            assert!(pool().names().contains(w));
            assert!(exclusions.contains(w));
        }
        assert_eq!(exclusions.len(), 2);
    }

    #[test]
    fn excluded_pool_is_rechecked_after_filtering() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut exclusions = ExclusionSet::default();
        draw(&pool(), 2, &mut exclusions, false, &mut rng).expect("first draw");

        let before = exclusions.clone();
        let err = draw(&pool(), 3, &mut exclusions, true, &mut rng).expect_err("shortfall");
        assert_eq!(
            err,
            DrawError::Shortfall {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(exclusions, before);
    }

    #[test]
    fn excluded_names_never_win_again() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut exclusions = ExclusionSet::default();
        let first = draw(&pool(), 2, &mut exclusions, false, &mut rng).expect("first");
        let second = draw(&pool(), 2, &mut exclusions, true, &mut rng).expect("second");

        assert!(second.iter().all(|w| !first.contains(w)));
        assert_eq!(exclusions.len(), 4);
        assert!(pool().eligible(&exclusions, true).is_empty());
    }

    #[test]
    fn without_exclusion_previous_winners_stay_eligible() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut exclusions = ExclusionSet::default();
        draw(&pool(), 4, &mut exclusions, false, &mut rng).expect("first");

        let again = draw(&pool(), 4, &mut exclusions, false, &mut rng).expect("second");
        assert_eq!(again.len(), 4);
    }

    #[test]
    fn repeated_values_collapse() {
        let pool = CandidatePool::new(["Ana", "Ana", "Beto", "Ana"]);
        assert_eq!(pool.names(), ["Ana".to_string(), "Beto".to_string()]);

        let mut rng = StdRng::seed_from_u64(1);
        let mut exclusions = ExclusionSet::default();
        let winners = draw(&pool, 2, &mut exclusions, false, &mut rng).expect("draw");
        assert_ne!(winners[0], winners[1]);
        assert!(draw(&pool, 3, &mut exclusions, false, &mut rng).is_err());
    }

    #[test]
    fn zero_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut exclusions = ExclusionSet::default();
        assert_eq!(
            draw(&pool(), 0, &mut exclusions, false, &mut rng),
            Err(DrawError::NothingRequested)
        );
    }

    #[test]
    fn every_name_eventually_wins_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            let mut exclusions = ExclusionSet::default();
            let winners = draw(&pool(), 1, &mut exclusions, false, &mut rng).expect("draw");
            seen.extend(winners);
        }
        assert_eq!(seen.len(), 4);
    }
}
