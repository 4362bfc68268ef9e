//! Fixed-size populations and truncation selection.
//!
//! A [`Generation`] is replaced wholesale by [`Generation::select_next`]: the
//! agents are ranked by score, the best `floor(len * cull) + 1` form the breeding
//! pool, and every slot of the next generation is filled with a child of two
//! distinct pool members.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::agent::{self, Agent};

/// Cull fraction used when the requested one is outside `(0, 1)`.
pub const DEFAULT_CULL_FRACTION: f64 = 0.5;

/// Smallest population that can produce children from two distinct parents.
pub const MIN_GENERATION_SIZE: usize = 2;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GenerationError {
    #[display("generation needs at least {MIN_GENERATION_SIZE} agents, got {count}")]
    TooFewAgents { count: usize },
}

/// An ordered population of agents.
///
/// Serialized as a plain JSON array of agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Agent>", into = "Vec<Agent>")]
pub struct Generation {
    agents: Vec<Agent>,
}

impl TryFrom<Vec<Agent>> for Generation {
    type Error = GenerationError;

    fn try_from(agents: Vec<Agent>) -> Result<Self, Self::Error> {
        Self::from_agents(agents)
    }
}

impl From<Generation> for Vec<Agent> {
    fn from(generation: Generation) -> Self {
        generation.agents
    }
}

impl Generation {
    pub fn from_agents(agents: Vec<Agent>) -> Result<Self, GenerationError> {
        if agents.len() < MIN_GENERATION_SIZE {
            return Err(GenerationError::TooFewAgents {
                count: agents.len(),
            });
        }
        Ok(Self { agents })
    }

    /// Creates `count` random agents.
    pub fn random<R>(count: usize, rng: &mut R) -> Result<Self, GenerationError>
    where
        R: Rng + ?Sized,
    {
        Self::from_agents((0..count).map(|_| Agent::random(rng)).collect())
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Records the score of the agent at `index`.
    pub fn set_score(&mut self, index: usize, score: i32) {
        self.agents[index].set_score(score);
    }

    /// Sorts agents by score, best first. Ties keep their relative order.
    pub fn sort_by_score(&mut self) {
        self.agents.sort_by(|a, b| b.score().cmp(&a.score()));
    }

    /// Ranks this generation and breeds its replacement.
    ///
    /// `cull_fraction` outside `(0, 1)` falls back to
    /// [`DEFAULT_CULL_FRACTION`]. The returned generation has the same size.
    pub fn select_next<R>(&mut self, cull_fraction: f64, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        self.sort_by_score();
        let pool_size = breeding_pool_size(self.len(), cull_fraction);
        let pool = &self.agents[..pool_size];
        let agents = (0..self.len())
            .map(|_| {
                let (a, b) = sample_parent_pair(pool_size, rng);
                agent::breed(&pool[a], &pool[b], rng)
            })
            .collect();
        Self { agents }
    }
}

/// Number of top-ranked agents eligible as parents.
///
/// `floor(len * cull_fraction) + 1`, kept within `[2, len]` so that two
/// distinct parents always exist.
#[must_use]
pub fn breeding_pool_size(len: usize, cull_fraction: f64) -> usize {
    let cull_fraction = if cull_fraction > 0.0 && cull_fraction < 1.0 {
        cull_fraction
    } else {
        log::warn!(
            "cull fraction {cull_fraction} outside (0, 1), using {DEFAULT_CULL_FRACTION}"
        );
        DEFAULT_CULL_FRACTION
    };
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let kept = (len as f64 * cull_fraction).floor() as usize + 1;
    kept.max(MIN_GENERATION_SIZE).min(len)
}

/// Draws two distinct indices from `0..pool_size`.
///
/// The second index is resampled until it differs from the first.
///
/// # Panics
///
/// Panics if `pool_size < 2`.
pub fn sample_parent_pair<R>(pool_size: usize, rng: &mut R) -> (usize, usize)
where
    R: Rng + ?Sized,
{
    assert!(pool_size >= MIN_GENERATION_SIZE);
    let a = rng.random_range(0..pool_size);
    let mut b = rng.random_range(0..pool_size);
    while a == b {
        b = rng.random_range(0..pool_size);
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use pong_policy::GENE_COUNT;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn scored_generation(scores: &[i32]) -> Generation {
        #[expect(clippy::cast_precision_loss)]
        let agents = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut agent = Agent::new([i as f64; GENE_COUNT]);
                agent.set_score(score);
                agent
            })
            .collect();
        Generation::from_agents(agents).unwrap()
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(breeding_pool_size(10, 0.3), 4);
        assert_eq!(breeding_pool_size(10, 0.5), 6);
        assert_eq!(breeding_pool_size(10, 0.99), 10);
        assert_eq!(breeding_pool_size(3, 0.1), 2);
    }

    #[test]
    fn test_out_of_range_cull_falls_back() {
        for cull in [0.0, -0.2, 1.0, 3.0, f64::NAN] {
            assert_eq!(breeding_pool_size(10, cull), 6, "cull={cull}");
        }
    }

    #[test]
    fn test_parent_pair_is_always_distinct() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        for pool_size in 2..8 {
            for _ in 0..2000 {
                let (a, b) = sample_parent_pair(pool_size, &mut rng);
                assert_ne!(a, b);
                assert!(a < pool_size && b < pool_size);
            }
        }
    }

    #[test]
    fn test_sort_by_score_descending() {
        let mut generation = scored_generation(&[3, -7, 12, Agent::UNSCORED, 0]);
        generation.sort_by_score();
        let scores: Vec<_> = generation.agents().iter().map(Agent::score).collect();
        assert_eq!(scores, vec![12, 3, 0, -7, Agent::UNSCORED]);
    }

    #[test]
    fn test_select_next_keeps_cardinality() {
        let mut rng = Pcg64Mcg::seed_from_u64(6);
        for size in [2, 3, 10, 25] {
            let mut generation = Generation::random(size, &mut rng).unwrap();
            for cull in [0.3, 0.5, 0.0, 1.5] {
                let next = generation.select_next(cull, &mut rng);
                assert_eq!(next.len(), size);
                assert!(next.agents().iter().all(|a| !a.is_scored()));
            }
        }
    }

    #[test]
    fn test_children_only_inherit_from_pool() {
        // Agents 0..=3 are the best four; with cull 0.3 the pool is exactly them.
        let generation = scored_generation(&[90, 80, 70, 60, 5, 4, 3, 2, 1, 0]);
        let mut rng = Pcg64Mcg::seed_from_u64(8);
        for _ in 0..50 {
            let next = generation.clone().select_next(0.3, &mut rng);
            for child in next.agents() {
                for g in child.genes() {
                    // Genes 4..=9 only exist outside the pool.
                    assert!(!(4..=9).any(|v| f64::from(v) == *g), "gene={g}");
                }
            }
        }
    }

    #[test]
    fn test_too_small_generation_is_rejected() {
        let err = Generation::from_agents(vec![Agent::new([0.0; GENE_COUNT])]).unwrap_err();
        assert!(matches!(err, GenerationError::TooFewAgents { count: 1 }));
        assert!(serde_json::from_str::<Generation>("[]").is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let generation = scored_generation(&[4, Agent::UNSCORED, -3, 17]);
        let json = serde_json::to_string(&generation).unwrap();
        assert!(json.starts_with('['));
        let loaded: Generation = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, generation);
    }
}
