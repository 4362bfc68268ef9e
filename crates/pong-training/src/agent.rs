//! Agents and the breeding operator.
//!
//! An [`Agent`] is one candidate policy: eight genes and the score it earned on
//! its last turn. New agents come either from [`Agent::random`] (initial
//! population) or from [`breed`] (every later generation).
//!
//! # Breeding
//!
//! Each child gene is drawn independently from one of four sources:
//!
//! | source | probability | value |
//! |--------|-------------|-------|
//! | parent A | 30% | `a[i]` |
//! | parent B | 30% | `b[i]` |
//! | blend | 20% | `(a[i] + b[i]) / 2` |
//! | mutation | 20% | `N(0, 50)` |

use pong_policy::{GENE_COUNT, Genes};
use rand::Rng;
use rand_distr::{Distribution as _, Normal};
use serde::{Deserialize, Serialize};

/// Standard deviation of genes in a freshly created agent.
pub const INITIAL_GENE_STD_DEV: f64 = 15.0;

/// Standard deviation of a mutated gene.
pub const MUTATION_STD_DEV: f64 = 50.0;

/// A candidate policy and its last recorded score.
///
/// The JSON form is `{"genes": [..8 numbers..], "score": <int>}`. The
/// capitalised keys `Genes` and `Score` are accepted when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(alias = "Genes")]
    genes: Genes,
    #[serde(alias = "Score")]
    score: i32,
}

impl Agent {
    /// Score of an agent that has not played yet.
    ///
    /// Lower than any score a real turn can produce, so unplayed agents sort
    /// last and are never picked as parents ahead of played ones.
    pub const UNSCORED: i32 = -i32::MAX;

    #[must_use]
    pub const fn new(genes: Genes) -> Self {
        Self {
            genes,
            score: Self::UNSCORED,
        }
    }

    /// Creates an agent with genes drawn from `N(0, 15)`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let normal = Normal::new(0.0, INITIAL_GENE_STD_DEV).unwrap();
        Self::new(std::array::from_fn(|_| normal.sample(rng)))
    }

    #[must_use]
    pub const fn genes(&self) -> &Genes {
        &self.genes
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.score != Self::UNSCORED
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = score;
    }
}

/// Where a child's gene comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GeneSource {
    ParentA,
    ParentB,
    Blend,
    Mutation,
}

impl GeneSource {
    /// Draws a source with probabilities 30/30/20/20.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..10) {
            0..3 => Self::ParentA,
            3..6 => Self::ParentB,
            6..8 => Self::Blend,
            _ => Self::Mutation,
        }
    }
}

/// Creates a child from two parents, choosing each gene independently.
pub fn breed<R>(a: &Agent, b: &Agent, rng: &mut R) -> Agent
where
    R: Rng + ?Sized,
{
    let mutation = Normal::new(0.0, MUTATION_STD_DEV).unwrap();
    let mut genes = [0.0; GENE_COUNT];
    for (i, gene) in genes.iter_mut().enumerate() {
        *gene = match GeneSource::sample(rng) {
            GeneSource::ParentA => a.genes[i],
            GeneSource::ParentB => b.genes[i],
            GeneSource::Blend => (a.genes[i] + b.genes[i]) / 2.0,
            GeneSource::Mutation => mutation.sample(rng),
        };
    }
    Agent::new(genes)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_random_agent_is_unscored() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let agent = Agent::random(&mut rng);
        assert_eq!(agent.score(), Agent::UNSCORED);
        assert!(!agent.is_scored());
        assert!(agent.genes().iter().all(|g| g.is_finite()));
    }

    #[test]
    fn test_random_genes_spread() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let genes: Vec<f64> = (0..2000)
            .flat_map(|_| *Agent::random(&mut rng).genes())
            .collect();
        #[expect(clippy::cast_precision_loss)]
        let n = genes.len() as f64;
        let mean = genes.iter().sum::<f64>() / n;
        let std_dev = (genes.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 1.0, "mean={mean}");
        assert!((std_dev - INITIAL_GENE_STD_DEV).abs() < 1.0, "std_dev={std_dev}");
    }

    #[test]
    fn test_breed_gene_sources_follow_mixture() {
        const TRIALS: usize = 20_000;
        let a = Agent::new([1000.0; GENE_COUNT]);
        let b = Agent::new([-1000.0; GENE_COUNT]);
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        let mut counts = [[0_usize; 4]; GENE_COUNT];
        let mut mutated = vec![];
        for _ in 0..TRIALS {
            let child = breed(&a, &b, &mut rng);
            assert_eq!(child.score(), Agent::UNSCORED);
            for (i, &g) in child.genes().iter().enumerate() {
                let slot = if g == 1000.0 {
                    0
                } else if g == -1000.0 {
                    1
                } else if g == 0.0 {
                    2
                } else {
                    mutated.push(g);
                    3
                };
                counts[i][slot] += 1;
            }
        }

        let expected = [0.3, 0.3, 0.2, 0.2];
        for gene_counts in counts {
            for (count, p) in gene_counts.into_iter().zip(expected) {
                #[expect(clippy::cast_precision_loss)]
                let freq = count as f64 / TRIALS as f64;
                assert!((freq - p).abs() < 0.015, "freq={freq} expected={p}");
            }
        }

        #[expect(clippy::cast_precision_loss)]
        let n = mutated.len() as f64;
        let mean = mutated.iter().sum::<f64>() / n;
        let std_dev = (mutated.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 2.0, "mean={mean}");
        assert!((std_dev - MUTATION_STD_DEV).abs() < 2.0, "std_dev={std_dev}");
    }

    #[test]
    fn test_breed_genes_are_chosen_independently() {
        let a = Agent::new([1.0; GENE_COUNT]);
        let b = Agent::new([2.0; GENE_COUNT]);
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let mixed = (0..200)
            .map(|_| breed(&a, &b, &mut rng))
            .filter(|c| c.genes().contains(&1.0) && c.genes().contains(&2.0))
            .count();
        assert!(mixed > 100);
    }

    #[test]
    fn test_json_keys() {
        let agent = Agent {
            genes: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.5],
            score: -12,
        };
        let json = serde_json::to_string(&agent).unwrap();
        assert_eq!(
            json,
            r#"{"genes":[1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.5],"score":-12}"#
        );

        let legacy = r#"{"Genes":[1,2,3,4,5,6,7,8.5],"Score":-12}"#;
        let loaded: Agent = serde_json::from_str(legacy).unwrap();
        assert_eq!(loaded, agent);
    }

    #[test]
    fn test_wrong_gene_count_is_rejected() {
        let short = r#"{"genes":[1,2,3],"score":0}"#;
        assert!(serde_json::from_str::<Agent>(short).is_err());
    }
}
