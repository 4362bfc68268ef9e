use std::fmt;

use pong_policy::{GENE_COUNT, Genes};

use crate::generation::Generation;

/// Score and gene statistics of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Zero-based index of the generation.
    pub generation: usize,
    pub best: i32,
    pub worst: i32,
    pub mean: f64,
    /// Upper median of the scores.
    pub median: i32,
    /// Mean of each gene across the generation.
    pub gene_mean: Genes,
    /// Genes of the best-scoring agent.
    pub best_genes: Genes,
}

impl GenerationSummary {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(generation_index: usize, generation: &Generation) -> Self {
        let agents = generation.agents();
        let mut scores: Vec<i32> = agents.iter().map(|a| a.score()).collect();
        scores.sort_unstable();

        let n = agents.len() as f64;
        let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;

        let mut gene_mean = [0.0; GENE_COUNT];
        for agent in agents {
            for (sum, g) in gene_mean.iter_mut().zip(agent.genes()) {
                *sum += g;
            }
        }
        for sum in &mut gene_mean {
            *sum /= n;
        }

        let best_agent = agents
            .iter()
            .max_by_key(|a| a.score())
            .expect("generation is never empty");

        Self {
            generation: generation_index,
            best: scores[scores.len() - 1],
            worst: scores[0],
            mean,
            median: scores[scores.len() / 2],
            gene_mean,
            best_genes: *best_agent.genes(),
        }
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation #{}: best {} / median {} / mean {:.2} / worst {}",
            self.generation + 1,
            self.best,
            self.median,
            self.mean,
            self.worst
        )
    }
}
