use std::iter;

use crate::{Genes, Observation};

/// Scale applied to the squashed activation.
///
/// The sigmoid is shifted into `(-0.5, 0.5)`, so commands lie in `(-10, 10)`.
pub const MAX_PADDLE_SPEED: f64 = 20.0;

/// Logistic function shifted down by one half.
///
/// Equal to `e^x / (1 + e^x) - 0.5`, computed so that neither branch overflows
/// for large `|x|`.
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    let logistic = if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    };
    logistic - 0.5
}

/// Weighted sum of the observation features.
#[must_use]
pub fn activation(observation: &Observation, genes: &Genes) -> f64 {
    iter::zip(observation.features(), genes)
        .map(|(f, g)| f * g)
        .sum()
}

/// Horizontal paddle command for the given observation and genes.
///
/// The result is applied by the caller as a direct displacement of the paddle,
/// and also becomes the paddle's velocity for the current tick.
#[must_use]
pub fn paddle_velocity_command(observation: &Observation, genes: &Genes) -> f64 {
    MAX_PADDLE_SPEED * sigmoid(activation(observation, genes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GENE_COUNT;

    #[test]
    fn test_sigmoid_is_centered_and_bounded() {
        assert_eq!(sigmoid(0.0), 0.0);
        for x in [-1e6, -750.0, -20.0, -1.0, 1.0, 20.0, 750.0, 1e6] {
            let y = sigmoid(x);
            assert!(y.is_finite(), "x={x}");
            assert!((-0.5..=0.5).contains(&y), "x={x} y={y}");
        }
        assert!((sigmoid(1.0) + sigmoid(-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_matches_logistic_formula() {
        for x in [-5.0, -0.3, 0.7, 4.0_f64] {
            let expected = x.exp() / (1.0 + x.exp()) - 0.5;
            assert!((sigmoid(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_activation_is_dot_product() {
        let obs = Observation::from_features([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let genes = [1.0, -1.0, 0.5, 0.0, 2.0, 0.0, 0.0, -0.25];
        assert_eq!(activation(&obs, &genes), 1.0 - 2.0 + 1.5 + 10.0 - 2.0);
    }

    #[test]
    fn test_command_range_and_sign() {
        let obs = Observation::from_features([0.5; GENE_COUNT]);
        let push_right = paddle_velocity_command(&obs, &[10.0; GENE_COUNT]);
        let push_left = paddle_velocity_command(&obs, &[-10.0; GENE_COUNT]);
        assert!(push_right > 9.9 && push_right < 10.0 + 1e-12);
        assert!(push_left < -9.9 && push_left > -10.0 - 1e-12);
        assert_eq!(paddle_velocity_command(&obs, &[0.0; GENE_COUNT]), 0.0);
    }

    #[test]
    fn test_huge_genes_do_not_produce_nan() {
        let obs = Observation::from_features([1.0; GENE_COUNT]);
        let command = paddle_velocity_command(&obs, &[500.0; GENE_COUNT]);
        assert!((command - 10.0).abs() < 1e-9);
    }
}
