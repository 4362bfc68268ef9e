use rand::Rng;
use rand_distr::{Distribution as _, Normal};

use crate::core::Vec2;

/// Ball velocity before the first reset of a run.
pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(25.0, 80.0);

/// Mean speed of each serve component.
pub const SERVE_SPEED_MEAN: f64 = 60.0;

/// Standard deviation of each serve component.
pub const SERVE_SPEED_STD_DEV: f64 = 25.0;

/// Minimum magnitude of the vertical serve component.
pub const MIN_VERTICAL_SERVE_SPEED: f64 = 30.0;

/// Draws a fresh ball velocity for the start of a turn.
///
/// Both components are sampled from `N(60, 25)`. The vertical component is
/// resampled until its magnitude reaches [`MIN_VERTICAL_SERVE_SPEED`], so the
/// ball never crawls sideways. Each component then gets a random sign.
pub fn random_serve_velocity<R>(rng: &mut R) -> Vec2
where
    R: Rng + ?Sized,
{
    let normal = Normal::new(SERVE_SPEED_MEAN, SERVE_SPEED_STD_DEV).unwrap();
    let mut vx = normal.sample(rng);
    let mut vy = normal.sample(rng);
    while vy.abs() < MIN_VERTICAL_SERVE_SPEED {
        vy = normal.sample(rng);
    }
    if rng.random_bool(0.5) {
        vx = -vx;
    }
    if rng.random_bool(0.5) {
        vy = -vy;
    }
    Vec2::new(vx, vy)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_vertical_component_respects_floor() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..5000 {
            let v = random_serve_velocity(&mut rng);
            assert!(v.y.abs() >= MIN_VERTICAL_SERVE_SPEED);
            assert!(v.x.is_finite());
        }
    }

    #[test]
    fn test_both_directions_are_served() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let serves: Vec<_> = (0..500).map(|_| random_serve_velocity(&mut rng)).collect();
        assert!(serves.iter().any(|v| v.y > 0.0));
        assert!(serves.iter().any(|v| v.y < 0.0));
        assert!(serves.iter().any(|v| v.x > 0.0));
        assert!(serves.iter().any(|v| v.x < 0.0));
    }
}
