use pong_engine::Arena;

use crate::GENE_COUNT;

/// Features seen by the policy, in gene order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    BallX,
    BallY,
    BallVelocityX,
    BallVelocityY,
    PaddleX,
    PaddleY,
    BallPaddleDistance,
    PaddleRightGap,
}

impl Feature {
    pub const ALL: [Self; GENE_COUNT] = [
        Self::BallX,
        Self::BallY,
        Self::BallVelocityX,
        Self::BallVelocityY,
        Self::PaddleX,
        Self::PaddleY,
        Self::BallPaddleDistance,
        Self::PaddleRightGap,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BallX => "ball_x",
            Self::BallY => "ball_y",
            Self::BallVelocityX => "ball_vx",
            Self::BallVelocityY => "ball_vy",
            Self::PaddleX => "paddle_x",
            Self::PaddleY => "paddle_y",
            Self::BallPaddleDistance => "ball_paddle_distance",
            Self::PaddleRightGap => "paddle_right_gap",
        }
    }
}

/// Normalized snapshot of the arena, as seen by the policy.
///
/// Horizontal quantities are divided by the arena width and vertical ones by
/// its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    features: [f64; GENE_COUNT],
}

impl Observation {
    #[must_use]
    pub const fn from_features(features: [f64; GENE_COUNT]) -> Self {
        Self { features }
    }

    #[must_use]
    pub fn from_arena(arena: &Arena) -> Self {
        let width = arena.bounds().width();
        let height = arena.bounds().height();
        let ball = arena.ball();
        let paddle = arena.paddle();

        let ball_x = ball.position().x / width;
        let ball_y = ball.position().y / height;
        let paddle_x = paddle.position().x / width;
        let paddle_y = paddle.position().y / height;

        Self::from_features([
            ball_x,
            ball_y,
            ball.velocity().x / width,
            ball.velocity().y / height,
            paddle_x,
            paddle_y,
            (ball_x - paddle_x).hypot(ball_y - paddle_y),
            1.0 - paddle_x,
        ])
    }

    #[must_use]
    pub const fn features(&self) -> &[f64; GENE_COUNT] {
        &self.features
    }

    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.features[feature as usize]
    }
}
