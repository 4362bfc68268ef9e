use crate::core::{Ball, Bounds, Extent, Paddle, Vec2};

use super::INITIAL_BALL_VELOCITY;

/// Time step used for every simulation tick.
pub const DEFAULT_TIME_STEP: f64 = 0.2;

/// Size of the ball's hit box.
pub const BALL_EXTENT: Extent = Extent::new(24.0, 24.0);

/// Size of the paddle's hit box.
pub const PADDLE_EXTENT: Extent = Extent::new(160.0, 24.0);

/// Paddle rest position relative to the arena center.
pub const PADDLE_OFFSET: Vec2 = Vec2::new(0.0, -400.0);

/// Surface the ball hit during a tick.
///
/// Only one event is reported per tick. When several surfaces are hit, the
/// last one checked wins (paddle, then side walls, then top/bottom walls), so a
/// tick with a paddle hit and a top or bottom bounce reports the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ArenaEvent {
    /// Nothing worth points happened.
    Quiet,
    /// The ball bounced off the paddle.
    PaddleHit,
    /// The ball bounced off the top wall.
    TopWall,
    /// The ball bounced off the bottom wall (behind the paddle).
    BottomWall,
}

impl ArenaEvent {
    /// Points awarded for this event.
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Quiet => 0,
            Self::PaddleHit => 1,
            Self::TopWall => 2,
            Self::BottomWall => -3,
        }
    }
}

/// Ball and paddle inside static bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    bounds: Bounds,
    ball: Ball,
    paddle: Paddle,
}

impl Arena {
    /// Creates an arena with the default body sizes.
    ///
    /// The ball starts at the center with [`INITIAL_BALL_VELOCITY`] and the
    /// paddle at its rest position.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        let center = bounds.center();
        Self {
            bounds,
            ball: Ball::new(center, INITIAL_BALL_VELOCITY, BALL_EXTENT),
            paddle: Paddle::new(center + PADDLE_OFFSET, PADDLE_EXTENT),
        }
    }

    /// Creates an arena from explicitly placed bodies.
    #[must_use]
    pub const fn with_bodies(bounds: Bounds, ball: Ball, paddle: Paddle) -> Self {
        Self {
            bounds,
            ball,
            paddle,
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub const fn ball(&self) -> &Ball {
        &self.ball
    }

    #[must_use]
    pub const fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Returns `true` if the ball and paddle hit boxes overlap.
    #[must_use]
    pub fn ball_touches_paddle(&self) -> bool {
        self.ball.hit_box().intersects(&self.paddle.hit_box())
    }

    /// Moves the paddle horizontally by `command` and records it as this
    /// tick's paddle velocity.
    ///
    /// The command is a displacement, not integrated over the time step.
    pub fn apply_paddle_command(&mut self, command: f64) {
        let mut position = self.paddle.position();
        position.x += command;
        self.paddle.set_position(position);
        self.paddle.set_velocity(Vec2::new(command, 0.0));
    }

    /// Advances the ball by one tick of length `dt`.
    ///
    /// The next position is projected before it is committed, and any wall
    /// bounce recomputes it from the flipped velocity, so the ball cannot
    /// tunnel through a wall. No clamping is applied.
    pub fn advance(&mut self, dt: f64) -> ArenaEvent {
        let mut event = ArenaEvent::Quiet;
        let mut velocity = self.ball.velocity();
        let position = self.ball.position();

        // Paddle contact reflects vertically and transfers the paddle's motion.
        if self.ball_touches_paddle() {
            velocity.y = -velocity.y;
            velocity.x += self.paddle.velocity().x;
            event = ArenaEvent::PaddleHit;
        }

        let half_width = self.ball.extent().half_width();
        let half_height = self.ball.extent().half_height();
        let min = self.bounds.min;
        let max = self.bounds.max;

        let mut x = position.x + velocity.x * dt;
        let mut y = position.y + velocity.y * dt;

        if x < min.x + half_width || x > max.x - half_width {
            velocity.x = -velocity.x;
            x = position.x + velocity.x * dt;
        }

        if y < min.y + half_height || y > max.y - half_height {
            event = if y > max.y - half_height {
                ArenaEvent::TopWall
            } else {
                ArenaEvent::BottomWall
            };
            velocity.y = -velocity.y;
            y = position.y + velocity.y * dt;
        }

        self.ball.set_velocity(velocity);
        self.ball.set_position(Vec2::new(x, y));
        event
    }

    /// Clears the paddle's per-tick velocity.
    pub fn end_tick(&mut self) {
        self.paddle.set_velocity(Vec2::ZERO);
    }

    /// Puts both bodies back at their start positions and serves the ball with
    /// `ball_velocity`.
    pub fn reset(&mut self, ball_velocity: Vec2) {
        let center = self.bounds.center();
        self.ball.set_position(center);
        self.ball.set_velocity(ball_velocity);
        self.paddle.set_position(center + PADDLE_OFFSET);
        self.paddle.set_velocity(Vec2::ZERO);
    }
}
