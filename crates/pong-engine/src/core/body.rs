use super::{Bounds, Extent, Vec2};

/// The ball bouncing around the arena.
///
/// The ball is the only body that awards points: every tick the arena moves it
/// and reports which surface (if any) it hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    extent: Extent,
}

impl Ball {
    #[must_use]
    pub const fn new(position: Vec2, velocity: Vec2, extent: Extent) -> Self {
        Self {
            position,
            velocity,
            extent,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn hit_box(&self) -> Bounds {
        Bounds::around(self.position, self.extent)
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

/// The player-controlled paddle.
///
/// Only the horizontal axis matters for play. `velocity.x` holds the command
/// issued during the current tick and is cleared when the tick ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    position: Vec2,
    velocity: Vec2,
    extent: Extent,
}

impl Paddle {
    #[must_use]
    pub const fn new(position: Vec2, extent: Extent) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            extent,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn hit_box(&self) -> Bounds {
        Bounds::around(self.position, self.extent)
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
