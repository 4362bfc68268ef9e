use serde::{Deserialize, Serialize};

/// A 2D vector of `f64` components.
///
/// Used both for positions and velocities. Supports component-wise `+`/`-` and
/// scalar `*`.
///
/// ```
/// use pong_engine::Vec2;
///
/// let p = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0) * 0.5;
/// assert_eq!(p, Vec2::new(2.5, 4.0));
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Mul,
)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Width and height of a body's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn half_width(self) -> f64 {
        self.width / 2.0
    }

    #[must_use]
    pub fn half_height(self) -> f64 {
        self.height / 2.0
    }
}

/// Axis-aligned rectangle given by its minimum and maximum corners.
///
/// The playable area of the arena is a `Bounds`, and so are the hit boxes of the
/// ball and the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Box spanning `center ± extent / 2`.
    #[must_use]
    pub fn around(center: Vec2, extent: Extent) -> Self {
        let half = Vec2::new(extent.half_width(), extent.half_height());
        Self::new(center - half, center + half)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns `true` if the two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.max.x <= self.min.x
            || other.min.x >= self.max.x
            || other.max.y <= self.min.y
            || other.min.y >= self.max.y)
    }
}
