//! Linear paddle controller.
//!
//! A policy maps what the paddle can see of the arena to a horizontal paddle
//! command. The mapping is deliberately small: eight normalized features, one
//! weight (gene) per feature, and a squashing function.
//!
//! ```text
//! Arena ──▶ Observation (8 features) ──·── Genes (8 weights)
//!                                      │
//!                                      ▼
//!                         MAX_PADDLE_SPEED · sigmoid(Σ)
//!                                      │
//!                                      ▼
//!                              paddle command (−10, 10)
//! ```
//!
//! # Example
//!
//! ```
//! use pong_engine::{Arena, Bounds};
//! use pong_policy::{Observation, paddle_velocity_command};
//!
//! let arena = Arena::new(Bounds::from_size(1024.0, 1024.0));
//! let observation = Observation::from_arena(&arena);
//! let command = paddle_velocity_command(&observation, &[0.0; 8]);
//! assert_eq!(command, 0.0);
//! ```

pub use self::{controller::*, observation::*};

mod controller;
mod observation;

/// Number of features in an observation, and of genes in a policy.
pub const GENE_COUNT: usize = 8;

/// Weights of a linear policy, one per observation feature.
pub type Genes = [f64; GENE_COUNT];
