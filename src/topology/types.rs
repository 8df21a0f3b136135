//! Topology type definitions.
//!
//! This file contains the shapes supported by the system (Ring, Torus, Star)
//! and the errors raised while building them.

use serde::{Deserialize, Serialize};

use crate::network::NetworkError;

/// Smallest radix a ring or torus can be built with
pub const MIN_RADIX: usize = 3;

/// Shape and size parameters recorded by a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Cycle of `radix` nodes
    Ring { radix: usize },
    /// `radix x radix` grid wrapping on both axes
    Torus { radix: usize },
    /// Fully connected hubs plus leaves attached to every hub
    Star { central: usize, outer: usize },
}

impl Shape {
    /// Total number of nodes a network of this shape holds
    pub fn node_count(&self) -> usize {
        match *self {
            Shape::Ring { radix } => radix,
            Shape::Torus { radix } => radix * radix,
            Shape::Star { central, outer } => central + outer,
        }
    }

    /// Total number of undirected channels
    pub fn channel_count(&self) -> usize {
        match *self {
            Shape::Ring { radix } => radix,
            Shape::Torus { radix } => 2 * radix * radix,
            Shape::Star { central, outer } => central * central.saturating_sub(1) / 2 + central * outer,
        }
    }

    /// Returns a short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Ring { .. } => "ring",
            Shape::Torus { .. } => "torus",
            Shape::Star { .. } => "star",
        }
    }
}

/// Central and outer node counts of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRadii {
    pub central: usize,
    pub outer: usize,
}

impl StarRadii {
    pub const fn new(central: usize, outer: usize) -> Self {
        Self { central, outer }
    }
}

/// Errors that can occur while building a topology
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("{shape} radix must be at least {}, got {radix}", MIN_RADIX)]
    RadixTooSmall { shape: &'static str, radix: usize },

    #[error("Star needs at least one {tier} node")]
    EmptyStarTier { tier: &'static str },

    #[error(transparent)]
    Network(#[from] NetworkError),
}
