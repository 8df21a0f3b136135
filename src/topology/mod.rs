//! Network topology module.
//!
//! This module contains the builders that populate a [`Network`] with the
//! nodes and channels of a ring, torus or star.

pub mod types;
pub mod ring;
pub mod torus;
pub mod star;

use log::debug;

use crate::network::{Address, Network};

// Re-export key types for easier access
pub use types::{Shape, StarRadii, TopologyError, MIN_RADIX};
pub use ring::Ring;
pub use torus::Torus;
pub use star::Star;

/// A graph shape that knows how to build itself
pub trait Topology {
    type Address: Address;
    type Params;

    /// Builds a fresh network from the shape parameters
    fn build(params: Self::Params) -> Result<Network<Self::Address>, TopologyError>;
}

fn check_radix(shape: &'static str, radix: usize) -> Result<(), TopologyError> {
    if radix < MIN_RADIX {
        return Err(TopologyError::RadixTooSmall { shape, radix });
    }
    Ok(())
}

fn log_built<A: Address>(network: &Network<A>) {
    debug!(
        "Built {} topology {:?}: {} nodes, {} channels",
        network.shape().name(),
        network.shape(),
        network.len(),
        network.channels().len()
    );
}
