//! Ring topology builder.

use super::{check_radix, log_built, Shape, Topology, TopologyError};
use crate::network::Network;

/// Cycle of `radix` nodes addressed `0..radix`
#[derive(Debug, Clone, Copy)]
pub struct Ring;

impl Topology for Ring {
    type Address = usize;
    type Params = usize;

    /// Node `i` links back to `i - 1`; the last node also closes the cycle to `0`.
    fn build(radix: usize) -> Result<Network<usize>, TopologyError> {
        check_radix("ring", radix)?;

        let mut network = Network::new(Shape::Ring { radix });
        for i in 0..radix {
            network.add_node(i)?;
            if i > 0 {
                network.add_channel(i, i - 1)?;
            }
            if i == radix - 1 {
                network.add_channel(0, radix - 1)?;
            }
        }

        log_built(&network);
        Ok(network)
    }
}
