//! Star router.

use rand::{Rng, RngCore};

use super::{check_addresses, check_recorded_shape, Router, RoutingError};
use crate::network::{Network, Packet};
use crate::topology::{Shape, Star, StarRadii, Topology, TopologyError};

/// Shortest-path routing on a star.
///
/// Hubs reach every node and every node reaches every hub, so a packet whose
/// source or destination is a hub goes straight to its destination. A packet
/// between two outer nodes is relayed through a hub picked uniformly at random
/// on each call; the pick is not remembered and no load balancing is attempted.
#[derive(Debug, Clone)]
pub struct ShortestPathStar {
    network: Network<usize>,
    central: usize,
}

impl ShortestPathStar {
    pub fn new(radii: StarRadii) -> Result<Self, TopologyError> {
        let network = Star::build(radii)?;
        Ok(Self {
            network,
            central: radii.central,
        })
    }

    pub fn from_network(network: Network<usize>) -> Result<Self, RoutingError> {
        match network.shape() {
            Shape::Star { central, .. } => {
                check_recorded_shape("ShortestPathStar", &network)?;
                Ok(Self { network, central })
            }
            found => Err(RoutingError::ShapeMismatch {
                router: "ShortestPathStar",
                found,
            }),
        }
    }

    /// Number of hub nodes
    pub fn get_central_count(&self) -> usize {
        self.central
    }

    pub fn is_central(&self, address: usize) -> bool {
        address < self.central
    }
}

impl Router for ShortestPathStar {
    type Address = usize;

    fn name(&self) -> &'static str {
        "ShortestPathStar"
    }

    fn network(&self) -> &Network<usize> {
        &self.network
    }

    fn next_hop(
        &self,
        current: usize,
        packet: &Packet<usize>,
        rng: &mut dyn RngCore,
    ) -> Result<Option<usize>, RoutingError> {
        check_addresses(&self.network, current, packet)?;
        let dest = packet.destination;
        if current == dest {
            return Ok(None);
        }

        // a hub holding an outer-to-outer packet is the relay; it reaches dest directly
        if self.is_central(packet.source) || self.is_central(dest) || self.is_central(current) {
            return Ok(Some(dest));
        }
        Ok(Some(rng.gen_range(0..self.central)))
    }
}
