//! Ring routers.

use rand::RngCore;

use super::{check_addresses, check_recorded_shape, Router, RoutingError};
use crate::network::{Network, Packet};
use crate::topology::{Ring, Shape, Topology, TopologyError};

fn ring_radix(router: &'static str, network: &Network<usize>) -> Result<usize, RoutingError> {
    match network.shape() {
        Shape::Ring { radix } => {
            check_recorded_shape(router, network)?;
            Ok(radix)
        }
        found => Err(RoutingError::ShapeMismatch { router, found }),
    }
}

/// Oblivious ring routing: always step to `(current + 1) mod radix`.
#[derive(Debug, Clone)]
pub struct AlwaysRightRing {
    network: Network<usize>,
    radix: usize,
}

impl AlwaysRightRing {
    /// Builds a ring of `radix` nodes and routes over it
    pub fn new(radix: usize) -> Result<Self, TopologyError> {
        let network = Ring::build(radix)?;
        Ok(Self { network, radix })
    }

    pub fn from_network(network: Network<usize>) -> Result<Self, RoutingError> {
        let radix = ring_radix("AlwaysRightRing", &network)?;
        Ok(Self { network, radix })
    }

    pub fn get_radix(&self) -> usize {
        self.radix
    }
}

impl Router for AlwaysRightRing {
    type Address = usize;

    fn name(&self) -> &'static str {
        "AlwaysRightRing"
    }

    fn network(&self) -> &Network<usize> {
        &self.network
    }

    fn next_hop(
        &self,
        current: usize,
        packet: &Packet<usize>,
        _rng: &mut dyn RngCore,
    ) -> Result<Option<usize>, RoutingError> {
        check_addresses(&self.network, current, packet)?;
        if current == packet.destination {
            return Ok(None);
        }
        Ok(Some((current + 1) % self.radix))
    }
}

/// Ring routing that moves toward the neighbour closer to the destination.
///
/// Distances are the plain address difference from each neighbour, except that
/// a neighbour at address `0` on the left, or at `radix - 1` on the right,
/// always counts as distance 1. Ties go right.
#[derive(Debug, Clone)]
pub struct ShortestPathRing {
    network: Network<usize>,
    radix: usize,
}

impl ShortestPathRing {
    pub fn new(radix: usize) -> Result<Self, TopologyError> {
        let network = Ring::build(radix)?;
        Ok(Self { network, radix })
    }

    pub fn from_network(network: Network<usize>) -> Result<Self, RoutingError> {
        let radix = ring_radix("ShortestPathRing", &network)?;
        Ok(Self { network, radix })
    }

    pub fn get_radix(&self) -> usize {
        self.radix
    }
}

impl Router for ShortestPathRing {
    type Address = usize;

    fn name(&self) -> &'static str {
        "ShortestPathRing"
    }

    fn network(&self) -> &Network<usize> {
        &self.network
    }

    fn next_hop(
        &self,
        current: usize,
        packet: &Packet<usize>,
        _rng: &mut dyn RngCore,
    ) -> Result<Option<usize>, RoutingError> {
        check_addresses(&self.network, current, packet)?;
        let dest = packet.destination;
        if current == dest {
            return Ok(None);
        }

        let k = self.radix;
        let left = (current + k - 1) % k;
        let right = (current + 1) % k;
        let left_dist = if left == 0 { 1 } else { dest.abs_diff(left) };
        let right_dist = if right == k - 1 { 1 } else { dest.abs_diff(right) };

        if left_dist >= right_dist {
            Ok(Some(right))
        } else {
            Ok(Some(left))
        }
    }
}
