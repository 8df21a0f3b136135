//! Torus router.

use rand::RngCore;

use super::{check_addresses, check_recorded_shape, Router, RoutingError};
use crate::network::{GridAddress, Network, Packet};
use crate::topology::{Shape, Topology, TopologyError, Torus};

/// Dimension-ordered shortest-path routing on a torus.
///
/// The x axis is corrected first; once it matches, the y axis. Along each axis
/// the packet takes the shorter way round, preferring the increasing direction
/// on ties.
#[derive(Debug, Clone)]
pub struct ShortestPathTorus {
    network: Network<GridAddress>,
    radix: usize,
}

impl ShortestPathTorus {
    pub fn new(radix: usize) -> Result<Self, TopologyError> {
        let network = Torus::build(radix)?;
        Ok(Self { network, radix })
    }

    pub fn from_network(network: Network<GridAddress>) -> Result<Self, RoutingError> {
        match network.shape() {
            Shape::Torus { radix } => {
                check_recorded_shape("ShortestPathTorus", &network)?;
                Ok(Self { network, radix })
            }
            found => Err(RoutingError::ShapeMismatch {
                router: "ShortestPathTorus",
                found,
            }),
        }
    }

    pub fn get_radix(&self) -> usize {
        self.radix
    }
}

/// Returns true if moving from `src` to `dst` on a cycle of size `k` should go
/// in the increasing direction.
pub fn get_direction(src: usize, dst: usize, k: usize) -> bool {
    let (left_dist, right_dist) = if dst > src {
        let right = dst - src;
        (k - right, right)
    } else {
        let left = src - dst;
        (left, k - left)
    };
    right_dist <= left_dist
}

fn step(coord: usize, increasing: bool, k: usize) -> usize {
    if increasing {
        (coord + 1) % k
    } else {
        (coord + k - 1) % k
    }
}

impl Router for ShortestPathTorus {
    type Address = GridAddress;

    fn name(&self) -> &'static str {
        "ShortestPathTorus"
    }

    fn network(&self) -> &Network<GridAddress> {
        &self.network
    }

    fn next_hop(
        &self,
        current: GridAddress,
        packet: &Packet<GridAddress>,
        _rng: &mut dyn RngCore,
    ) -> Result<Option<GridAddress>, RoutingError> {
        check_addresses(&self.network, current, packet)?;
        let dest = packet.destination;
        if current == dest {
            return Ok(None);
        }

        let k = self.radix;
        let next = if current.x != dest.x {
            let x = step(current.x, get_direction(current.x, dest.x, k), k);
            GridAddress::new(x, current.y)
        } else {
            let y = step(current.y, get_direction(current.y, dest.y, k), k);
            GridAddress::new(current.x, y)
        };
        Ok(Some(next))
    }
}
