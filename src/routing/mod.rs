//! Per-hop routing.
//!
//! A [`Router`] answers one question: a packet has just arrived at `current`,
//! which channel should it take next? `None` means the packet has arrived.
//! Routers keep no memory between calls. Every call takes an explicit random
//! source so that randomized policies stay reproducible under a seeded RNG.

pub mod distance;
pub mod ring;
pub mod star;
pub mod torus;
pub mod trace;

use rand::RngCore;

use crate::network::{Address, Channel, Network, Packet};
use crate::topology::{Shape, MIN_RADIX};

pub use distance::distance;
pub use ring::{AlwaysRightRing, ShortestPathRing};
pub use star::ShortestPathStar;
pub use torus::ShortestPathTorus;
pub use trace::{trace_route, Route};

/// Errors raised while routing a packet
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("{role} address {address} is not in the network")]
    UnknownAddress { role: &'static str, address: String },

    #[error("No channel from {from} to {to}")]
    MissingChannel { from: String, to: String },

    #[error("{router} cannot route over a {found:?} network")]
    ShapeMismatch { router: &'static str, found: Shape },

    #[error("{router} cannot route over a {found:?} network holding {nodes} nodes")]
    InvalidShape {
        router: &'static str,
        found: Shape,
        nodes: usize,
    },

    #[error("Packet {packet} did not arrive within {limit} hops")]
    HopLimitExceeded { packet: u64, limit: usize },
}

/// A next-hop policy bound to one network
pub trait Router {
    type Address: Address;

    /// Name used in logs and scenario files
    fn name(&self) -> &'static str;

    fn network(&self) -> &Network<Self::Address>;

    /// Returns the neighbour the packet should move to, or `None` once it has arrived
    fn next_hop(
        &self,
        current: Self::Address,
        packet: &Packet<Self::Address>,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Self::Address>, RoutingError>;

    /// Returns the channel the packet should traverse next, or `None` once it has arrived
    fn route_packet(
        &self,
        current: Self::Address,
        packet: &Packet<Self::Address>,
        rng: &mut dyn RngCore,
    ) -> Result<Option<&Channel<Self::Address>>, RoutingError> {
        let Some(next) = self.next_hop(current, packet, rng)? else {
            return Ok(None);
        };
        self.network()
            .channel_between(current, next)
            .map(Some)
            .ok_or_else(|| RoutingError::MissingChannel {
                from: current.to_string(),
                to: next.to_string(),
            })
    }
}

/// Rejects calls whose current node or packet endpoints are not in the network
pub(crate) fn check_addresses<A: Address>(
    network: &Network<A>,
    current: A,
    packet: &Packet<A>,
) -> Result<(), RoutingError> {
    for (role, address) in [
        ("current", current),
        ("source", packet.source),
        ("destination", packet.destination),
    ] {
        if !network.contains(address) {
            return Err(RoutingError::UnknownAddress {
                role,
                address: address.to_string(),
            });
        }
    }
    Ok(())
}

/// Rejects a recorded shape that is undersized or disagrees with the node count
pub(crate) fn check_recorded_shape<A: Address>(
    router: &'static str,
    network: &Network<A>,
) -> Result<(), RoutingError> {
    let found = network.shape();
    let sized = match found {
        Shape::Ring { radix } | Shape::Torus { radix } => radix >= MIN_RADIX,
        Shape::Star { central, outer } => central >= 1 && outer >= 1,
    };
    if !sized || network.len() != found.node_count() {
        return Err(RoutingError::InvalidShape {
            router,
            found,
            nodes: network.len(),
        });
    }
    Ok(())
}

/// Recovers a ring's radix from the highest neighbour of node `0`, plus one.
///
/// Returns `None` if node `0` is missing or isolated.
pub fn recover_ring_radix(network: &Network<usize>) -> Option<usize> {
    network.node(0)?.neighbours().max().map(|highest| highest + 1)
}

/// Recovers a torus radix as the integer square root of the node count
pub fn recover_torus_radix<A: Address>(network: &Network<A>) -> usize {
    let nodes = network.len();
    let mut radix = 0;
    while (radix + 1) * (radix + 1) <= nodes {
        radix += 1;
    }
    radix
}

/// Counts star hubs: a node is central iff it links to every other node.
///
/// Ambiguous when the star has a single outer node, since that node is then
/// connected to everything as well.
pub fn recover_central_count(network: &Network<usize>) -> usize {
    let others = network.len().saturating_sub(1);
    network.nodes().filter(|node| node.degree() == others).count()
}
