//! Route tracing.
//!
//! Applies a router hop after hop from the packet source until it reports
//! arrival. Nothing here models time or queueing; the result is just the list
//! of nodes visited.

use log::{debug, warn};
use rand::RngCore;
use serde::Serialize;

use super::{Router, RoutingError};
use crate::network::{Address, Packet};

/// Nodes visited by one packet, source first and destination last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<A> {
    pub packet: u64,
    addresses: Vec<A>,
}

impl<A: Address> Route<A> {
    pub fn addresses(&self) -> &[A] {
        &self.addresses
    }

    /// Number of channels traversed
    pub fn hops(&self) -> usize {
        self.addresses.len() - 1
    }

    pub fn destination(&self) -> A {
        self.addresses[self.addresses.len() - 1]
    }
}

/// Follows `router` from the packet's source until it arrives.
///
/// Fails with [`RoutingError::HopLimitExceeded`] if the packet is still in
/// transit after `max_hops` channels, which happens with policies that
/// oscillate between two nodes.
pub fn trace_route<R: Router + ?Sized>(
    router: &R,
    packet: &Packet<R::Address>,
    rng: &mut dyn RngCore,
    max_hops: usize,
) -> Result<Route<R::Address>, RoutingError> {
    let mut current = packet.source;
    let mut addresses = vec![current];

    while let Some(channel) = router.route_packet(current, packet, rng)? {
        if addresses.len() > max_hops {
            warn!(
                "{}: packet {} from {} to {} exceeded {} hops",
                router.name(),
                packet.id,
                packet.source,
                packet.destination,
                max_hops
            );
            return Err(RoutingError::HopLimitExceeded {
                packet: packet.id,
                limit: max_hops,
            });
        }
        let next = channel.other_end(current).ok_or_else(|| RoutingError::MissingChannel {
            from: current.to_string(),
            to: packet.destination.to_string(),
        })?;
        debug!("{}: packet {} {} -> {}", router.name(), packet.id, current, next);
        addresses.push(next);
        current = next;
    }

    Ok(Route {
        packet: packet.id,
        addresses,
    })
}
