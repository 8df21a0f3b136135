//! # Netroute - interconnection topologies and per-hop routing
//!
//! This library models the interconnection networks used in parallel and
//! distributed machines (ring, torus and star) and, for each of them, a
//! routing policy that decides the single next hop a packet takes toward its
//! destination.
//!
//! ## Overview
//!
//! A topology builder runs once and produces an immutable [`network::Network`].
//! A router then answers, one call at a time, "I am at node X carrying a
//! packet for node Y; which channel do I take?" Routers keep no state between
//! calls, so one network can be shared read-only by many threads, each passing
//! its own random source.
//!
//! ## Key Features
//!
//! - **Topologies**: Ring (`k >= 3`), `k x k` Torus (`k >= 3`), Star (`k1` hubs, `k2` leaves)
//! - **Routers**: Always-Right Ring, Shortest-Path Ring, Shortest-Path Torus, Shortest-Path Star
//! - **Reproducible**: randomized relays draw from an injected, seedable RNG
//! - **Tracing**: follow a router hop by hop and summarise route lengths
//!
//! ## Architecture
//!
//! - `network`: node, channel and packet types and the network container
//! - `topology`: ring, torus and star builders
//! - `routing`: routers, structural radix recovery, distances and route tracing
//! - `config`: type-safe configuration structures and YAML parsing
//! - `config_loader`: configuration file loading and CLI overrides
//! - `scenario`: packet scenario CSV files
//! - `orchestrator`: builds the configured router and traces every packet
//! - `report`: route summaries and JSON output
//!
//! ## Example Usage
//!
//! ```rust
//! use netroute::network::Packet;
//! use netroute::routing::{Router, ShortestPathRing};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let router = ShortestPathRing::new(6)?;
//! let mut rng = StdRng::seed_from_u64(0);
//! let packet = Packet::new(0, 0, 3);
//!
//! let channel = router.route_packet(0, &packet, &mut rng)?.expect("not yet arrived");
//! assert_eq!(channel.other_end(0), Some(1));
//! assert!(router.route_packet(3, &packet, &mut rng)?.is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library modules return typed `thiserror` errors. Construction rejects
//! undersized topologies, and routing rejects addresses that are not in the
//! network instead of panicking. The binary reports them through `color_eyre`.

pub mod config;
pub mod config_loader;
pub mod network;
pub mod orchestrator;
pub mod report;
pub mod routing;
pub mod scenario;
pub mod topology;
