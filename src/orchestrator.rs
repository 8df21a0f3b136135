//! Routing run orchestrator.
//!
//! This module turns a validated [`Config`] into a router, traces every
//! configured packet through it and collects the routes into a [`Report`].

use log::{debug, info};
use rand::RngCore;

use crate::config::{AddressSpec, Config, NetworkConfig, ValidationError};
use crate::network::Packet;
use crate::report::{Report, RouteSummary};
use crate::routing::{
    trace_route, AlwaysRightRing, Router, RoutingError, ShortestPathRing, ShortestPathStar,
    ShortestPathTorus,
};
use crate::topology::{StarRadii, TopologyError};

/// Errors that abort a routing run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Any of the supported routers, built from configuration
#[derive(Debug, Clone)]
pub enum AnyRouter {
    AlwaysRightRing(AlwaysRightRing),
    ShortestPathRing(ShortestPathRing),
    ShortestPathTorus(ShortestPathTorus),
    ShortestPathStar(ShortestPathStar),
}

impl AnyRouter {
    pub fn build(network: &NetworkConfig) -> Result<Self, TopologyError> {
        let router = match *network {
            NetworkConfig::AlwaysRightRing { radix } => {
                AnyRouter::AlwaysRightRing(AlwaysRightRing::new(radix)?)
            }
            NetworkConfig::ShortestPathRing { radix } => {
                AnyRouter::ShortestPathRing(ShortestPathRing::new(radix)?)
            }
            NetworkConfig::ShortestPathTorus { radix } => {
                AnyRouter::ShortestPathTorus(ShortestPathTorus::new(radix)?)
            }
            NetworkConfig::ShortestPathStar { central, outer } => {
                AnyRouter::ShortestPathStar(ShortestPathStar::new(StarRadii::new(central, outer))?)
            }
        };
        Ok(router)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyRouter::AlwaysRightRing(router) => router.name(),
            AnyRouter::ShortestPathRing(router) => router.name(),
            AnyRouter::ShortestPathTorus(router) => router.name(),
            AnyRouter::ShortestPathStar(router) => router.name(),
        }
    }
}

fn trace_all<R, F>(
    router: &R,
    config: &Config,
    rng: &mut dyn RngCore,
    convert: F,
) -> Result<Vec<RouteSummary>, RunError>
where
    R: Router,
    F: Fn(&AddressSpec) -> Option<R::Address>,
{
    let max_hops = config.max_hops();
    let mut routes = Vec::with_capacity(config.packets.len());

    for (id, spec) in config.packets.iter().enumerate() {
        let endpoint = |address: &AddressSpec| {
            convert(address).ok_or_else(|| {
                ValidationError::InvalidPacket(format!(
                    "packet {}: address {} does not fit {}",
                    id,
                    address,
                    router.name()
                ))
            })
        };
        let packet = Packet::new(id as u64, endpoint(&spec.source)?, endpoint(&spec.destination)?);

        let route = trace_route(router, &packet, rng, max_hops)?;
        debug!("Packet {} took {} hops", id, route.hops());
        routes.push(RouteSummary::from_route(&route, spec.created_at));
    }

    Ok(routes)
}

fn describe<R: Router>(router: &R) -> String {
    let network = router.network();
    format!("{} nodes, {} channels", network.len(), network.channels().len())
}

/// Builds the configured router and routes every packet, one hop at a time
pub fn run(config: &Config, rng: &mut dyn RngCore) -> Result<Report, RunError> {
    config.validate()?;
    let router = AnyRouter::build(&config.network)?;

    let routes = match &router {
        AnyRouter::AlwaysRightRing(r) => {
            info!("{}: {}", r.name(), describe(r));
            trace_all(r, config, rng, AddressSpec::as_index)?
        }
        AnyRouter::ShortestPathRing(r) => {
            info!("{}: {}", r.name(), describe(r));
            trace_all(r, config, rng, AddressSpec::as_index)?
        }
        AnyRouter::ShortestPathTorus(r) => {
            info!("{}: {}", r.name(), describe(r));
            trace_all(r, config, rng, AddressSpec::as_grid)?
        }
        AnyRouter::ShortestPathStar(r) => {
            info!("{}: {}", r.name(), describe(r));
            trace_all(r, config, rng, AddressSpec::as_index)?
        }
    };

    let report = Report {
        router: router.name(),
        shape: config.network.shape(),
        seed: config.general.seed,
        routes,
    };
    if let Some(average) = report.average_route_length() {
        info!("Routed {} packets, average route length {:.2}", report.routes.len(), average);
        if let Some(longest) = report.longest_route() {
            debug!("Longest route: packet {} with {} hops", longest.packet, longest.hops);
        }
    } else {
        info!("No packets to route");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneralConfig, PacketSpec};
    use crate::topology::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn packet(source: AddressSpec, destination: AddressSpec) -> PacketSpec {
        PacketSpec {
            source,
            destination,
            created_at: None,
        }
    }

    #[test]
    fn test_run_ring() {
        let config = Config {
            general: GeneralConfig::default(),
            network: NetworkConfig::AlwaysRightRing { radix: 5 },
            packets: vec![
                packet(AddressSpec::Index(1), AddressSpec::Index(0)),
                packet(AddressSpec::Index(2), AddressSpec::Index(2)),
            ],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let report = run(&config, &mut rng).unwrap();
        assert_eq!(report.router, "AlwaysRightRing");
        assert_eq!(report.shape, Shape::Ring { radix: 5 });
        assert_eq!(report.routes[0].hops, 4);
        assert_eq!(report.routes[1].hops, 0);
        assert_eq!(report.average_route_length(), Some(2.0));
        assert_eq!(report.longest_route().map(|route| route.packet), Some(0));
    }

    #[test]
    fn test_run_torus() {
        let config = Config {
            general: GeneralConfig::default(),
            network: NetworkConfig::ShortestPathTorus { radix: 4 },
            packets: vec![packet(AddressSpec::Grid([2, 0]), AddressSpec::Grid([0, 0]))],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let report = run(&config, &mut rng).unwrap();
        assert_eq!(report.routes[0].path, vec!["(2, 0)", "(3, 0)", "(0, 0)"]);
    }

    #[test]
    fn test_run_star_seeded() {
        let config = Config {
            general: GeneralConfig {
                seed: Some(5),
                ..GeneralConfig::default()
            },
            network: NetworkConfig::ShortestPathStar { central: 3, outer: 4 },
            packets: vec![packet(AddressSpec::Index(3), AddressSpec::Index(6)); 5],
        };
        let first = run(&config, &mut StdRng::seed_from_u64(5)).unwrap();
        let second = run(&config, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(first, second);
        assert!(first.routes.iter().all(|route| route.hops == 2));
    }

    #[test]
    fn test_run_reports_hop_limit() {
        let config = Config {
            general: GeneralConfig {
                max_hops: Some(20),
                ..GeneralConfig::default()
            },
            network: NetworkConfig::ShortestPathRing { radix: 8 },
            packets: vec![packet(AddressSpec::Index(0), AddressSpec::Index(4))],
        };
        let err = run(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            RunError::Routing(RoutingError::HopLimitExceeded { packet: 0, limit: 20 })
        ));
    }

    #[test]
    fn test_run_rejects_mismatched_address() {
        let config = Config {
            general: GeneralConfig::default(),
            network: NetworkConfig::ShortestPathRing { radix: 4 },
            packets: vec![packet(AddressSpec::Grid([0, 0]), AddressSpec::Index(1))],
        };
        let err = run(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, RunError::Validation(ValidationError::InvalidPacket(_))));
    }
}
