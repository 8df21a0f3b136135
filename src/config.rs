use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::network::GridAddress;
use crate::topology::{Shape, MIN_RADIX};

/// Hop limit used when the configuration does not set one
pub const DEFAULT_MAX_HOPS: usize = 1024;

/// Routing run configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    pub network: NetworkConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packets: Vec<PacketSpec>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.general.max_hops == Some(0) {
            return Err(ValidationError::InvalidGeneral(
                "max_hops must be greater than zero".to_string(),
            ));
        }

        self.general.level_filter()?;

        self.network.validate()?;

        let shape = self.network.shape();
        for (index, packet) in self.packets.iter().enumerate() {
            for (role, address) in [("source", &packet.source), ("destination", &packet.destination)] {
                address.check(shape).map_err(|reason| {
                    ValidationError::InvalidPacket(format!("packet {} {}: {}", index, role, reason))
                })?;
            }
        }

        Ok(())
    }

    /// Get the general configuration
    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }

    pub fn max_hops(&self) -> usize {
        self.general.max_hops.unwrap_or(DEFAULT_MAX_HOPS)
    }
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GeneralConfig {
    /// Seed for randomized routing; entropy is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl GeneralConfig {
    /// Parses `log_level` as a plain level such as `debug` or `warn`
    pub fn level_filter(&self) -> Result<Option<LevelFilter>, ValidationError> {
        self.log_level
            .as_deref()
            .map(|level| {
                level.parse::<LevelFilter>().map_err(|_| {
                    ValidationError::InvalidGeneral(format!("unknown log_level '{}'", level))
                })
            })
            .transpose()
    }
}

/// Router and topology parameters, tagged by router name
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "router")]
pub enum NetworkConfig {
    AlwaysRightRing { radix: usize },
    ShortestPathRing { radix: usize },
    ShortestPathTorus { radix: usize },
    ShortestPathStar { central: usize, outer: usize },
}

impl NetworkConfig {
    pub fn router_name(&self) -> &'static str {
        match self {
            NetworkConfig::AlwaysRightRing { .. } => "AlwaysRightRing",
            NetworkConfig::ShortestPathRing { .. } => "ShortestPathRing",
            NetworkConfig::ShortestPathTorus { .. } => "ShortestPathTorus",
            NetworkConfig::ShortestPathStar { .. } => "ShortestPathStar",
        }
    }

    /// Shape of the network this router runs over
    pub fn shape(&self) -> Shape {
        match *self {
            NetworkConfig::AlwaysRightRing { radix } | NetworkConfig::ShortestPathRing { radix } => {
                Shape::Ring { radix }
            }
            NetworkConfig::ShortestPathTorus { radix } => Shape::Torus { radix },
            NetworkConfig::ShortestPathStar { central, outer } => Shape::Star { central, outer },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shape() {
            Shape::Ring { radix } | Shape::Torus { radix } if radix < MIN_RADIX => {
                Err(ValidationError::InvalidNetwork(format!(
                    "{} requires radix >= {}, got {}",
                    self.router_name(),
                    MIN_RADIX,
                    radix
                )))
            }
            Shape::Star { central, outer } if central < 1 || outer < 1 => {
                Err(ValidationError::InvalidNetwork(format!(
                    "{} requires at least one central and one outer node, got {} and {}",
                    self.router_name(),
                    central,
                    outer
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A node address as written in configuration: an index or an `[x, y]` pair
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum AddressSpec {
    Index(usize),
    Grid([usize; 2]),
}

impl AddressSpec {
    /// Checks the address kind and range against a network shape
    pub fn check(&self, shape: Shape) -> Result<(), String> {
        match (*self, shape) {
            (AddressSpec::Index(i), Shape::Ring { .. } | Shape::Star { .. }) => {
                if i < shape.node_count() {
                    Ok(())
                } else {
                    Err(format!("address {} outside 0..{}", i, shape.node_count()))
                }
            }
            (AddressSpec::Grid([x, y]), Shape::Torus { radix }) => {
                if x < radix && y < radix {
                    Ok(())
                } else {
                    Err(format!("address ({}, {}) outside the {}x{} grid", x, y, radix, radix))
                }
            }
            (AddressSpec::Index(i), Shape::Torus { .. }) => {
                Err(format!("torus addresses are [x, y] pairs, got {}", i))
            }
            (AddressSpec::Grid([x, y]), _) => {
                Err(format!("{} addresses are integers, got [{}, {}]", shape.name(), x, y))
            }
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match *self {
            AddressSpec::Index(i) => Some(i),
            AddressSpec::Grid(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<GridAddress> {
        match *self {
            AddressSpec::Grid([x, y]) => Some(GridAddress::new(x, y)),
            AddressSpec::Index(_) => None,
        }
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressSpec::Index(i) => write!(f, "{}", i),
            AddressSpec::Grid([x, y]) => write!(f, "({}, {})", x, y),
        }
    }
}

/// Packet to route
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PacketSpec {
    pub source: AddressSpec,
    pub destination: AddressSpec,
    /// Creation timestamp carried through to the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid packet configuration: {0}")]
    InvalidPacket(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_config_parsing() {
        let yaml = r#"
general:
  seed: 42
  log_level: debug
network:
  router: ShortestPathRing
  radix: 6
packets:
  - source: 0
    destination: 3
  - source: 5
    destination: 1
    created_at: 10
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.network, NetworkConfig::ShortestPathRing { radix: 6 });
        assert_eq!(config.general().seed, Some(42));
        assert_eq!(config.general().level_filter(), Ok(Some(LevelFilter::Debug)));
        assert_eq!(config.max_hops(), DEFAULT_MAX_HOPS);
        assert_eq!(config.packets.len(), 2);
        assert_eq!(config.packets[1].created_at, Some(10));
    }

    #[test]
    fn test_torus_config_parsing() {
        let yaml = r#"
network:
  router: ShortestPathTorus
  radix: 4
packets:
  - source: [2, 0]
    destination: [0, 0]
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.packets[0].source.as_grid(), Some(GridAddress::new(2, 0)));
        assert_eq!(config.packets[0].source.as_index(), None);
    }

    #[test]
    fn test_star_config_parsing() {
        let yaml = r#"
general:
  max_hops: 4
network:
  router: ShortestPathStar
  central: 2
  outer: 3
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.network.shape(), Shape::Star { central: 2, outer: 3 });
        assert_eq!(config.max_hops(), 4);
    }

    #[test]
    fn test_unknown_router_rejected() {
        let yaml = r#"
network:
  router: GreedyPathRing
  radix: 4
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config {
            general: GeneralConfig::default(),
            network: NetworkConfig::AlwaysRightRing { radix: 2 },
            packets: Vec::new(),
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNetwork(_))));

        config.network = NetworkConfig::ShortestPathStar { central: 0, outer: 3 };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNetwork(_))));

        config.network = NetworkConfig::AlwaysRightRing { radix: 5 };
        config.general.max_hops = Some(0);
        assert!(matches!(config.validate(), Err(ValidationError::InvalidGeneral(_))));

        config.general.max_hops = None;
        config.general.log_level = Some("loud".to_string());
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidGeneral("unknown log_level 'loud'".to_string()))
        );

        config.general.log_level = Some("WARN".to_string());
        assert!(config.validate().is_ok());
        config.general.log_level = None;
        config.packets.push(PacketSpec {
            source: AddressSpec::Index(0),
            destination: AddressSpec::Index(5),
            created_at: None,
        });
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPacket(
                "packet 0 destination: address 5 outside 0..5".to_string()
            ))
        );
    }

    #[test]
    fn test_address_kind_must_match_shape() {
        let torus = Shape::Torus { radix: 3 };
        assert!(AddressSpec::Grid([2, 2]).check(torus).is_ok());
        assert!(AddressSpec::Grid([3, 0]).check(torus).is_err());
        assert!(AddressSpec::Index(1).check(torus).is_err());
        assert!(AddressSpec::Grid([0, 1]).check(Shape::Ring { radix: 4 }).is_err());
    }
}
