//! Packet scenario files.
//!
//! A scenario is a headerless CSV file. The first line names the router and
//! its size arguments; every following line is one packet:
//!
//! ```text
//! ShortestPathStar,2,3
//! 0,2,4
//! 5,3,0
//! ```
//!
//! Ring and star packets are `timestamp,source,destination`. Torus packets
//! spell out both coordinates: `timestamp,xs,ys,xd,yd`.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::io;
use std::path::Path;

use crate::config::{AddressSpec, Config, GeneralConfig, NetworkConfig, PacketSpec, ValidationError};

/// Errors raised while reading a scenario
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Csv(#[from] csv::Error),

    #[error("Scenario has no header line")]
    Empty,

    #[error("Line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

fn field(record: &StringRecord, index: usize, what: &str) -> Result<usize, ScenarioError> {
    let raw = record.get(index).ok_or_else(|| ScenarioError::Malformed {
        line: line_of(record),
        reason: format!("missing {}", what),
    })?;
    raw.parse().map_err(|_| ScenarioError::Malformed {
        line: line_of(record),
        reason: format!("{} '{}' is not a non-negative integer", what, raw),
    })
}

fn expect_len(record: &StringRecord, len: usize) -> Result<(), ScenarioError> {
    if record.len() != len {
        return Err(ScenarioError::Malformed {
            line: line_of(record),
            reason: format!("expected {} fields, found {}", len, record.len()),
        });
    }
    Ok(())
}

fn parse_header(record: &StringRecord) -> Result<NetworkConfig, ScenarioError> {
    let name = record.get(0).unwrap_or_default();
    let network = match name {
        "AlwaysRightRing" | "ShortestPathRing" | "ShortestPathTorus" => {
            expect_len(record, 2)?;
            let radix = field(record, 1, "radix")?;
            match name {
                "AlwaysRightRing" => NetworkConfig::AlwaysRightRing { radix },
                "ShortestPathRing" => NetworkConfig::ShortestPathRing { radix },
                _ => NetworkConfig::ShortestPathTorus { radix },
            }
        }
        "ShortestPathStar" => {
            expect_len(record, 3)?;
            NetworkConfig::ShortestPathStar {
                central: field(record, 1, "central count")?,
                outer: field(record, 2, "outer count")?,
            }
        }
        other => {
            return Err(ScenarioError::Malformed {
                line: line_of(record),
                reason: format!("unknown router '{}'", other),
            })
        }
    };
    Ok(network)
}

fn parse_packet(record: &StringRecord, network: &NetworkConfig) -> Result<PacketSpec, ScenarioError> {
    let created_at = field(record, 0, "timestamp")? as u64;
    let (source, destination) = match network {
        NetworkConfig::ShortestPathTorus { .. } => {
            expect_len(record, 5)?;
            (
                AddressSpec::Grid([field(record, 1, "source x")?, field(record, 2, "source y")?]),
                AddressSpec::Grid([
                    field(record, 3, "destination x")?,
                    field(record, 4, "destination y")?,
                ]),
            )
        }
        _ => {
            expect_len(record, 3)?;
            (
                AddressSpec::Index(field(record, 1, "source")?),
                AddressSpec::Index(field(record, 2, "destination")?),
            )
        }
    };
    Ok(PacketSpec {
        source,
        destination,
        created_at: Some(created_at),
    })
}

/// Reads a scenario into a validated configuration with default general settings
pub fn read_scenario<R: io::Read>(reader: R) -> Result<Config, ScenarioError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = reader.records();
    let header = records.next().ok_or(ScenarioError::Empty)??;
    let network = parse_header(&header)?;

    let packets = records
        .map(|record| parse_packet(&record?, &network))
        .collect::<Result<Vec<_>, _>>()?;

    let config = Config {
        general: GeneralConfig::default(),
        network,
        packets,
    };
    config.validate()?;
    Ok(config)
}

pub fn read_scenario_file(path: &Path) -> Result<Config, ScenarioError> {
    info!("Loading packet scenario from: {:?}", path);
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_scenario(file)
}
