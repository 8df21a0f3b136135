//! Route report.
//!
//! Summarises the routes produced by one run and serialises them to JSON.

use serde::Serialize;
use std::path::Path;

use crate::network::Address;
use crate::routing::Route;
use crate::topology::Shape;

/// One traced packet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub packet: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    pub hops: usize,
    pub path: Vec<String>,
}

impl RouteSummary {
    pub fn from_route<A: Address>(route: &Route<A>, created_at: Option<u64>) -> Self {
        Self {
            packet: route.packet,
            created_at,
            hops: route.hops(),
            path: route.addresses().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome of routing every packet of a configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub router: &'static str,
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub routes: Vec<RouteSummary>,
}

impl Report {
    /// Mean number of channels traversed, or `None` when no packet was routed
    pub fn average_route_length(&self) -> Option<f64> {
        if self.routes.is_empty() {
            return None;
        }
        let total: usize = self.routes.iter().map(|route| route.hops).sum();
        Some(total as f64 / self.routes.len() as f64)
    }

    pub fn longest_route(&self) -> Option<&RouteSummary> {
        self.routes.iter().max_by_key(|route| route.hops)
    }

    /// Writes the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> color_eyre::Result<()> {
        #[derive(Serialize)]
        struct Document<'a> {
            #[serde(flatten)]
            report: &'a Report,
            average_route_length: Option<f64>,
        }

        let document = Document {
            report: self,
            average_route_length: self.average_route_length(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
