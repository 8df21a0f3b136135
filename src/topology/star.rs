//! Star topology builder.
//!
//! Central nodes are addressed `0..central` and form a complete subgraph.
//! Outer nodes follow at `central..central + outer` and link to every central
//! node but never to each other.

use super::{log_built, Shape, StarRadii, Topology, TopologyError};
use crate::network::Network;

#[derive(Debug, Clone, Copy)]
pub struct Star;

impl Topology for Star {
    type Address = usize;
    type Params = StarRadii;

    fn build(radii: StarRadii) -> Result<Network<usize>, TopologyError> {
        let StarRadii { central, outer } = radii;
        if central < 1 {
            return Err(TopologyError::EmptyStarTier { tier: "central" });
        }
        if outer < 1 {
            return Err(TopologyError::EmptyStarTier { tier: "outer" });
        }

        let mut network = Network::new(Shape::Star { central, outer });
        for hub in 0..central {
            network.add_node(hub)?;
            for other in 0..hub {
                network.add_channel(hub, other)?;
            }
        }
        for leaf in central..central + outer {
            network.add_node(leaf)?;
            for hub in 0..central {
                network.add_channel(leaf, hub)?;
            }
        }

        log_built(&network);
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_degrees() {
        let network = Star::build(StarRadii::new(3, 4)).unwrap();
        assert_eq!(network.len(), 7);
        assert_eq!(network.channels().len(), 15);
        for hub in 0..3 {
            assert_eq!(network.node(hub).unwrap().degree(), 6);
        }
        for leaf in 3..7 {
            let neighbours: Vec<usize> = network.node(leaf).unwrap().neighbours().collect();
            assert_eq!(neighbours, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_single_hub() {
        let network = Star::build(StarRadii::new(1, 3)).unwrap();
        assert_eq!(network.node(0).unwrap().degree(), 3);
        assert!(network.channel_between(1, 2).is_none());
    }

    #[test]
    fn test_empty_tiers_rejected() {
        assert_eq!(
            Star::build(StarRadii::new(0, 3)).unwrap_err(),
            TopologyError::EmptyStarTier { tier: "central" }
        );
        assert_eq!(
            Star::build(StarRadii::new(2, 0)).unwrap_err(),
            TopologyError::EmptyStarTier { tier: "outer" }
        );
    }
}
