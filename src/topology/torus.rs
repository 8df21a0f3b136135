//! Torus topology builder.

use super::{check_radix, log_built, Shape, Topology, TopologyError};
use crate::network::{GridAddress, Network};

/// `radix x radix` grid with wraparound on both axes
#[derive(Debug, Clone, Copy)]
pub struct Torus;

impl Topology for Torus {
    type Address = GridAddress;
    type Params = usize;

    fn build(radix: usize) -> Result<Network<GridAddress>, TopologyError> {
        check_radix("torus", radix)?;

        let last = radix - 1;
        let mut network = Network::new(Shape::Torus { radix });
        for x in 0..radix {
            for y in 0..radix {
                let here = GridAddress::new(x, y);
                network.add_node(here)?;
                if y > 0 {
                    network.add_channel(here, GridAddress::new(x, y - 1))?;
                }
                if y == last {
                    network.add_channel(here, GridAddress::new(x, y - last))?;
                }
                if x > 0 {
                    network.add_channel(here, GridAddress::new(x - 1, y))?;
                }
                if x == last {
                    network.add_channel(here, GridAddress::new(x - last, y))?;
                }
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
    fn test_torus_wraps_both_axes() {
        let network = Torus::build(4).unwrap();
        assert_eq!(network.len(), 16);
        assert_eq!(network.channels().len(), 32);

        let corner = network.node(GridAddress::new(0, 0)).unwrap();
        let neighbours: Vec<GridAddress> = corner.neighbours().collect();
        assert_eq!(
            neighbours,
            vec![
                GridAddress::new(0, 1),
                GridAddress::new(0, 3),
                GridAddress::new(1, 0),
                GridAddress::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_every_node_has_four_neighbours() {
        let network = Torus::build(3).unwrap();
        assert!(network.nodes().all(|node| node.degree() == 4));
    }

    #[test]
    fn test_torus_radix_too_small() {
        assert_eq!(
            Torus::build(1).unwrap_err(),
            TopologyError::RadixTooSmall { shape: "torus", radix: 1 }
        );
    }
}
