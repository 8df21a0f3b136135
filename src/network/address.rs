//! Node address types.
//!
//! Ring and star networks address their nodes with plain integers; a torus
//! uses a two-dimensional grid position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Anything that can identify a node inside a [`Network`](crate::network::Network).
///
/// Addresses are immutable values, comparable and hashable, and unique per node.
pub trait Address: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl Address for usize {}

/// Position of a node on a `k x k` torus grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridAddress {
    pub x: usize,
    pub y: usize,
}

impl GridAddress {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for GridAddress {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Address for GridAddress {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_address_display() {
        assert_eq!(GridAddress::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn test_grid_address_ordering() {
        // x-major ordering keeps torus node listings row by row
        let mut addrs = vec![GridAddress::new(1, 0), GridAddress::new(0, 2), GridAddress::new(0, 1)];
        addrs.sort();
        assert_eq!(
            addrs,
            vec![GridAddress::new(0, 1), GridAddress::new(0, 2), GridAddress::new(1, 0)]
        );
    }
}
