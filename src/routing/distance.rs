//! Shortest-path hop distances.
//!
//! Distances count channels, not nodes, and are derived from the recorded
//! [`Shape`] rather than by searching the graph.

use crate::network::GridAddress;
use crate::topology::Shape;

/// Shape-aware hop distance between two addresses.
///
/// Returns `None` when the address kind does not belong to the shape or an
/// address lies outside it.
pub trait Distance: Copy {
    fn distance(shape: Shape, a: Self, b: Self) -> Option<usize>;
}

/// Hop distance between two points on a cycle of size `k`
pub fn ring_distance(a: usize, b: usize, k: usize) -> usize {
    let d = a.abs_diff(b);
    d.min(k.saturating_sub(d))
}

impl Distance for usize {
    fn distance(shape: Shape, a: usize, b: usize) -> Option<usize> {
        match shape {
            Shape::Torus { .. } => None,
            _ if a >= shape.node_count() || b >= shape.node_count() => None,
            _ if a == b => Some(0),
            Shape::Ring { radix } => Some(ring_distance(a, b, radix)),
            Shape::Star { central, .. } if a < central || b < central => Some(1),
            Shape::Star { .. } => Some(2),
        }
    }
}

impl Distance for GridAddress {
    fn distance(shape: Shape, a: GridAddress, b: GridAddress) -> Option<usize> {
        match shape {
            Shape::Torus { radix } if [a.x, a.y, b.x, b.y].iter().all(|&c| c < radix) => {
                Some(ring_distance(a.x, b.x, radix) + ring_distance(a.y, b.y, radix))
            }
            _ => None,
        }
    }
}

/// Returns the shortest-path distance between `a` and `b` in a network of the given shape
pub fn distance<A: Distance>(shape: Shape, a: A, b: A) -> Option<usize> {
    A::distance(shape, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_distance() {
        let ring = Shape::Ring { radix: 8 };
        assert_eq!(distance(ring, 3usize, 3), Some(0));
        assert_eq!(distance(ring, 0usize, 3), Some(3));
        assert_eq!(distance(ring, 0usize, 5), Some(3));
        assert_eq!(distance(ring, 1usize, 7), Some(2));
        assert_eq!(distance(ring, 0usize, 4), Some(4));
    }

    #[test]
    fn test_torus_distance() {
        let torus = Shape::Torus { radix: 5 };
        let a = GridAddress::new(0, 0);
        assert_eq!(distance(torus, a, a), Some(0));
        assert_eq!(distance(torus, a, GridAddress::new(4, 4)), Some(2));
        assert_eq!(distance(torus, a, GridAddress::new(2, 3)), Some(4));
    }

    #[test]
    fn test_star_distance() {
        let star = Shape::Star { central: 2, outer: 3 };
        assert_eq!(distance(star, 0usize, 1), Some(1));
        assert_eq!(distance(star, 1usize, 4), Some(1));
        assert_eq!(distance(star, 2usize, 4), Some(2));
        assert_eq!(distance(star, 3usize, 3), Some(0));
        assert_eq!(distance(star, GridAddress::new(0, 0), GridAddress::new(0, 1)), None);
    }

    #[test]
    fn test_out_of_range_addresses() {
        assert_eq!(distance(Shape::Ring { radix: 4 }, 0usize, 9), None);
        assert_eq!(distance(Shape::Ring { radix: 4 }, 7usize, 7), None);
        assert_eq!(distance(Shape::Star { central: 1, outer: 2 }, 3usize, 0), None);
        assert_eq!(
            distance(Shape::Torus { radix: 3 }, GridAddress::new(0, 0), GridAddress::new(0, 5)),
            None
        );
        // points further apart than the cycle saturate instead of wrapping
        assert_eq!(ring_distance(0, 9, 4), 0);
    }
}
