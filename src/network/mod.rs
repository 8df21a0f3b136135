//! Network container.
//!
//! A [`Network`] owns every node and channel of one topology. Builders in
//! [`crate::topology`] populate it once; routers only read from it.

pub mod address;

pub use address::{Address, GridAddress};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::topology::Shape;

/// Errors raised while registering nodes and channels
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Node {address} already exists")]
    DuplicateNode { address: String },

    #[error("Node {address} does not exist")]
    UnknownNode { address: String },

    #[error("Channel {a} <-> {b} already exists")]
    DuplicateChannel { a: String, b: String },

    #[error("Channel endpoints must differ, got {address} twice")]
    SelfLoop { address: String },
}

/// Index of a channel inside its owning network
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub usize);

/// Undirected link between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel<A: Address> {
    id: ChannelId,
    endpoints: (A, A),
}

impl<A: Address> Channel<A> {
    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn endpoints(&self) -> (A, A) {
        self.endpoints
    }

    /// Returns the endpoint opposite to `from`, or `None` if `from` is not on this channel
    pub fn other_end(&self, from: A) -> Option<A> {
        let (a, b) = self.endpoints;
        if from == a {
            Some(b)
        } else if from == b {
            Some(a)
        } else {
            None
        }
    }

    /// Returns true if the channel joins `a` and `b`, in either order
    pub fn connects(&self, a: A, b: A) -> bool {
        self.endpoints == (a, b) || self.endpoints == (b, a)
    }
}

/// A node and the channels leading to its neighbours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<A: Address> {
    address: A,
    channels: BTreeMap<A, ChannelId>,
}

impl<A: Address> Node<A> {
    fn new(address: A) -> Self {
        Self {
            address,
            channels: BTreeMap::new(),
        }
    }

    pub fn address(&self) -> A {
        self.address
    }

    /// Neighbour address to the channel reaching it
    pub fn channels(&self) -> &BTreeMap<A, ChannelId> {
        &self.channels
    }

    pub fn neighbours(&self) -> impl Iterator<Item = A> + '_ {
        self.channels.keys().copied()
    }

    pub fn degree(&self) -> usize {
        self.channels.len()
    }
}

/// A packet travelling between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet<A> {
    pub id: u64,
    pub source: A,
    pub destination: A,
}

impl<A: Address> Packet<A> {
    pub fn new(id: u64, source: A, destination: A) -> Self {
        Self { id, source, destination }
    }
}

/// Owns the nodes and channels of one topology
#[derive(Debug, Clone)]
pub struct Network<A: Address> {
    shape: Shape,
    nodes: BTreeMap<A, Node<A>>,
    channels: Vec<Channel<A>>,
}

impl<A: Address> Network<A> {
    /// Creates an empty network that will hold a topology of the given shape
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            nodes: BTreeMap::new(),
            channels: Vec::new(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn add_node(&mut self, address: A) -> Result<(), NetworkError> {
        if self.nodes.contains_key(&address) {
            return Err(NetworkError::DuplicateNode {
                address: address.to_string(),
            });
        }
        self.nodes.insert(address, Node::new(address));
        Ok(())
    }

    /// Adds an undirected channel between two existing nodes.
    ///
    /// Both endpoints record the same channel id, so the link is visible from
    /// either side.
    pub fn add_channel(&mut self, a: A, b: A) -> Result<ChannelId, NetworkError> {
        if a == b {
            return Err(NetworkError::SelfLoop {
                address: a.to_string(),
            });
        }
        for address in [a, b] {
            if !self.nodes.contains_key(&address) {
                return Err(NetworkError::UnknownNode {
                    address: address.to_string(),
                });
            }
        }
        if self.channel_between(a, b).is_some() {
            return Err(NetworkError::DuplicateChannel {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let id = ChannelId(self.channels.len());
        self.channels.push(Channel { id, endpoints: (a, b) });
        if let Some(node) = self.nodes.get_mut(&a) {
            node.channels.insert(b, id);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.channels.insert(a, id);
        }
        Ok(id)
    }

    pub fn contains(&self, address: A) -> bool {
        self.nodes.contains_key(&address)
    }

    pub fn node(&self, address: A) -> Option<&Node<A>> {
        self.nodes.get(&address)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<A>> {
        self.nodes.values()
    }

    pub fn channels(&self) -> &[Channel<A>] {
        &self.channels
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel<A>> {
        self.channels.get(id.0)
    }

    /// Looks up the channel joining `a` to its neighbour `b`
    pub fn channel_between(&self, a: A, b: A) -> Option<&Channel<A>> {
        let id = self.nodes.get(&a)?.channels.get(&b)?;
        self.channel(*id)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
