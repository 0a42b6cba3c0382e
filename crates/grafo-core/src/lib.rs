#![deny(missing_docs)]
#![doc = "Core data model, capability traits and error types for the grafo graph engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod traits;

pub use errors::{ErrorInfo, GraphError};
pub use rng::RngHandle;
pub use traits::{
    ArcRemover, Connections, DirectedEdges, DirectedEdgesWriter, EdgeRemover, MixedEdges,
    MixedEdgesWriter, TypedConnections, UndirectedEdges, UndirectedEdgesWriter, VertexRemover,
    VertexStore, VertexWriter, Vertices,
};

/// Identifier for a vertex. Carries no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered pair of vertices.
///
/// For undirected storage the pair is normalized so that `tail <= head` when
/// enumerated; either order is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// First endpoint (arc origin).
    pub tail: VertexId,
    /// Second endpoint (arc target).
    pub head: VertexId,
}

impl Connection {
    /// Creates a connection from `tail` to `head`.
    pub fn new(tail: impl Into<VertexId>, head: impl Into<VertexId>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
        }
    }

    /// Returns the same pair with endpoints swapped so that `tail <= head`.
    pub fn normalized(self) -> Self {
        if self.tail > self.head {
            self.reversed()
        } else {
            self
        }
    }

    /// Returns the pair with endpoints swapped.
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.tail, self.head)
    }
}

/// Kind of connection stored between two vertices of a mixed graph.
///
/// `DirectedReversed` is never stored by callers: it is what a directed
/// connection `tail -> head` looks like when queried from `head`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MixedConnectionType {
    /// No connection.
    #[default]
    None,
    /// Edge.
    Undirected,
    /// Arc from the queried tail to the queried head.
    Directed,
    /// Arc from the queried head to the queried tail.
    DirectedReversed,
}

impl MixedConnectionType {
    /// Returns the type as seen from the other endpoint.
    pub fn reversed(self) -> Self {
        match self {
            MixedConnectionType::Directed => MixedConnectionType::DirectedReversed,
            MixedConnectionType::DirectedReversed => MixedConnectionType::Directed,
            other => other,
        }
    }
}

impl fmt::Display for MixedConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MixedConnectionType::None => "none",
            MixedConnectionType::Undirected => "undirected",
            MixedConnectionType::Directed => "directed",
            MixedConnectionType::DirectedReversed => "reversed",
        };
        f.write_str(name)
    }
}

/// Connection tagged with its kind, as enumerated by mixed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypedConnection {
    /// First endpoint.
    pub tail: VertexId,
    /// Second endpoint.
    pub head: VertexId,
    /// Connection kind.
    pub kind: MixedConnectionType,
}

impl TypedConnection {
    /// Creates an edge; by convention the smaller id becomes the tail.
    pub fn undirected(a: impl Into<VertexId>, b: impl Into<VertexId>) -> Self {
        let conn = Connection::new(a, b).normalized();
        Self {
            tail: conn.tail,
            head: conn.head,
            kind: MixedConnectionType::Undirected,
        }
    }

    /// Creates an arc from `tail` to `head`.
    pub fn directed(tail: impl Into<VertexId>, head: impl Into<VertexId>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
            kind: MixedConnectionType::Directed,
        }
    }

    /// Returns the untyped endpoint pair.
    pub fn connection(&self) -> Connection {
        Connection {
            tail: self.tail,
            head: self.head,
        }
    }
}

impl fmt::Display for TypedConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.kind {
            MixedConnectionType::Undirected => "--",
            MixedConnectionType::Directed => "->",
            MixedConnectionType::DirectedReversed => "<-",
            MixedConnectionType::None => "><",
        };
        write!(f, "{}{}{}", self.tail, separator, self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_connection_is_normalized() {
        let conn = TypedConnection::undirected(5, 2);
        assert_eq!(conn.tail, VertexId::from(2));
        assert_eq!(conn.head, VertexId::from(5));
        assert_eq!(conn.to_string(), "2--5");
    }

    #[test]
    fn reversed_type_round_trips() {
        for kind in [
            MixedConnectionType::None,
            MixedConnectionType::Undirected,
            MixedConnectionType::Directed,
            MixedConnectionType::DirectedReversed,
        ] {
            assert_eq!(kind.reversed().reversed(), kind);
        }
        assert_eq!(
            MixedConnectionType::Directed.reversed(),
            MixedConnectionType::DirectedReversed
        );
    }
}
