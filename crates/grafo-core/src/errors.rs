//! Structured error types shared across grafo crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::VertexId;

/// Structured payload attached to every [`GraphError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, capacities, input lines, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Underlying error this one wraps, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<GraphError>>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
            cause: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Records the error this payload wraps.
    pub fn with_cause(mut self, cause: GraphError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Canonical error type for the grafo engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum GraphError {
    /// A vertex was added twice.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(ErrorInfo),
    /// A connection of the same kind already links the two vertices.
    #[error("duplicate connection: {0}")]
    DuplicateConnection(ErrorInfo),
    /// An operation required a vertex that is not part of the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(ErrorInfo),
    /// A fixed-capacity backend ran out of vertex slots.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(ErrorInfo),
    /// A weight function returned a negative value where it is forbidden.
    #[error("negative weight: {0}")]
    NegativeWeight(ErrorInfo),
    /// A priority queue was drained past its last item.
    #[error("empty queue: {0}")]
    EmptyQueue(ErrorInfo),
    /// A connection or vertex scheduled for removal does not exist.
    #[error("not found: {0}")]
    NotFound(ErrorInfo),
    /// The backend does not implement the requested operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(ErrorInfo),
    /// Line-format input could not be parsed.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Reading or writing a stream failed.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        if let Some(cause) = &self.cause {
            write!(f, " | caused by: {cause}")?;
        }
        Ok(())
    }
}

impl GraphError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GraphError::DuplicateVertex(info)
            | GraphError::DuplicateConnection(info)
            | GraphError::UnknownVertex(info)
            | GraphError::CapacityExceeded(info)
            | GraphError::NegativeWeight(info)
            | GraphError::EmptyQueue(info)
            | GraphError::NotFound(info)
            | GraphError::UnsupportedOperation(info)
            | GraphError::Parse(info)
            | GraphError::Io(info) => info,
        }
    }

    fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            GraphError::DuplicateVertex(info)
            | GraphError::DuplicateConnection(info)
            | GraphError::UnknownVertex(info)
            | GraphError::CapacityExceeded(info)
            | GraphError::NegativeWeight(info)
            | GraphError::EmptyQueue(info)
            | GraphError::NotFound(info)
            | GraphError::UnsupportedOperation(info)
            | GraphError::Parse(info)
            | GraphError::Io(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry, keeping the variant unchanged.
    ///
    /// An existing entry with the same key is kept, so the innermost operation
    /// that reported a value wins.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.info_mut()
            .context
            .entry(key.into())
            .or_insert_with(|| value.to_string());
        self
    }

    /// Sets a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.info_mut().hint = Some(hint.into());
        self
    }

    /// Error raised when adding a vertex that already exists.
    pub fn duplicate_vertex(vertex: VertexId) -> Self {
        GraphError::DuplicateVertex(
            ErrorInfo::new("duplicate-vertex", "vertex already exists")
                .with_context("vertex", vertex.to_string()),
        )
    }

    /// Error raised when a connection between two vertices already exists.
    pub fn duplicate_connection(message: impl Into<String>) -> Self {
        GraphError::DuplicateConnection(ErrorInfo::new("duplicate-connection", message))
    }

    /// Error raised when a vertex is not part of the graph.
    pub fn unknown_vertex(vertex: VertexId) -> Self {
        GraphError::UnknownVertex(
            ErrorInfo::new("unknown-vertex", "vertex does not exist")
                .with_context("vertex", vertex.to_string()),
        )
    }

    /// Error raised when a fixed-capacity graph cannot accept more vertices.
    pub fn capacity_exceeded(capacity: usize, required: usize) -> Self {
        GraphError::CapacityExceeded(
            ErrorInfo::new("capacity-exceeded", "not enough free vertex slots")
                .with_context("capacity", capacity.to_string())
                .with_context("required", required.to_string()),
        )
    }

    /// Error raised when a weight function yields a negative weight.
    pub fn negative_weight(tail: VertexId, head: VertexId, weight: f64) -> Self {
        GraphError::NegativeWeight(
            ErrorInfo::new("negative-weight", "negative connection weight detected")
                .with_context("tail", tail.to_string())
                .with_context("head", head.to_string())
                .with_context("weight", weight.to_string())
                .with_hint("Dijkstra search requires non-negative weights; use bellman_ford"),
        )
    }

    /// Error raised when taking from an empty priority queue.
    pub fn empty_queue() -> Self {
        GraphError::EmptyQueue(ErrorInfo::new("empty-queue", "priority queue is empty"))
    }

    /// Error raised when a connection or vertex to remove is missing.
    pub fn not_found(message: impl Into<String>) -> Self {
        GraphError::NotFound(ErrorInfo::new("not-found", message))
    }

    /// Error raised when a backend cannot perform the requested operation.
    pub fn unsupported(message: impl Into<String>) -> Self {
        GraphError::UnsupportedOperation(ErrorInfo::new("unsupported-operation", message))
    }

    /// Error raised by the line-format reader.
    pub fn parse(message: impl Into<String>) -> Self {
        GraphError::Parse(ErrorInfo::new("parse", message))
    }

    /// Wraps `cause` in a parse error, keeping the cause intact.
    pub fn parse_caused_by(message: impl Into<String>, cause: GraphError) -> Self {
        GraphError::Parse(ErrorInfo::new("parse", message).with_cause(cause))
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(
            ErrorInfo::new("io", err.to_string()).with_context("io_kind", format!("{:?}", err.kind())),
        )
    }
}
