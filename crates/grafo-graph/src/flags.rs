use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which connections a graph holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Arcs only.
    Directed,
    /// Edges only.
    Undirected,
    /// Arcs and edges.
    Mixed,
}

impl GraphKind {
    /// Maps a line-format file extension (`dgr`, `ugr`, `mgr`) to its kind.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "dgr" => Some(GraphKind::Directed),
            "ugr" => Some(GraphKind::Undirected),
            "mgr" => Some(GraphKind::Mixed),
            _ => None,
        }
    }

    /// Detects the kind from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// File extension used for this kind, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            GraphKind::Directed => "dgr",
            GraphKind::Undirected => "ugr",
            GraphKind::Mixed => "mgr",
        }
    }
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum Storage {
    /// Ordered adjacency maps; supports removal.
    #[default]
    Map,
    /// Packed triangular matrix of fixed capacity; grow-only.
    Matrix {
        /// Maximum number of vertices.
        capacity: usize,
    },
}

/// Describes the graph to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Graph kind; detected from the input file when absent.
    #[serde(default)]
    pub kind: Option<GraphKind>,
    /// Storage backend.
    #[serde(default)]
    pub storage: Storage,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            kind: None,
            storage: Storage::Map,
        }
    }
}
