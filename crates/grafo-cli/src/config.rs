use std::error::Error;
use std::fs;
use std::path::Path;

use grafo_graph::{GraphConfig, GraphKind, Storage};
use serde::Deserialize;

/// Settings read from the optional `--config` YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub graph: GraphConfig,
    pub dot: DotOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Name written after `digraph`/`graph`.
    pub name: String,
    /// Label vertices with their ids.
    pub labels: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "messages".to_owned(),
            labels: true,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<CliConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let raw = fs::read_to_string(path)?;
    let config: CliConfig = serde_yaml::from_str(&raw)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolves the graph description for `input`, flags first, then the config
/// file, then the file extension.
pub fn resolve_graph(
    config: &CliConfig,
    input: &Path,
    kind: Option<GraphKind>,
    capacity: Option<usize>,
) -> Result<GraphConfig, Box<dyn Error>> {
    let kind = kind
        .or(config.graph.kind)
        .or_else(|| GraphKind::from_path(input))
        .ok_or_else(|| {
            format!(
                "cannot tell the graph kind of {}; use --kind or a .dgr/.ugr/.mgr extension",
                input.display()
            )
        })?;
    let storage = match capacity {
        Some(capacity) => Storage::Matrix { capacity },
        None => config.graph.storage,
    };
    Ok(GraphConfig {
        kind: Some(kind),
        storage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let config: CliConfig = serde_yaml::from_str(
            "graph:\n  kind: mixed\n  storage:\n    backend: matrix\n    capacity: 8\n",
        )
        .unwrap();
        assert_eq!(config.graph.kind, Some(GraphKind::Mixed));
        assert_eq!(config.graph.storage, Storage::Matrix { capacity: 8 });
        assert_eq!(config.dot.name, "messages");
        assert!(config.dot.labels);
    }

    #[test]
    fn flags_override_config_and_extension() {
        let config = CliConfig::default();
        let resolved =
            resolve_graph(&config, Path::new("g.ugr"), Some(GraphKind::Directed), Some(4))
                .unwrap();
        assert_eq!(resolved.kind, Some(GraphKind::Directed));
        assert_eq!(resolved.storage, Storage::Matrix { capacity: 4 });

        let resolved = resolve_graph(&config, Path::new("g.ugr"), None, None).unwrap();
        assert_eq!(resolved.kind, Some(GraphKind::Undirected));
        assert_eq!(resolved.storage, Storage::Map);

        assert!(resolve_graph(&config, Path::new("g.txt"), None, None).is_err());
    }
}
