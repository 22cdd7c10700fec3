//! Configuration for the graph endpoint.

use serde::Deserialize;

/// Connection settings for the downstream GraphQL endpoint.
///
/// Loaded from `annograph.toml` `[graph]` section or `ANNOGRAPH__`
/// environment variables; the `--endpoint` CLI flag overrides both.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080/graphql".to_string()
}

/// Load the graph config, falling back to defaults when no file or
/// environment source is present.
pub fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ANNOGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => match c.get::<GraphConfig>("graph") {
            Ok(graph) => graph,
            Err(_) => GraphConfig::default(),
        },
        Err(_) => GraphConfig::default(),
    }
}
