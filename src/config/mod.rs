use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub web: WebConfig,
    #[serde(default)]
    pub graphql: GraphQlConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
    /// Log every SQL statement at debug level
    #[serde(default = "default_sqlx_logging")]
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// GraphQL endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlConfig {
    /// Path the GraphQL endpoint is mounted on
    #[serde(default = "default_graphql_path")]
    pub path: String,
    /// Serve the GraphiQL IDE on GET requests to `path`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
    /// Maximum selection depth accepted per query
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,
    /// Maximum computed complexity accepted per query
    #[serde(default = "default_complexity_limit")]
    pub complexity_limit: usize,
}

fn default_sqlx_logging() -> bool {
    true
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// GraphQL defaults
fn default_graphql_path() -> String {
    DEFAULT_GRAPHQL_PATH.to_string()
}

fn default_graphiql() -> bool {
    DEFAULT_GRAPHIQL_ENABLED
}

fn default_depth_limit() -> usize {
    DEFAULT_DEPTH_LIMIT
}

fn default_complexity_limit() -> usize {
    DEFAULT_COMPLEXITY_LIMIT
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            path: default_graphql_path(),
            graphiql: default_graphiql(),
            depth_limit: default_depth_limit(),
            complexity_limit: default_complexity_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: Some(DEFAULT_MAX_CONNECTIONS),
                sqlx_logging: default_sqlx_logging(),
            },
            web: WebConfig {
                host: default_host(),
                port: default_port(),
            },
            graphql: GraphQlConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config_file`, layering environment overrides on top.
    ///
    /// A default file is written when none exists yet.
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if !std::path::Path::new(config_file).exists() {
            let contents = toml::to_string_pretty(&Self::default())?;
            std::fs::write(config_file, contents)
                .with_context(|| format!("Failed to write default config file: {config_file}"))?;
            info!("Created default config file: {}", config_file);
        }

        let config: Config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SECTION_SEPARATOR))
            .extract()
            .with_context(|| format!("Failed to load configuration from {config_file}"))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            anyhow::bail!("database.url must not be empty");
        }
        if self.database.max_connections == Some(0) {
            anyhow::bail!("database.max_connections must be at least 1");
        }
        if !self.graphql.path.starts_with('/') {
            anyhow::bail!("graphql.path must start with '/': {}", self.graphql.path);
        }
        if self.graphql.depth_limit == 0 || self.graphql.complexity_limit == 0 {
            anyhow::bail!("graphql depth and complexity limits must be non-zero");
        }
        Ok(())
    }
}
