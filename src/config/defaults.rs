//! Configuration default values
//!
//! This module contains all the default values for configuration options,
//! making them easily changeable in one central location.

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./job-board.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// GraphQL defaults
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_GRAPHIQL_ENABLED: bool = true;
pub const DEFAULT_DEPTH_LIMIT: usize = 16;
pub const DEFAULT_COMPLEXITY_LIMIT: usize = 256;

// Environment overrides, e.g. JOB_BOARD_DATABASE__URL
pub const ENV_PREFIX: &str = "JOB_BOARD_";
pub const ENV_SECTION_SEPARATOR: &str = "__";
