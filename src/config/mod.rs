pub mod toml_config;

use crate::domain::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_socket_addr, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_PATH: &str = "data/universities.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "unisearch")]
#[command(about = "Read-only search API over a JSON collection of universities")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub bind: Option<String>,

    /// JSON file holding the university array
    #[arg(long)]
    pub data_path: Option<String>,

    /// Page size when the request has no `limit`
    #[arg(long)]
    pub default_limit: Option<usize>,

    /// Allowed CORS origins (comma separated); any origin when empty
    #[arg(long, value_delimiter = ',')]
    pub allow_origin: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// 合併後的最終配置：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind: String,
    pub data_path: String,
    pub default_limit: usize,
    pub allowed_origins: Vec<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            default_limit: DEFAULT_LIMIT,
            allowed_origins: Vec::new(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: CliConfig, file: &TomlConfig) -> Self {
        let defaults = Self::default();

        let allowed_origins = if !cli.allow_origin.is_empty() {
            cli.allow_origin
        } else {
            file.allowed_origins()
                .map(<[String]>::to_vec)
                .unwrap_or(defaults.allowed_origins)
        };

        Self {
            bind: cli
                .bind
                .or_else(|| file.bind().map(str::to_string))
                .unwrap_or(defaults.bind),
            data_path: cli
                .data_path
                .or_else(|| file.data_path().map(str::to_string))
                .unwrap_or(defaults.data_path),
            default_limit: cli
                .default_limit
                .or(file.default_limit())
                .unwrap_or(defaults.default_limit),
            allowed_origins,
            verbose: cli.verbose,
            json_logs: cli.json_logs,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind", &self.bind)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        validate_path("data.path", &self.data_path)?;
        validate_range("search.default_limit", self.default_limit, 1, MAX_LIMIT)?;
        for origin in &self.allowed_origins {
            validate_non_empty_string("cors.allowed_origins", origin)?;
        }
        Ok(())
    }
}
