use crate::utils::error::{ApiError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub data: Option<DataConfig>,
    pub search: Option<SearchConfig>,
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置。相對的資料路徑以設定檔所在目錄為基準。
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ApiError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            config.rebase_data_path(base);
        }
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApiError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn rebase_data_path(&mut self, base: &Path) {
        if let Some(raw) = self.data.as_mut().and_then(|d| d.path.as_mut()) {
            let candidate = PathBuf::from(raw.as_str());
            if candidate.is_relative() && !base.as_os_str().is_empty() {
                *raw = base.join(candidate).display().to_string();
            }
        }
    }

    pub fn bind(&self) -> Option<&str> {
        self.server.as_ref()?.bind.as_deref()
    }

    pub fn data_path(&self) -> Option<&str> {
        self.data.as_ref()?.path.as_deref()
    }

    pub fn default_limit(&self) -> Option<usize> {
        self.search.as_ref()?.default_limit
    }

    pub fn allowed_origins(&self) -> Option<&[String]> {
        self.cors.as_ref()?.allowed_origins.as_deref()
    }
}
