use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable that overrides `llm.endpoint` when set.
pub const ENDPOINT_ENV: &str = "ARK_API_URL";

const DEFAULT_ENDPOINT: &str = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Full chat-completions URL (OpenAI-compatible)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,

    /// Env var holding the API key; "none" for keyless endpoints
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,

    /// Request deadline in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Option<u64> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(self.timeout_secs)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Target language identifier (see `algoskel list`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Skeleton completeness, 0-100
    #[serde(default = "default_scaffold_level")]
    pub scaffold_level: u32,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Natural language for comments and descriptions in generated files
    #[serde(default = "default_commentary_language")]
    pub commentary_language: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            scaffold_level: default_scaffold_level(),
            output_dir: default_output_dir(),
            commentary_language: default_commentary_language(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "deepseek-r1-250120".to_string()
}

fn default_api_key_env() -> Option<String> {
    Some("ARK_API_KEY".to_string())
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_language() -> String {
    "go".to_string()
}

fn default_scaffold_level() -> u32 {
    30
}

fn default_output_dir() -> String {
    "leetcode_practice".to_string()
}

fn default_commentary_language() -> String {
    "English".to_string()
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths,
    /// then apply environment overrides.
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_file(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("failed to load config from {}", config_path));
        }

        // Try working directory first (per-project config)
        let local = Path::new("algoskel.toml");
        if local.exists() {
            debug!("Loading config from ./algoskel.toml");
            return Self::load_from_path(local)
                .with_context(|| format!("failed to load config from {}", local.display()));
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("algoskel").join("config.toml");
            if config_path.exists() {
                debug!("Loading config from {:?}", config_path);
                return Self::load_from_path(&config_path).with_context(|| {
                    format!("failed to load config from {}", config_path.display())
                });
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                debug!("Endpoint overridden by {}", ENDPOINT_ENV);
                self.llm.endpoint = url.trim().to_string();
            }
        }
    }

    /// Get API key from environment variable specified in config
    pub fn get_api_key(&self) -> Result<String> {
        match &self.llm.api_key_env {
            Some(env_var) => {
                // Special case: "none" means no API key needed (local endpoints)
                if env_var.to_lowercase() == "none" {
                    return Ok(String::new());
                }

                env::var(env_var).map_err(|_| {
                    anyhow::anyhow!(
                        "API key not found in environment variable: {} (export {}='<your key>')",
                        env_var,
                        env_var
                    )
                })
            }
            None => Ok(String::new()), // No API key needed
        }
    }
}
