use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::DEFAULT_HEADER_SCAN_LINES;
use crate::radar::RadarWeights;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "nutrigene";
const APPLICATION: &str = "nutrigene-tools";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub meal_plan: MealPlanConfig,
    #[serde(default)]
    pub radar: RadarWeights,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Lines inspected for a provider banner, column header or data row before giving up.
    #[serde(default = "default_header_scan_lines")]
    pub header_scan_lines: usize,
}

fn default_header_scan_lines() -> usize {
    DEFAULT_HEADER_SCAN_LINES
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_scan_lines: default_header_scan_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key; the key itself is never written to disk.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Overrides the per-user data directory for saved sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!(path = %config_path.display(), "ignoring config: {:#}", e),
                }
            }
        }
        Config::default()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(proj_dirs) = project_dirs() {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;

            let config_path = config_dir.join("config.toml");
            let content = toml::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// Directory holding persisted sessions.
    pub fn session_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.store.dir {
            return Ok(dir.clone());
        }
        let proj_dirs = project_dirs().context("no home directory to store sessions in")?;
        Ok(proj_dirs.data_dir().join("sessions"))
    }
}
