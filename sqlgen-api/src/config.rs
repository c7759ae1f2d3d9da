use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub ollama: OllamaConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OllamaConfig {
    /// Used whenever a request carries no server URL
    pub default_url: String,
    /// Applies to every upstream call
    pub timeout_secs: u64,
    /// Used whenever a request carries no model name
    pub default_model: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataConfig {
    pub examples_path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5001,
            },
            ollama: OllamaConfig {
                default_url: sqlgen_llm_sdk::ollama::DEFAULT_BASE_URL.to_string(),
                timeout_secs: sqlgen_llm_sdk::ollama::DEFAULT_TIMEOUT.as_secs(),
                default_model: "phi4:14b".to_string(),
            },
            data: DataConfig {
                examples_path: PathBuf::from("data/examples.json"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
            cors: CorsConfig::default(),
        }
    }
}

impl OllamaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ApiConfig {
    /// Layer defaults, config files and `SQLGEN__*` environment variables
    ///
    /// With `explicit_path` the file must exist. Without it,
    /// `~/.config/sqlgen/api.toml` and then `./sqlgen.toml` are read when
    /// present, the latter taking precedence.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("ollama.default_url", defaults.ollama.default_url)?
            .set_default("ollama.timeout_secs", defaults.ollama.timeout_secs as i64)?
            .set_default("ollama.default_model", defaults.ollama.default_model)?
            .set_default(
                "data.examples_path",
                defaults.data.examples_path.to_string_lossy().to_string(),
            )?
            .set_default("logging.level", defaults.logging.level)?;

        builder = match explicit_path {
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder
                .add_source(File::from(get_config_path()).required(false))
                .add_source(File::from(PathBuf::from("sqlgen.toml")).required(false)),
        };

        let mut config: ApiConfig = builder
            .add_source(
                Environment::with_prefix("SQLGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.data.examples_path = expand_tilde(&config.data.examples_path);
        if let Some(file) = config.logging.file.take() {
            config.logging.file = Some(expand_tilde(&file));
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("sqlgen/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}
