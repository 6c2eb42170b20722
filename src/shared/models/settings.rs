use std::{env, fs, io, path::Path};

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub public_base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
    #[error("DATABASE_URL is not set; define it in the environment, .env.local or settings.json")]
    MissingDatabaseUrl,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_url: None,
            public_base_url: None,
        }
    }
}

impl Settings {
    /// `settings.json` from the working directory, then environment overrides.
    pub fn load() -> Result<Settings, ConfigError> {
        Self::load_from(SETTINGS_FILENAME)?.with_overrides(|key| env::var(key).ok())
    }

    /// Reads a settings file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(source) => {
                return Err(ConfigError::Read { path: path.display().to_string(), source })
            }
        };
        serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.display().to_string(), source })
    }

    /// Applies `DATABASE_URL`, `PUBLIC_BASE_URL`, `PORT` and `BIND_ADDRESS`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(url) = lookup("PUBLIC_BASE_URL") {
            self.public_base_url = Some(url);
        }
        if let Some(binding) = lookup("BIND_ADDRESS") {
            self.tcp_socket_binding = binding;
        }
        if let Some(port) = lookup("PORT") {
            self.tcp_socket_port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        Ok(self)
    }

    /// The store connection string. Serving without one is not allowed.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Base URL for self-calls: the configured override, else localhost on our port.
    pub fn base_url(&self) -> String {
        match self.public_base_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("http://localhost:{}", self.tcp_socket_port),
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.tcp_socket_binding, self.tcp_socket_port)
    }
}
