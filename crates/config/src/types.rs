use serde::Deserialize;
use std::{collections::HashMap, env};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub avatar: AvatarSettings,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            avatar: AvatarSettings::from_env()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL advertised in the OpenAPI `servers` list.
    /// Derived from host and port when not set.
    #[serde(default)]
    pub public_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9090
}

impl ServerConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| default_port().to_string())
                .parse()
                .map_err(|_| "SERVER_PORT must be a valid port number")?,
            public_url: env::var("SERVER_PUBLIC_URL").ok(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL clients should use to reach the API, always ending in `/`
    pub fn advertised_url(&self) -> String {
        match &self.public_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{url}/"),
            None => format!("http://localhost:{}/", self.port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: None,
        }
    }
}

/// Logging Configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl LoggingConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, String> {
        let mut modules = HashMap::new();

        // Load module-specific log levels
        if let Ok(level) = env::var("LOG_MODULE_API") {
            modules.insert("api".to_string(), level);
        }
        if let Ok(level) = env::var("LOG_MODULE_SERVICES") {
            modules.insert("services".to_string(), level);
        }

        Ok(Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            format: env::var("LOG_FORMAT").unwrap_or_else(|_| default_log_format()),
            modules,
        })
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`, e.g. `info,api=debug`
    pub fn filter_directive(&self) -> String {
        let mut filter = self.level.clone();

        // Sorted so the directive is stable regardless of map order
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        for (module, level) in modules {
            filter.push_str(&format!(",{module}={level}"));
        }

        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut modules = HashMap::new();
        modules.insert("api".to_string(), "debug".to_string());
        modules.insert("services".to_string(), "debug".to_string());

        Self {
            level: default_log_level(),
            format: default_log_format(),
            modules,
        }
    }
}

/// Avatar endpoint behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvatarSettings {
    /// Reject query values that don't match the documented patterns
    /// instead of silently falling back to defaults.
    #[serde(default)]
    pub strict_validation: bool,
}

impl AvatarSettings {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            strict_validation: env::var("AVATAR_STRICT_VALIDATION")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| "AVATAR_STRICT_VALIDATION must be true or false")?,
        })
    }
}
