use serde::Deserialize;

/// Deployment environment, read from `ENV`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Keys read from the environment (or from Shuttle secrets).
const CONFIG_KEYS: &[&str] = &[
    "DATABASE_URL",
    "HOST",
    "PORT",
    "ALLOWED_ORIGINS",
    "ENV",
    "DB_MAX_CONNECTIONS",
];

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    /// Optional because Shuttle provisions the pool itself.
    pub database_url: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated list of origins, or `*` for any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

const fn default_db_max_connections() -> u32 {
    10
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Build a config from `(KEY, value)` pairs; unknown keys are ignored.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(
            vars.into_iter()
                .filter(|(key, _)| CONFIG_KEYS.contains(&key.as_str())),
        )
    }

    #[cfg(feature = "shuttle")]
    pub fn from_shuttle_secrets(
        secrets: &shuttle_runtime::SecretStore,
    ) -> Result<Self, envy::Error> {
        Self::from_vars(
            CONFIG_KEYS
                .iter()
                .filter_map(|key| secrets.get(key).map(|value| (key.to_string(), value))),
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `None` means any origin is allowed.
    pub fn parsed_allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            None
        } else {
            Some(origins)
        }
    }
}
