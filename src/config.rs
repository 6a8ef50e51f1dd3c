//! Server Configuration
//!
//! All settings come from environment variables with prototype-friendly
//! defaults, so the server starts with no setup at all.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MOCK_DATA_PATH: &str = "data/combined_mock_data.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Runtime settings for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Location of the combined mock data document
    pub mock_data_path: PathBuf,
    /// Origins allowed by the CORS layer (the React dev server by default)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mock_data_path: PathBuf::from(DEFAULT_MOCK_DATA_PATH),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `MOCK_DATA_PATH` and `CORS_ORIGINS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or unparsable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let mock_data_path = lookup("MOCK_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.mock_data_path);
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        Self {
            host,
            port,
            mock_data_path,
            cors_origins,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
