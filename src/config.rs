use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::database::{seed, ActivityRegistry};
use crate::error::Result;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// JSON seed replacing the built-in activities.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ACTIVITIES_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, fallback = DEFAULT_PORT, "PORT is not a valid port number");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: lookup("ACTIVITIES_SEED")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Address tried when `addr` is already taken.
    pub fn fallback_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port.wrapping_add(1)).parse()
    }

    pub fn build_registry(&self) -> Result<ActivityRegistry> {
        let seed = match &self.seed_path {
            Some(path) => seed::load_seed_file(path)?,
            None => seed::default_seed(),
        };
        ActivityRegistry::from_seed(seed)
    }
}
