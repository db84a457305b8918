use crate::Result;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3333;
const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Server configuration.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// Address to bind. By default this is 0.0.0.0:3333.
    pub listen: SocketAddr,
    /// Origin the frontend is served from, e.g. by `trunk serve`.
    pub origin: String,
    /// JSON file with foods to insert into an empty database.
    pub seed: Option<PathBuf>,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    listen: Option<SocketAddr>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            origin: DEFAULT_ORIGIN.to_string(),
            seed: None,
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}

impl Config {
    /// Read from `path` or return some defaults if it does not exist. A relative seed path is
    /// taken relative to the directory of `path`.
    pub fn new(path: &Path) -> Result<Self> {
        if path.exists() && path.is_file() {
            let content = std::fs::read_to_string(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Self::parse(&content, base)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(content: &str, base: &Path) -> Result<Self> {
        let config: Serialized = toml::from_str(content)?;

        Ok(Self {
            listen: config.listen.unwrap_or_else(default_listen),
            origin: config.origin.unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            seed: config.seed.map(|seed| base.join(seed)),
        })
    }
}
