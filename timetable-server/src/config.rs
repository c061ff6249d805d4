//! Feed and server configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::domain::Direction;

/// Environment variable overriding the feed base directory.
pub const DATA_DIR_ENV: &str = "TIMETABLE_DATA_DIR";

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "TIMETABLE_ADDR";

/// Environment variable overriding the static asset directory.
pub const STATIC_DIR_ENV: &str = "TIMETABLE_STATIC_DIR";

/// A feed file and the direction its services run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFeed {
    /// Path relative to [`FeedConfig::base_dir`] (absolute paths are used as-is).
    pub path: PathBuf,
    pub direction: Direction,
}

impl SourceFeed {
    pub fn new(path: impl Into<PathBuf>, direction: Direction) -> Self {
        Self {
            path: path.into(),
            direction,
        }
    }
}

/// The set of feed files merged into one index.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Directory feed paths are resolved against.
    pub base_dir: PathBuf,

    /// Feeds in merge order.
    pub sources: Vec<SourceFeed>,
}

impl FeedConfig {
    /// Create a config from a base directory and sources.
    pub fn new(base_dir: impl Into<PathBuf>, sources: Vec<SourceFeed>) -> Self {
        Self {
            base_dir: base_dir.into(),
            sources,
        }
    }

    /// Default sources, with the base directory taken from
    /// `TIMETABLE_DATA_DIR` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV)
            && !dir.is_empty()
        {
            config.base_dir = PathBuf::from(dir);
        }
        config
    }

    /// Set a different base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Full path of a source feed.
    pub fn resolve(&self, source: &SourceFeed) -> PathBuf {
        self.base_dir.join(&source.path)
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(
            "opendata",
            vec![
                SourceFeed::new("fukutetsu_kudari.csv", Direction::Down),
                SourceFeed::new("fukutetsu_nobori.csv", Direction::Up),
            ],
        )
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Defaults, overridden by `TIMETABLE_ADDR` / `TIMETABLE_STATIC_DIR`.
    ///
    /// An unparseable address falls back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(addr) = std::env::var(ADDR_ENV).ok().and_then(|a| a.parse().ok()) {
            config.addr = addr;
        }
        if let Ok(dir) = std::env::var(STATIC_DIR_ENV)
            && !dir.is_empty()
        {
            config.static_dir = PathBuf::from(dir);
        }
        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feed_config() {
        let config = FeedConfig::default();
        assert_eq!(config.base_dir(), Path::new("opendata"));
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].direction, Direction::Down);
        assert_eq!(config.sources[1].direction, Direction::Up);
    }

    #[test]
    fn resolve_joins_base_dir() {
        let config = FeedConfig::default().with_base_dir("/srv/feeds");
        assert_eq!(
            config.resolve(&config.sources[0]),
            PathBuf::from("/srv/feeds/fukutetsu_kudari.csv")
        );
    }

    #[test]
    fn absolute_source_paths_win() {
        let config = FeedConfig::new(
            "opendata",
            vec![SourceFeed::new("/tmp/other.csv", Direction::Up)],
        );
        assert_eq!(
            config.resolve(&config.sources[0]),
            PathBuf::from("/tmp/other.csv")
        );
    }

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
