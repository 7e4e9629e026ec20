use std::path::PathBuf;

/// Application configuration and constants
pub struct Config {
    pub entries_dir: PathBuf,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            entries_dir: PathBuf::from("entries"),
            port: 5004,
            host: "0.0.0.0".to_string(),
        }
    }

    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::new();
        let entries_dir = std::env::var("FOLIO_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.entries_dir);
        let port = std::env::var("FOLIO_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let host = std::env::var("FOLIO_HOST").unwrap_or(defaults.host);

        Self { entries_dir, port, host }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        let ip = self
            .host
            .parse()
            .unwrap_or(std::net::IpAddr::from([0, 0, 0, 0]));
        std::net::SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
