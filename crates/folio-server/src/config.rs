use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Server settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Built client bundle to serve for any non-API path.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("FOLIO_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("FOLIO_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .context("FOLIO_PORT must be a port number")?;
        let static_dir = lookup("FOLIO_STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, static_dir })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.static_dir, None);
        assert_eq!(config.addr().unwrap().port(), 5000);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("FOLIO_HOST", "127.0.0.1"),
            ("FOLIO_PORT", "8080"),
            ("FOLIO_STATIC_DIR", "dist/public"),
        ])
        .unwrap();
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist/public")));
    }

    #[test]
    fn empty_static_dir_is_ignored() {
        let config = config_from(&[("FOLIO_STATIC_DIR", "")]).unwrap();
        assert_eq!(config.static_dir, None);
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config_from(&[("FOLIO_PORT", "eighty")]).is_err());
        assert!(config_from(&[("FOLIO_HOST", "not a host")]).unwrap().addr().is_err());
    }
}
