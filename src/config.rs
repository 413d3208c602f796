use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// How a request target is mapped onto the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    /// Only `/` resolves (to `index.html`); every other target is a 404.
    #[default]
    IndexOnly,
    /// Any regular file under the document root can be served.
    DocumentRoot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    pub buffer_size: usize,
    pub resolve_mode: ResolveMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:80".to_string(),
            document_root: PathBuf::from("server_root"),
            buffer_size: 512,
            resolve_mode: ResolveMode::IndexOnly,
        }
    }
}

impl Config {
    /// Defaults, then the YAML file named by `SERVER_CONFIG`, then the
    /// `LISTEN` and `SERVER_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("SERVER_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("SERVER_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.buffer_size == 0 {
            anyhow::bail!("buffer_size must be greater than zero");
        }
        Ok(())
    }
}
