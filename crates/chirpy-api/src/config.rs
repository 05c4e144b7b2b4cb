use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use chirpy_filter::DEFAULT_BLOCKLIST;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Directory served under `/app`.
    pub static_dir: PathBuf,
    /// Deployment platform. `/admin/reset` is only open on `dev` when
    /// `require_dev_for_reset` is set.
    pub platform: String,
    /// Maximum chirp length in characters, checked before censoring.
    pub max_body_length: usize,
    pub require_dev_for_reset: bool,
    pub blocklist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            db_path: "chirpy.db".into(),
            static_dir: "./public/".into(),
            platform: "prod".into(),
            max_body_length: 140,
            require_dev_for_reset: true,
            blocklist: DEFAULT_BLOCKLIST.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("CHIRPY_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("CHIRPY_PORT") {
            config.port = port.trim().parse().with_context(|| format!("invalid CHIRPY_PORT '{}'", port))?;
        }
        if let Some(path) = lookup("CHIRPY_DB_PATH") {
            config.db_path = path.into();
        }
        if let Some(dir) = lookup("CHIRPY_STATIC_DIR") {
            config.static_dir = dir.into();
        }
        if let Some(platform) = lookup("PLATFORM") {
            config.platform = platform.trim().to_string();
        }
        if let Some(max) = lookup("CHIRPY_MAX_BODY_LENGTH") {
            config.max_body_length = max
                .trim()
                .parse()
                .with_context(|| format!("invalid CHIRPY_MAX_BODY_LENGTH '{}'", max))?;
        }
        if let Some(flag) = lookup("CHIRPY_REQUIRE_DEV_FOR_RESET") {
            config.require_dev_for_reset = parse_bool(&flag)
                .with_context(|| format!("invalid CHIRPY_REQUIRE_DEV_FOR_RESET '{}'", flag))?;
        }
        if let Some(words) = lookup("CHIRPY_BLOCKLIST") {
            config.blocklist = words.split(',').map(|w| w.trim().to_string()).filter(|w| !w.is_empty()).collect();
        }

        Ok(config)
    }

    pub fn reset_allowed(&self) -> bool {
        !self.require_dev_for_reset || self.platform == "dev"
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
