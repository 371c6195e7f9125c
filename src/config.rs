use std::env;
use std::path::PathBuf;

use crate::database::activity_registry::CapacityPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity_policy: CapacityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            capacity_policy: CapacityPolicy::Unchecked,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ENFORCE_CAPACITY`, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let capacity_policy = match lookup("ENFORCE_CAPACITY").as_deref().map(parse_flag) {
            Some(true) => CapacityPolicy::Enforced,
            _ => CapacityPolicy::Unchecked,
        };

        Self {
            host,
            port,
            static_dir,
            capacity_policy,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
