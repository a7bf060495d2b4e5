use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log = LogConfig {
            filter: lookup("RUST_LOG").unwrap_or_else(|| "campus_users=info".into()),
            json: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };
        Self { log }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.log.filter, "campus_users=info");
        assert!(!cfg.log.json);
    }

    #[test]
    fn reads_filter_and_json_format() {
        let env: HashMap<&str, &str> =
            HashMap::from([("RUST_LOG", "campus_users=debug"), ("LOG_FORMAT", "json")]);
        let cfg = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.log.filter, "campus_users=debug");
        assert!(cfg.log.json);
    }
}
