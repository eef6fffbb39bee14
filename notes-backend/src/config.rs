use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Interface the HTTP listener binds to
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    /// Path of the SQLite database file
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "NotesDB";
    pub const DB_POOL_SIZE: u32 = crate::db::sqlite::DEFAULT_POOL_SIZE;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub db_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("[CONFIG] Invalid {}={:?}, using {}", env_vars::PORT, raw, defaults::PORT);
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        let db_pool_size = match lookup(env_vars::DB_POOL_SIZE) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!(
                        "[CONFIG] Invalid {}={:?}, using {}",
                        env_vars::DB_POOL_SIZE,
                        raw,
                        defaults::DB_POOL_SIZE
                    );
                    defaults::DB_POOL_SIZE
                }
            },
            None => defaults::DB_POOL_SIZE,
        };

        Self {
            port,
            bind_address: lookup(env_vars::BIND_ADDRESS)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            database_url: lookup(env_vars::DATABASE_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            db_pool_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.database_url, "NotesDB");
        assert_eq!(config.db_pool_size, defaults::DB_POOL_SIZE);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (env_vars::PORT, "9090"),
            (env_vars::BIND_ADDRESS, "127.0.0.1"),
            (env_vars::DATABASE_URL, "./.db/notes.db"),
            (env_vars::DB_POOL_SIZE, "8"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.database_url, "./.db/notes.db");
        assert_eq!(config.db_pool_size, 8);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[(env_vars::PORT, "eighty"), (env_vars::DB_POOL_SIZE, "0")]);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.db_pool_size, defaults::DB_POOL_SIZE);
    }
}
