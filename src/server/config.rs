use chrono::Duration;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
    pub log_dir: String,
    pub max_db_connections: u32,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    listen_addr: Option<String>,
    token_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    log_dir: Option<String>,
    max_db_connections: Option<u32>,
}

fn default_database_url() -> String {
    "sqlite://bookmarks.db?mode=rwc".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 10;

impl ServerConfig {
    /// Loads the configuration: TOML file (optional), then environment
    /// variables (and `.env`), which override the file.
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        // 1. Load from file (optional)
        let file_config: PartialServerConfig = if let Some(path_str) = config_path {
            let path = Path::new(path_str);
            if path.exists() {
                let contents = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
                toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))?
            } else {
                PartialServerConfig::default()
            }
        } else {
            PartialServerConfig::default()
        };

        // 2. Load from environment variables
        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))?;

        // 3. Merge: environment overrides file
        Self::merge(env_config, file_config)
    }

    fn merge(env_config: PartialServerConfig, file_config: PartialServerConfig) -> Result<Self, String> {
        let config = ServerConfig {
            database_url: env_config.database_url.or(file_config.database_url)
                .unwrap_or_else(default_database_url),
            jwt_secret: env_config.jwt_secret.or(file_config.jwt_secret)
                .filter(|s| !s.is_empty())
                .ok_or("JWT_SECRET is required")?,
            listen_addr: env_config.listen_addr.or(file_config.listen_addr)
                .unwrap_or_else(default_listen_addr),
            token_ttl_minutes: env_config.token_ttl_minutes.or(file_config.token_ttl_minutes)
                .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            bcrypt_cost: env_config.bcrypt_cost.or(file_config.bcrypt_cost)
                .unwrap_or(bcrypt::DEFAULT_COST),
            log_dir: env_config.log_dir.or(file_config.log_dir)
                .unwrap_or_else(default_log_dir),
            max_db_connections: env_config.max_db_connections.or(file_config.max_db_connections)
                .unwrap_or(DEFAULT_MAX_DB_CONNECTIONS),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.token_ttl_minutes <= 0 {
            return Err(format!(
                "TOKEN_TTL_MINUTES must be positive, got {}",
                self.token_ttl_minutes
            ));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(format!("BCRYPT_COST must be between 4 and 31, got {}", self.bcrypt_cost));
        }
        if self.max_db_connections == 0 {
            return Err("MAX_DB_CONNECTIONS must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::minutes(self.token_ttl_minutes)
    }
}

#[cfg(test)]
impl ServerConfig {
    pub fn for_tests() -> Self {
        ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            bcrypt_cost: 4,
            log_dir: "logs".to_string(),
            max_db_connections: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn with_secret(secret: &str) -> PartialServerConfig {
        PartialServerConfig {
            jwt_secret: Some(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_apply() {
        let config = ServerConfig::merge(with_secret("s3cret"), PartialServerConfig::default()).unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.database_url, "sqlite://bookmarks.db?mode=rwc");
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.token_ttl_minutes, 30);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.token_ttl(), Duration::minutes(30));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = PartialServerConfig {
            jwt_secret: Some("from-file".to_string()),
            listen_addr: Some("127.0.0.1:9000".to_string()),
            token_ttl_minutes: Some(5),
            ..Default::default()
        };
        let env = PartialServerConfig {
            token_ttl_minutes: Some(60),
            ..Default::default()
        };

        let config = ServerConfig::merge(env, file).unwrap();
        assert_eq!(config.jwt_secret, "from-file");
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.token_ttl_minutes, 60);
    }

    #[test]
    fn test_missing_or_empty_secret_is_rejected() {
        let missing = ServerConfig::merge(PartialServerConfig::default(), PartialServerConfig::default());
        assert_eq!(missing.unwrap_err(), "JWT_SECRET is required");

        let empty = ServerConfig::merge(with_secret(""), PartialServerConfig::default());
        assert!(empty.is_err());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let zero_ttl = PartialServerConfig {
            token_ttl_minutes: Some(0),
            ..with_secret("s")
        };
        assert!(ServerConfig::merge(zero_ttl, PartialServerConfig::default()).is_err());

        let weak_cost = PartialServerConfig {
            bcrypt_cost: Some(2),
            ..with_secret("s")
        };
        assert!(ServerConfig::merge(weak_cost, PartialServerConfig::default()).is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "jwt_secret = \"file-secret\"\ndatabase_url = \"postgres://localhost/bookmarks\"\nbcrypt_cost = 10"
        )
        .unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        let parsed: PartialServerConfig = toml::from_str(&contents).unwrap();
        let config = ServerConfig::merge(PartialServerConfig::default(), parsed).unwrap();

        assert_eq!(config.jwt_secret, "file-secret");
        assert_eq!(config.database_url, "postgres://localhost/bookmarks");
        assert_eq!(config.bcrypt_cost, 10);
    }
}
