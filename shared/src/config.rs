use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // 環境変数の読み出し元を差し替えられるようにしておく（テスト用）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} is not set"));

        let database = DatabaseConfig {
            host: required("DATABASE_HOST")?,
            port: required("DATABASE_PORT")?
                .parse::<u16>()
                .context("parse DATABASE_PORT")?,
            username: required("DATABASE_USERNAME")?,
            password: required("DATABASE_PASSWORD")?,
            database: required("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: required("REDIS_HOST")?,
            port: required("REDIS_PORT")?
                .parse::<u16>()
                .context("parse REDIS_PORT")?,
        };
        let auth = AuthConfig {
            ttl: required("AUTH_TOKEN_TTL")?
                .parse::<u64>()
                .context("parse AUTH_TOKEN_TTL")?,
        };
        let server = ServerConfig {
            port: match lookup("PORT") {
                Some(port) => port.parse::<u16>().context("parse PORT")?,
                None => 8080,
            },
        };
        let payment = PaymentConfig {
            scheme: lookup("UPI_SCHEME").unwrap_or_else(|| "upi".into()),
        };

        Ok(Self {
            database,
            redis,
            auth,
            server,
            payment,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Lifetime of an access token in seconds.
    pub ttl: u64,
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct PaymentConfig {
    /// Scheme of the payment deep link, `upi` in production.
    pub scheme: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_HOST", "localhost"),
            ("DATABASE_PORT", "5432"),
            ("DATABASE_USERNAME", "app"),
            ("DATABASE_PASSWORD", "passwd"),
            ("DATABASE_NAME", "app"),
            ("REDIS_HOST", "localhost"),
            ("REDIS_PORT", "6379"),
            ("AUTH_TOKEN_TTL", "86400"),
        ])
    }

    #[test]
    fn optional_values_fall_back_to_defaults() -> anyhow::Result<()> {
        let env = base_env();
        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))?;

        assert_eq!(config.database.port, 5432);
        assert_eq!(config.auth.ttl, 86400);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.payment.scheme, "upi");
        Ok(())
    }

    #[test]
    fn missing_required_value_is_an_error() {
        let mut env = base_env();
        env.remove("REDIS_HOST");
        let res = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        let err = res.err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("REDIS_HOST is not set"));
    }

    #[test]
    fn malformed_port_is_an_error() {
        let mut env = base_env();
        env.insert("DATABASE_PORT", "five");
        assert!(AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).is_err());
    }
}
