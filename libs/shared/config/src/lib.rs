use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_JWT_SECRET: &str = "default-secret-key";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultJwtSecret,

    #[error("Unknown storage backend: {0}")]
    UnknownStorageBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::UnknownStorageBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub mongo_uri: String,
    pub database_name: String,
    pub storage_backend: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub otp_ttl_minutes: i64,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub razorpay_base_url: String,
    pub payment_currency: String,
    pub shutdown_timeout_secs: u64,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{} not set, using default", key);
        default.to_string()
    })
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            port: parsed_or("PORT", 8080),
            environment: var_or("ENVIRONMENT", "development"),
            mongo_uri: env::var("MONGO_URI")
                .or_else(|_| env::var("MONGODB_URI"))
                .unwrap_or_else(|_| {
                    warn!("MONGO_URI not set, using local MongoDB");
                    "mongodb://localhost:27017".to_string()
                }),
            database_name: env::var("DB_NAME")
                .or_else(|_| env::var("MONGODB_DATABASE"))
                .unwrap_or_else(|_| {
                    warn!("DB_NAME not set, using default");
                    "hsb_backend".to_string()
                }),
            storage_backend: env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
            jwt_secret: var_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            jwt_expiry_hours: parsed_or("JWT_EXPIRY_HOURS", 168),
            otp_ttl_minutes: parsed_or("OTP_TTL_MINUTES", 10),
            razorpay_key_id: env::var("RAZORPAY_KEY").unwrap_or_else(|_| {
                warn!("RAZORPAY_KEY not set, using empty value");
                String::new()
            }),
            razorpay_key_secret: env::var("RAZORPAY_SECRET").unwrap_or_else(|_| {
                warn!("RAZORPAY_SECRET not set, using empty value");
                String::new()
            }),
            razorpay_base_url: env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com/v1".to_string()),
            payment_currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
            shutdown_timeout_secs: parsed_or("SHUTDOWN_TIMEOUT_SECS", 10),
        };

        if !config.is_payment_configured() {
            warn!("Payment gateway not configured - booking orders will be rejected");
        }

        config
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn is_payment_configured(&self) -> bool {
        !self.razorpay_key_id.is_empty() && !self.razorpay_key_secret.is_empty()
    }

    pub fn storage(&self) -> Result<StorageBackend, ConfigError> {
        self.storage_backend.parse()
    }

    /// Rejects configurations that must not be used to start the server.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage()?;

        if self.is_production() && self.jwt_secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::DefaultJwtSecret);
        }

        if self.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("Using the default JWT secret; set JWT_SECRET outside development");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
