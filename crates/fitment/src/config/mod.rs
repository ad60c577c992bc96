use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::matcher::EngineConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: load_engine_tuning()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn load_engine_tuning() -> Result<EngineConfig, ConfigError> {
    let defaults = EngineConfig::default();

    Ok(EngineConfig {
        geometry_weight: tuning("FITMENT_GEOMETRY_WEIGHT", defaults.geometry_weight)?,
        corner_radius_epsilon_mm: tuning(
            "FITMENT_CORNER_RADIUS_EPSILON_MM",
            defaults.corner_radius_epsilon_mm,
        )?,
        cutout_alignment_epsilon: tuning(
            "FITMENT_CUTOUT_ALIGNMENT_EPSILON",
            defaults.cutout_alignment_epsilon,
        )?,
        display_exact_threshold: tuning(
            "FITMENT_DISPLAY_EXACT_THRESHOLD",
            defaults.display_exact_threshold,
        )?,
        housing_slack_mm: tuning("FITMENT_HOUSING_SLACK_MM", defaults.housing_slack_mm)?,
        ..defaults
    })
}

fn tuning(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidTuning { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTuning { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTuning { key, value } => {
                write!(f, "{key} must be a non-negative number (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTuning { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    const TUNING_KEYS: [&str; 5] = [
        "FITMENT_GEOMETRY_WEIGHT",
        "FITMENT_CORNER_RADIUS_EPSILON_MM",
        "FITMENT_CUTOUT_ALIGNMENT_EPSILON",
        "FITMENT_DISPLAY_EXACT_THRESHOLD",
        "FITMENT_HOUSING_SLACK_MM",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        for key in TUNING_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn engine_tuning_overrides_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FITMENT_GEOMETRY_WEIGHT", "0.35");
        env::set_var("FITMENT_DISPLAY_EXACT_THRESHOLD", " 0.75 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.engine.geometry_weight, 0.35);
        assert_eq!(config.engine.display_exact_threshold, 0.75);
        assert_eq!(config.engine.housing_slack_mm, 0.5);
        reset_env();
    }

    #[test]
    fn rejects_invalid_tuning() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FITMENT_HOUSING_SLACK_MM", "-1");
        let err = AppConfig::load().expect_err("negative slack rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidTuning {
                key: "FITMENT_HOUSING_SLACK_MM",
                ..
            }
        ));
        assert!(err.to_string().contains("'-1'"));
        reset_env();
    }
}
