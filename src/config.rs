use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub database_min_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub database_connection_timeout: u64,

    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,

    #[serde(default = "default_wip_threshold")]
    pub analytics_wip_threshold: i64,
    #[serde(default = "default_overdue_threshold")]
    pub analytics_overdue_threshold: i64,
    #[serde(default = "default_completion_rate_floor")]
    pub analytics_completion_rate_floor: f64,
    #[serde(default = "default_resolution_days_ceiling")]
    pub analytics_resolution_days_ceiling: f64,

    #[serde(default = "default_metrics_refresh_interval")]
    pub metrics_refresh_interval_secs: u64,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Thresholds the insight rules compare board numbers against.
#[derive(Clone, Copy, Debug)]
pub struct AnalyticsConfig {
    pub wip_threshold: i64,
    pub overdue_threshold: i64,
    pub completion_rate_floor: f64,
    pub resolution_days_ceiling: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct MetricsWorkerConfig {
    pub refresh_interval_secs: u64,
}

// Default value functions
fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    5
}
fn default_connection_timeout() -> u64 {
    30
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_environment() -> String {
    "development".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_wip_threshold() -> i64 {
    10
}
fn default_overdue_threshold() -> i64 {
    0
}
fn default_completion_rate_floor() -> f64 {
    50.0
}
fn default_resolution_days_ceiling() -> f64 {
    7.0
}
fn default_metrics_refresh_interval() -> u64 {
    3600
} // 1 hour

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.database_max_connections == 0 {
            return Err(AppError::Config(
                "DATABASE_MAX_CONNECTIONS must be > 0".to_string(),
            ));
        }

        if self.database_min_connections > self.database_max_connections {
            return Err(AppError::Config(
                "DATABASE_MIN_CONNECTIONS cannot be greater than DATABASE_MAX_CONNECTIONS"
                    .to_string(),
            ));
        }

        if self.analytics_wip_threshold < 0 {
            return Err(AppError::Config(
                "ANALYTICS_WIP_THRESHOLD must be >= 0".to_string(),
            ));
        }

        if self.analytics_overdue_threshold < 0 {
            return Err(AppError::Config(
                "ANALYTICS_OVERDUE_THRESHOLD must be >= 0".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&self.analytics_completion_rate_floor) {
            return Err(AppError::Config(
                "ANALYTICS_COMPLETION_RATE_FLOOR must be between 0 and 100".to_string(),
            ));
        }

        if self.analytics_resolution_days_ceiling <= 0.0 {
            return Err(AppError::Config(
                "ANALYTICS_RESOLUTION_DAYS_CEILING must be > 0".to_string(),
            ));
        }

        if self.metrics_refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "METRICS_REFRESH_INTERVAL_SECS must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            min_connections: self.database_min_connections,
            connection_timeout: self.database_connection_timeout,
        }
    }

    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            host: self.server_host.clone(),
            port: self.server_port,
            cors_origins: self.cors_origins.clone(),
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }

    pub fn analytics(&self) -> AnalyticsConfig {
        AnalyticsConfig {
            wip_threshold: self.analytics_wip_threshold,
            overdue_threshold: self.analytics_overdue_threshold,
            completion_rate_floor: self.analytics_completion_rate_floor,
            resolution_days_ceiling: self.analytics_resolution_days_ceiling,
        }
    }

    pub fn metrics_worker(&self) -> MetricsWorkerConfig {
        MetricsWorkerConfig {
            refresh_interval_secs: self.metrics_refresh_interval_secs,
        }
    }
}

static EXPOSE_ERROR_DETAILS: OnceLock<bool> = OnceLock::new();

/// Set once at startup. Error responses include the underlying message only
/// when exposure is enabled; production builds turn it off.
pub fn set_error_detail_exposure(expose: bool) {
    let _ = EXPOSE_ERROR_DETAILS.set(expose);
}

pub fn expose_error_details() -> bool {
    EXPOSE_ERROR_DETAILS.get().copied().unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database_url: "postgres://localhost/taskboard".to_string(),
            database_max_connections: 10,
            database_min_connections: 1,
            database_connection_timeout: 30,
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_format: "json".to_string(),
            analytics_wip_threshold: 10,
            analytics_overdue_threshold: 0,
            analytics_completion_rate_floor: 50.0,
            analytics_resolution_days_ceiling: 7.0,
            metrics_refresh_interval_secs: 3600,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_pool_size_is_rejected() {
        let mut config = base_config();
        config.database_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_connections_cannot_exceed_max() {
        let mut config = base_config();
        config.database_min_connections = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_completion_rate_floor_must_be_a_percentage() {
        let mut config = base_config();
        config.analytics_completion_rate_floor = 101.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accessor_views_split_the_flat_config() {
        let config = base_config();
        assert_eq!(config.server_address(), "127.0.0.1:8000");
        assert!(!config.is_production());
        assert_eq!(config.analytics().wip_threshold, 10);
        assert_eq!(config.database().max_connections, 10);
    }
}
