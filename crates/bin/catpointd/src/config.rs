//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `catpoint.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::ArmingStatus;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Initial system state.
    pub system: SystemConfig,
    /// Sensors tracked from startup.
    pub sensors: Vec<Sensor>,
    /// Simulated camera settings.
    pub camera: CameraConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Initial system state.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Arming status applied at startup.
    pub arming: ArmingStatus,
}

/// Simulated camera configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Delay between frames, in milliseconds.
    pub interval_ms: u64,
    /// Number of frames to process before exiting; `0` runs until Ctrl-C.
    pub frames: u64,
    /// Answers replayed by the fake classifier, one per frame, cycling.
    pub script: Vec<bool>,
}

impl Config {
    /// Load configuration from `catpoint.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("catpoint.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CATPOINT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("CATPOINT_ARMING") {
            self.system.arming = val
                .parse()
                .map_err(|err| ConfigError::Validation(format!("CATPOINT_ARMING: {err}")))?;
        }
        if let Ok(val) = std::env::var("CATPOINT_CAMERA_INTERVAL_MS") {
            if let Ok(interval) = val.parse() {
                self.camera.interval_ms = interval;
            }
        }
        if let Ok(val) = std::env::var("CATPOINT_CAMERA_FRAMES") {
            if let Ok(frames) = val.parse() {
                self.camera.frames = frames;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.camera.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "camera interval must be non-zero".to_string(),
            ));
        }
        for sensor in &self.sensors {
            sensor.validate().map_err(|err| match err {
                CatpointError::Validation(inner) => ConfigError::Validation(inner.to_string()),
                other => ConfigError::Validation(other.to_string()),
            })?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            system: SystemConfig::default(),
            sensors: default_sensors(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catpointd=info,catpoint_app=info,catpoint_adapter_memory=warn".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            frames: 0,
            script: vec![false, true],
        }
    }
}

fn default_sensors() -> Vec<Sensor> {
    [
        ("Front Door", SensorType::Door),
        ("Back Window", SensorType::Window),
        ("Hallway", SensorType::Motion),
    ]
    .into_iter()
    .map(|(name, sensor_type)| Sensor {
        name: name.to_string(),
        sensor_type,
        active: false,
    })
    .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.system.arming, ArmingStatus::Disarmed);
        assert_eq!(config.sensors.len(), 3);
        assert_eq!(config.camera.interval_ms, 1000);
        assert_eq!(config.camera.frames, 0);
        assert_eq!(config.camera.script, vec![false, true]);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.camera.interval_ms, 1000);
        assert_eq!(config.sensors.len(), 3);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [system]
            arming = 'armed_home'

            [[sensors]]
            name = 'Garage'
            type = 'door'

            [camera]
            interval_ms = 250
            frames = 10
            script = [true]
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.system.arming, ArmingStatus::ArmedHome);
        assert_eq!(config.sensors.len(), 1);
        assert_eq!(config.sensors[0].name, "Garage");
        assert_eq!(config.sensors[0].sensor_type, SensorType::Door);
        assert_eq!(config.camera.interval_ms, 250);
        assert_eq!(config.camera.frames, 10);
        assert_eq!(config.camera.script, vec![true]);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [camera]
            frames = 3
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.camera.frames, 3);
        assert_eq!(config.camera.interval_ms, 1000);
        assert_eq!(config.system.arming, ArmingStatus::Disarmed);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.camera.interval_ms, 1000);
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.camera.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_unnamed_sensor() {
        let mut config = Config::default();
        config.sensors[0].name = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(err.to_string(), "invalid configuration: sensor name must not be empty");
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_unknown_arming() {
        let result: Result<Config, _> = toml::from_str("[system]\narming = 'armed_moon'");
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
