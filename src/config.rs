use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct DisplayParameters {
    pub title: String,
    pub unit: String,
    pub tick_millis: u64,
}

#[derive(Deserialize)]
pub struct Files {
    pub forecast_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub display: DisplayParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config = parse_config(&toml)?;

    Ok(config)
}

/// Parses and validates configuration items from a toml document
///
/// # Arguments
///
/// * 'toml' - the raw configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {

    let config: Config = toml::from_str(toml)?;

    if config.display.tick_millis == 0 {
        return Err(ConfigError::from("tick_millis must be greater than zero"))
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [display]
        title = "Today's Temperature"
        unit = "°"
        tick_millis = 250

        [files]
        forecast_file = "forecast.json"

        [general]
        log_path = "hourcast.log"
        log_level = "info"
        log_to_stdout = false
    "#;

    #[test]
    fn parses_full_config() {
        let config = parse_config(CONFIG).unwrap();

        assert_eq!(config.display.title, "Today's Temperature");
        assert_eq!(config.display.unit, "°");
        assert_eq!(config.display.tick_millis, 250);
        assert_eq!(config.files.forecast_file, "forecast.json");
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(!config.general.log_to_stdout);
    }

    #[test]
    fn rejects_zero_tick() {
        let toml = CONFIG.replace("tick_millis = 250", "tick_millis = 0");
        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn rejects_missing_section() {
        let toml = CONFIG.replace("[files]", "[wrong_section]");
        assert!(parse_config(&toml).is_err());
    }
}
