use std::fmt;
use std::fmt::Formatter;
use std::io;
use thiserror::Error;
use crate::forecast_source::ForecastError;

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);
impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> ConfigError {
        ConfigError(format!("config file error: {}", e.to_string()))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> ConfigError {
        ConfigError(format!("toml document error: {}", e.to_string()))
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> ConfigError {
        ConfigError(e.to_string())
    }
}

pub struct HourcastInitError(pub String);

impl fmt::Display for HourcastInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HourcastInitError: {}", self.0)
    }
}
impl From<ConfigError> for HourcastInitError {
    fn from(e: ConfigError) -> Self {
        HourcastInitError(e.to_string())
    }
}
impl From<ForecastError> for HourcastInitError {
    fn from(e: ForecastError) -> Self {
        HourcastInitError(e.to_string())
    }
}
impl From<io::Error> for HourcastInitError {
    fn from(e: io::Error) -> Self {
        HourcastInitError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for HourcastInitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        HourcastInitError(e.to_string())
    }
}
impl From<log::SetLoggerError> for HourcastInitError {
    fn from(e: log::SetLoggerError) -> Self { HourcastInitError(e.to_string()) }
}
