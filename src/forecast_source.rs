use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use crate::models::forecast::ForecastData;

#[derive(Debug)]
pub enum ForecastError {
    Source(String),
    Document(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::Source(e) => write!(f, "ForecastError::Source: {}", e),
            ForecastError::Document(e) => write!(f, "ForecastError::Document: {}", e),
        }
    }
}
impl From<std::io::Error> for ForecastError {
    fn from(e: std::io::Error) -> Self {
        ForecastError::Source(e.to_string())
    }
}
impl From<serde_json::Error> for ForecastError {
    fn from(e: serde_json::Error) -> Self {
        ForecastError::Document(e.to_string())
    }
}

/// Struct for managing the forecast payload produced by the upstream
/// forecast collaborator.
///
/// The payload lives in a JSON document on disk. The source remembers the
/// document's modification time so that consumers only re-derive their view
/// of the data when the document actually changed.
pub struct ForecastSource {
    path: PathBuf,
    modified: Option<SystemTime>,
    forecast: Option<ForecastData>,
}

impl ForecastSource {
    /// Returns a ForecastSource ready for loading forecasts. Nothing is read
    /// from disk until load or refresh is called.
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the forecast document
    pub fn new<P: AsRef<Path>>(path: P) -> ForecastSource {
        ForecastSource {
            path: path.as_ref().to_path_buf(),
            modified: None,
            forecast: None,
        }
    }

    /// Gets the currently loaded forecast, if any
    ///
    pub fn forecast(&self) -> Option<&ForecastData> {
        self.forecast.as_ref()
    }

    /// Reads and deserializes the forecast document, replacing any currently
    /// loaded forecast. A document that cannot be read or parsed leaves the
    /// previous forecast untouched.
    ///
    pub fn load(&mut self) -> Result<(), ForecastError> {
        let modified = fs::metadata(&self.path)?.modified().ok();
        let json = fs::read_to_string(&self.path)?;
        let forecast = parse_forecast(&json)?;

        self.modified = modified;
        self.forecast = Some(forecast);

        Ok(())
    }

    /// Reloads the forecast document only if its modification time has moved
    /// since the last load. Returns whether a reload happened, which tells
    /// the caller whether derived state must be recomputed.
    ///
    pub fn refresh(&mut self) -> Result<bool, ForecastError> {
        let modified = fs::metadata(&self.path)?.modified().ok();
        if self.forecast.is_some() && modified == self.modified {
            return Ok(false);
        }

        self.load()?;
        Ok(true)
    }
}

/// Deserializes a forecast document. A document without the list field is
/// malformed and rejected here rather than rendered as an empty chart.
///
/// # Arguments
///
/// * 'json' - the raw forecast document
fn parse_forecast(json: &str) -> Result<ForecastData, ForecastError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wellformed_document() {
        let json = r#"{"list": [{"dt": 1754478000, "main": {"temp": 17.0, "feels_like": 16.0}}]}"#;
        let data = parse_forecast(json).unwrap();
        assert_eq!(data.list.len(), 1);
    }

    #[test]
    fn empty_list_is_valid() {
        let data = parse_forecast(r#"{"list": []}"#).unwrap();
        assert!(data.list.is_empty());
    }

    #[test]
    fn missing_list_is_a_document_error() {
        let result = parse_forecast(r#"{"city": {"name": "Karlshamn"}}"#);
        assert!(matches!(result, Err(ForecastError::Document(_))));
    }

    #[test]
    fn garbage_is_a_document_error() {
        let result = parse_forecast("not json");
        assert!(matches!(result, Err(ForecastError::Document(_))));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let mut source = ForecastSource::new("/nonexistent/forecast.json");
        assert!(matches!(source.load(), Err(ForecastError::Source(_))));
        assert!(source.forecast().is_none());
    }
}
