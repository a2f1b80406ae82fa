use chrono::{DateTime, Local};
use crate::models::forecast::ForecastData;

/// Number of forecast entries shown in the hourly chart
pub const HOURS_SHOWN: usize = 8;

/// One display-ready point of the hourly chart
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: String,
    pub temp: i32,
    pub feels_like: i32,
}

/// Projects the first forecast entries into display points, capped at
/// HOURS_SHOWN. Entries keep their input order and temperatures are rounded
/// to whole degrees. An empty forecast list yields an empty projection.
///
/// # Arguments
///
/// * 'data' - the forecast payload to project
pub fn hourly_points(data: &ForecastData) -> Vec<HourlyPoint> {
    data.list
        .iter()
        .take(HOURS_SHOWN)
        .map(|entry| HourlyPoint {
            time: hour_label(entry.dt),
            temp: entry.main.temp.round() as i32,
            feels_like: entry.main.feels_like.round() as i32,
        })
        .collect()
}

/// Renders a unix timestamp as a local 12-hour label, e.g. "5PM".
/// A timestamp outside the representable range renders as "--".
///
/// # Arguments
///
/// * 'dt' - unix timestamp in seconds
fn hour_label(dt: i64) -> String {
    DateTime::from_timestamp(dt, 0)
        .map(|t| t.with_timezone(&Local).format("%-I%p").to_string())
        .unwrap_or_else(|| String::from("--"))
}
