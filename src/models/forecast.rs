use serde::Deserialize;

#[derive(Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
}

#[derive(Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainReadings,
}

#[derive(Deserialize)]
pub struct City {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ForecastData {
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<City>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_forecast_payload() {
        let json = r#"{
            "list": [
                {"dt": 1754478000, "main": {"temp": 17.62, "feels_like": 16.9, "humidity": 54}},
                {"dt": 1754488800, "main": {"temp": 14.1, "feels_like": 13.55}}
            ],
            "city": {"name": "Karlshamn"}
        }"#;

        let data: ForecastData = serde_json::from_str(json).unwrap();

        assert_eq!(data.list.len(), 2);
        assert_eq!(data.list[0].dt, 1754478000);
        assert_eq!(data.list[0].main.temp, 17.62);
        assert_eq!(data.list[0].main.humidity, Some(54));
        assert_eq!(data.list[1].main.feels_like, 13.55);
        assert_eq!(data.list[1].main.humidity, None);
        assert_eq!(data.city.unwrap().name, "Karlshamn");
    }

    #[test]
    fn city_is_optional() {
        let json = r#"{"list": []}"#;
        let data: ForecastData = serde_json::from_str(json).unwrap();

        assert!(data.list.is_empty());
        assert!(data.city.is_none());
    }
}
