//! Weather display data and offline fallback

use serde::{Deserialize, Serialize};

/// Broad weather condition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

/// Condition and icon code for a WMO weather code
///
/// Unknown codes read as clear. Icon codes carry a `d`/`n` suffix.
pub fn weather_info(code: u32, is_day: bool) -> (Condition, String) {
    let (condition, icon) = match code {
        0 | 1 => (Condition::Clear, "01"),
        2 => (Condition::Clouds, "02"),
        3 => (Condition::Clouds, "03"),
        45 | 48 => (Condition::Fog, "50"),
        51 | 53 | 55 => (Condition::Drizzle, "09"),
        61 | 63 | 65 => (Condition::Rain, "10"),
        71 | 73 | 75 | 77 | 85 | 86 => (Condition::Snow, "13"),
        80..=82 => (Condition::Rain, "09"),
        95 | 96 | 99 => (Condition::Thunderstorm, "11"),
        _ => (Condition::Clear, "01"),
    };
    (condition, format!("{}{}", icon, day_suffix(is_day)))
}

/// Daytime runs from 06:00 to 18:00
#[inline]
pub fn is_daytime(hour: u32) -> bool {
    (6..18).contains(&hour)
}

fn day_suffix(is_day: bool) -> char {
    if is_day {
        'd'
    } else {
        'n'
    }
}

/// One day of forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Days from today
    pub day_offset: u32,
    pub temp: i32,
    pub condition: Condition,
    pub icon: String,
}

/// Weather shown in the island
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    pub temperature: Option<i32>,
    pub condition: Option<Condition>,
    pub icon: String,
    pub location: String,
    pub feels_like: Option<i32>,
    pub humidity: Option<u32>,
    pub wind_speed: Option<u32>,
    pub forecast: Vec<ForecastDay>,
    pub is_loading: bool,
}

/// Where readings are taken
pub const WEATHER_LOCATION: &str = "Worcester";

/// Days of forecast kept from a reading
pub const FORECAST_DAYS: usize = 5;

/// Raw provider response (current conditions plus daily summary)
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherReading {
    pub current: CurrentReading,
    pub daily: DailyReading,
}

/// Current conditions in a [`WeatherReading`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentReading {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub weather_code: u32,
}

/// Per-day columns in a [`WeatherReading`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyReading {
    pub weather_code: Vec<u32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

/// Monthly mean temperatures (°C), January first
const MONTHLY_MEAN_C: [i32; 12] = [-3, -2, 2, 8, 14, 19, 22, 21, 17, 11, 5, 0];

impl Default for WeatherReport {
    fn default() -> Self {
        Self::loading()
    }
}

impl WeatherReport {
    /// Placeholder before the first fetch lands
    pub fn loading() -> Self {
        Self {
            temperature: None,
            condition: None,
            icon: "01d".to_string(),
            location: "Locating...".to_string(),
            feels_like: None,
            humidity: None,
            wind_speed: None,
            forecast: Vec::new(),
            is_loading: true,
        }
    }

    /// Build a report from a provider reading taken at `hour`
    ///
    /// Forecast days always use day icons and read the midpoint of the
    /// daily high and low. Days missing a column are dropped.
    pub fn from_reading(reading: &WeatherReading, hour: u32) -> Self {
        let current = &reading.current;
        let (condition, icon) = weather_info(current.weather_code, is_daytime(hour));

        let daily = &reading.daily;
        let forecast = daily
            .weather_code
            .iter()
            .zip(&daily.temperature_2m_max)
            .zip(&daily.temperature_2m_min)
            .take(FORECAST_DAYS)
            .zip(0..)
            .map(|(((&code, &max), &min), day_offset)| {
                let (condition, icon) = weather_info(code, true);
                ForecastDay {
                    day_offset,
                    temp: ((max + min) / 2.0).round() as i32,
                    condition,
                    icon,
                }
            })
            .collect();

        Self {
            temperature: Some(current.temperature_2m.round() as i32),
            condition: Some(condition),
            icon,
            location: WEATHER_LOCATION.to_string(),
            feels_like: Some(current.apparent_temperature.round() as i32),
            humidity: Some(current.relative_humidity_2m.round() as u32),
            wind_speed: Some(current.wind_speed_10m.round() as u32),
            forecast,
            is_loading: false,
        }
    }

    /// Typical weather for the month, used when the provider is unreachable
    ///
    /// `month` is zero-based (0 = January); out-of-range values wrap.
    pub fn seasonal_fallback(month: u32, hour: u32) -> Self {
        let month = (month % 12) as usize;
        let avg = MONTHLY_MEAN_C[month];
        let suffix = day_suffix(is_daytime(hour));

        let (condition, icon) = if month >= 11 || month <= 2 {
            (Condition::Snow, "13")
        } else if month <= 5 {
            (Condition::Clouds, "04")
        } else {
            (Condition::Clear, "01")
        };

        let forecast = [
            (0, avg, Condition::Snow, "13d"),
            (1, avg + 1, Condition::Clouds, "04d"),
            (2, avg - 2, Condition::Snow, "13d"),
            (3, avg + 2, Condition::Clouds, "04d"),
            (4, avg, Condition::Clear, "02d"),
        ]
        .into_iter()
        .map(|(day_offset, temp, condition, icon)| ForecastDay {
            day_offset,
            temp,
            condition,
            icon: icon.to_string(),
        })
        .collect();

        Self {
            temperature: Some(avg),
            condition: Some(condition),
            icon: format!("{}{}", icon, suffix),
            location: WEATHER_LOCATION.to_string(),
            feels_like: Some(avg - 3),
            humidity: Some(70),
            wind_speed: Some(15),
            forecast,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_codes() {
        assert_eq!(weather_info(0, true), (Condition::Clear, "01d".to_string()));
        assert_eq!(weather_info(48, false), (Condition::Fog, "50n".to_string()));
        assert_eq!(weather_info(81, true), (Condition::Rain, "09d".to_string()));
        assert_eq!(weather_info(63, true), (Condition::Rain, "10d".to_string()));
        assert_eq!(weather_info(99, true).0, Condition::Thunderstorm);
        assert_eq!(weather_info(1234, false), (Condition::Clear, "01n".to_string()));
    }

    #[test]
    fn test_daytime_bounds() {
        assert!(!is_daytime(5));
        assert!(is_daytime(6));
        assert!(is_daytime(17));
        assert!(!is_daytime(18));
    }

    #[test]
    fn test_winter_fallback() {
        let report = WeatherReport::seasonal_fallback(0, 22);
        assert_eq!(report.temperature, Some(-3));
        assert_eq!(report.feels_like, Some(-6));
        assert_eq!(report.condition, Some(Condition::Snow));
        assert_eq!(report.icon, "13n");
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[3].temp, -1);
        assert!(!report.is_loading);
    }

    #[test]
    fn test_spring_and_summer_fallback() {
        let spring = WeatherReport::seasonal_fallback(4, 12);
        assert_eq!(spring.condition, Some(Condition::Clouds));
        assert_eq!(spring.icon, "04d");

        let summer = WeatherReport::seasonal_fallback(6, 12);
        assert_eq!(summer.temperature, Some(22));
        assert_eq!(summer.condition, Some(Condition::Clear));

        let december = WeatherReport::seasonal_fallback(11, 12);
        assert_eq!(december.condition, Some(Condition::Snow));
    }

    #[test]
    fn test_report_from_reading() {
        let reading: WeatherReading = serde_json::from_str(
            r#"{
                "current": {
                    "temperature_2m": 12.6,
                    "apparent_temperature": 10.2,
                    "relative_humidity_2m": 64,
                    "wind_speed_10m": 18.4,
                    "weather_code": 61
                },
                "daily": {
                    "time": ["2024-05-01", "2024-05-02"],
                    "weather_code": [3, 95],
                    "temperature_2m_max": [15.0, 20.0],
                    "temperature_2m_min": [8.0, 11.0]
                }
            }"#,
        )
        .unwrap();

        let report = WeatherReport::from_reading(&reading, 21);
        assert_eq!(report.temperature, Some(13));
        assert_eq!(report.feels_like, Some(10));
        assert_eq!(report.humidity, Some(64));
        assert_eq!(report.wind_speed, Some(18));
        assert_eq!(report.condition, Some(Condition::Rain));
        assert_eq!(report.icon, "10n");
        assert_eq!(report.location, WEATHER_LOCATION);
        assert!(!report.is_loading);

        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[0].temp, 12);
        assert_eq!(report.forecast[0].icon, "03d");
        assert_eq!(report.forecast[1].day_offset, 1);
        assert_eq!(report.forecast[1].condition, Condition::Thunderstorm);
    }

    #[test]
    fn test_forecast_capped_at_five_days() {
        let reading = WeatherReading {
            daily: DailyReading {
                weather_code: vec![0; 7],
                temperature_2m_max: vec![10.0; 7],
                temperature_2m_min: vec![0.0; 6],
            },
            ..Default::default()
        };
        let report = WeatherReport::from_reading(&reading, 12);
        assert_eq!(report.forecast.len(), FORECAST_DAYS);
    }
}
