use serde::{Deserialize, Serialize};

use crate::model::forecast::ForecastResponse;

/// One persisted weather lookup: the last forecast fetched for a city.
///
/// The store keeps at most one record per city. `city` is the raw string
/// the user searched for, used verbatim as the upsert key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub city: String,
    pub data: ForecastResponse,
    /// Write time, unix seconds.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forecast::{City, Condition, ForecastEntry, MainReadings, Wind};

    #[test]
    fn record_round_trips_with_the_wire_shape() {
        let record = SearchRecord {
            city: "  Addis Ababa ".to_string(),
            data: ForecastResponse {
                city: City {
                    name: "Addis Ababa".to_string(),
                    country: "ET".to_string(),
                },
                list: vec![ForecastEntry {
                    dt: 1_700_000_000,
                    main: MainReadings {
                        temp: 21.3,
                        feels_like: 20.8,
                        humidity: 54.0,
                        pressure: 1018.0,
                    },
                    weather: vec![Condition {
                        description: "broken clouds".to_string(),
                        icon: "04d".to_string(),
                    }],
                    wind: Wind { speed: 2.1 },
                    rain: None,
                }],
            },
            timestamp: 1_700_000_123,
        };

        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["city", "data", "timestamp"]);

        let decoded: SearchRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.city, record.city);
        assert_eq!(decoded.timestamp, record.timestamp);
        assert_eq!(decoded.data.city.name, "Addis Ababa");
        assert_eq!(decoded.data.list.len(), 1);
        assert_eq!(decoded.data.list[0].main.temp, 21.3);
    }
}
