//! Response model for the temperature endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---

/// Lower bound of the synthetic temperature range, inclusive.
pub const TEMP_MIN_C: f64 = 15.0;

/// Upper bound of the synthetic temperature range, exclusive.
pub const TEMP_MAX_C: f64 = 30.0;

/// A synthetic temperature reading, built fresh for every request and
/// serialized straight to the response body. Never persisted.
#[derive(Debug, Serialize)]
pub struct TemperatureReading {
    // ---
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: String,
    pub sensor_id: String,
    pub sensor_type: String,
    pub description: String,
}

impl TemperatureReading {
    /// Build a reading for the given measurement and resolved sensor.
    ///
    /// The timestamp is taken at construction time; every other
    /// non-parameter field is a fixed constant of the mock service.
    pub fn new(value: f64, location: String, sensor_id: String) -> Self {
        // ---
        let description = format!("Temperature sensor in {}", location);

        TemperatureReading {
            value,
            unit: "C".to_string(),
            timestamp: Utc::now(),
            location,
            status: "active".to_string(),
            sensor_id,
            sensor_type: "temperature".to_string(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_constant_fields() {
        // ---
        let reading = TemperatureReading::new(21.5, "Bedroom".into(), "2".into());

        assert_eq!(reading.value, 21.5);
        assert_eq!(reading.unit, "C");
        assert_eq!(reading.status, "active");
        assert_eq!(reading.sensor_type, "temperature");
        assert_eq!(reading.location, "Bedroom");
        assert_eq!(reading.sensor_id, "2");
    }

    #[test]
    fn test_description_derived_from_location() {
        // ---
        let reading = TemperatureReading::new(20.0, "Kitchen".into(), "3".into());
        assert_eq!(reading.description, "Temperature sensor in Kitchen");

        let reading = TemperatureReading::new(20.0, "Unknown".into(), "0".into());
        assert_eq!(reading.description, "Temperature sensor in Unknown");
    }

    #[test]
    fn test_serializes_with_snake_case_keys() {
        // ---
        let reading = TemperatureReading::new(18.25, "Living Room".into(), "1".into());
        let json = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["value"], 18.25);
        assert_eq!(json["unit"], "C");
        assert_eq!(json["location"], "Living Room");
        assert_eq!(json["status"], "active");
        assert_eq!(json["sensor_id"], "1");
        assert_eq!(json["sensor_type"], "temperature");
        assert_eq!(json["description"], "Temperature sensor in Living Room");
        assert!(json["timestamp"].is_string());
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
