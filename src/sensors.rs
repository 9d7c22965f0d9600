//! Fixed sensor registry and request-parameter resolution.
//!
//! The mock service knows three sensors. The pairing between ids and
//! locations is a single immutable table consulted in both directions,
//! rather than two switch chains, so the mapping is trivially
//! auditable and testable.

// ---

/// Known sensor id / location pairs.
const SENSORS: &[(&str, &str)] = &[
    ("1", "Living Room"),
    ("2", "Bedroom"),
    ("3", "Kitchen"),
];

/// Fallback location when the sensor id is unknown.
const UNKNOWN_LOCATION: &str = "Unknown";

/// Fallback sensor id when the location is unknown.
const UNKNOWN_SENSOR_ID: &str = "0";

// ---

/// Location registered for a sensor id, if any.
fn location_for(sensor_id: &str) -> Option<&'static str> {
    // ---
    SENSORS
        .iter()
        .find(|(id, _)| *id == sensor_id)
        .map(|(_, loc)| *loc)
}

/// Sensor id registered for a location, if any.
fn sensor_for(location: &str) -> Option<&'static str> {
    // ---
    SENSORS
        .iter()
        .find(|(_, loc)| *loc == location)
        .map(|(id, _)| *id)
}

/// Resolve the effective `(location, sensor_id)` pair for a request.
///
/// Both parameters are optional, and an empty string counts as absent.
/// Each missing parameter is defaulted from the other via the sensor
/// table:
/// 1. A missing location is looked up from the sensor id ("Unknown" if
///    unmatched).
/// 2. A missing sensor id is looked up from whatever the location now
///    holds ("0" if unmatched).
///
/// Step 2 sees the location produced by step 1, but step 1's fallback
/// "Unknown" is not in the table, so a request with neither parameter
/// resolves to ("Unknown", "0") rather than a matched pair. This
/// asymmetry is observable behavior and is kept deliberately.
pub fn resolve(location: Option<&str>, sensor_id: Option<&str>) -> (String, String) {
    // ---
    let mut location = location.unwrap_or("").to_string();
    let mut sensor_id = sensor_id.unwrap_or("").to_string();

    if location.is_empty() {
        location = location_for(&sensor_id)
            .unwrap_or(UNKNOWN_LOCATION)
            .to_string();
    }

    if sensor_id.is_empty() {
        sensor_id = sensor_for(&location)
            .unwrap_or(UNKNOWN_SENSOR_ID)
            .to_string();
    }

    (location, sensor_id)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_both_params_present_pass_through() {
        // ---
        let (loc, id) = resolve(Some("Garage"), Some("42"));
        assert_eq!(loc, "Garage");
        assert_eq!(id, "42");

        // Mismatched but present values are not corrected
        let (loc, id) = resolve(Some("Kitchen"), Some("1"));
        assert_eq!(loc, "Kitchen");
        assert_eq!(id, "1");
    }

    #[test]
    fn test_location_defaults_from_sensor_id() {
        // ---
        assert_eq!(resolve(None, Some("1")).0, "Living Room");
        assert_eq!(resolve(None, Some("2")).0, "Bedroom");
        assert_eq!(resolve(None, Some("3")).0, "Kitchen");

        // Sensor id is echoed unchanged
        assert_eq!(resolve(None, Some("2")).1, "2");
    }

    #[test]
    fn test_sensor_id_defaults_from_location() {
        // ---
        assert_eq!(resolve(Some("Living Room"), None).1, "1");
        assert_eq!(resolve(Some("Bedroom"), None).1, "2");
        assert_eq!(resolve(Some("Kitchen"), None).1, "3");

        // Location is echoed unchanged
        assert_eq!(resolve(Some("Bedroom"), None).0, "Bedroom");
    }

    #[test]
    fn test_neither_param_yields_unmatched_defaults() {
        // ---
        // "Unknown" is not a registered location, so the sensor id
        // falls through to "0" rather than pairing up.
        assert_eq!(resolve(None, None), ("Unknown".into(), "0".into()));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        // ---
        assert_eq!(resolve(Some(""), Some("")), ("Unknown".into(), "0".into()));
        assert_eq!(resolve(Some(""), Some("3")).0, "Kitchen");
        assert_eq!(resolve(Some("Kitchen"), Some("")).1, "3");
    }

    #[test]
    fn test_unmapped_values_fall_through() {
        // ---
        let (loc, id) = resolve(None, Some("99"));
        assert_eq!(loc, "Unknown");
        assert_eq!(id, "99");

        let (loc, id) = resolve(Some("Attic"), None);
        assert_eq!(loc, "Attic");
        assert_eq!(id, "0");
    }
}
