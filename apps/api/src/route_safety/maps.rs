//! Google Maps deep-link construction.

const CITY_SUFFIX: &str = ",+Chittagong,+Bangladesh";

/// Builds a Google Maps walking-directions link between two Chittagong place
/// names. Only spaces are substituted with `+`; other reserved URL characters
/// pass through untouched.
pub fn maps_link(start: &str, end: &str) -> String {
    let origin = format!("{}{}", start.replace(' ', "+"), CITY_SUFFIX);
    let destination = format!("{}{}", end.replace(' ', "+"), CITY_SUFFIX);
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={origin}&destination={destination}&travelmode=walking"
    )
}
