use crate::flight_control::Position3D;
use chrono::{DateTime, Utc};

/// Response type for the /aircraft/location endpoint.
///
/// Without a location fix the platform sends `null` coordinates.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct AircraftLocationResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    /// Altitude relative to the take off point in meters.
    altitude: Option<f64>,
    /// Platform time of the fix.
    timestamp: DateTime<Utc>,
}

impl AircraftLocationResponse {
    pub(crate) fn timestamp(&self) -> DateTime<Utc> { self.timestamp }

    /// The reported location if it is a usable fix.
    pub(crate) fn position(&self) -> Option<Position3D> {
        match (self.latitude, self.longitude, self.altitude) {
            (Some(lat), Some(lon), Some(alt)) => Position3D::new(lat, lon, alt).valid(),
            _ => None,
        }
    }
}
