use super::command_ack::CommandAck;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::flight_control::orbit::{HeadingMode, OrbitParameters, StartBearing};

/// Request type for the /hotpoint/start endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct HotpointStartRequest {
    /// Latitude of the circled point.
    pub(crate) latitude: f64,
    /// Longitude of the circled point.
    pub(crate) longitude: f64,
    /// Orbit altitude in meters.
    pub(crate) altitude: f64,
    /// Orbit radius in meters.
    pub(crate) radius: f64,
    /// Magnitude of the angular velocity in degrees per second.
    pub(crate) angular_velocity: f64,
    /// Direction of the orbit.
    pub(crate) clockwise: bool,
    pub(crate) start_point: StartBearing,
    pub(crate) heading: HeadingMode,
}

impl From<&OrbitParameters> for HotpointStartRequest {
    fn from(params: &OrbitParameters) -> Self {
        let (latitude, longitude) = params.center();
        Self {
            latitude,
            longitude,
            altitude: params.altitude(),
            radius: params.radius(),
            angular_velocity: params.angular_velocity().abs(),
            clockwise: params.clockwise(),
            start_point: params.start_bearing(),
            heading: params.heading(),
        }
    }
}

impl JSONBodyHTTPRequestType for HotpointStartRequest {
    type Body = HotpointStartRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for HotpointStartRequest {
    type Response = CommandAck;
    fn endpoint(&self) -> &'static str { "/hotpoint/start" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
