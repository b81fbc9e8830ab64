use super::command_ack::CommandAck;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /hotpoint/angular_velocity endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct HotpointVelocityRequest {
    /// Signed angular velocity in degrees per second. The platform derives the
    /// direction of the running orbit from the sign.
    pub(crate) angular_velocity: f64,
}

impl JSONBodyHTTPRequestType for HotpointVelocityRequest {
    type Body = HotpointVelocityRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for HotpointVelocityRequest {
    type Response = CommandAck;
    fn endpoint(&self) -> &'static str { "/hotpoint/angular_velocity" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
