use super::command_ack::CommandAck;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /flight_assistant/precision_landing endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct PrecisionLandingRequest {
    pub(crate) enabled: bool,
}

impl JSONBodyHTTPRequestType for PrecisionLandingRequest {
    type Body = PrecisionLandingRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for PrecisionLandingRequest {
    type Response = CommandAck;
    fn endpoint(&self) -> &'static str { "/flight_assistant/precision_landing" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
