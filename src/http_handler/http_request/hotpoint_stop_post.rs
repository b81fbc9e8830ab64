use super::command_ack::CommandAck;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /hotpoint/stop endpoint.
#[derive(Debug)]
pub(crate) struct HotpointStopRequest {}

impl NoBodyHTTPRequestType for HotpointStopRequest {}

impl HTTPRequestType for HotpointStopRequest {
    type Response = CommandAck;
    fn endpoint(&self) -> &'static str { "/hotpoint/stop" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
