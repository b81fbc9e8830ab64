use super::aircraft_location::AircraftLocationResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /aircraft/location endpoint.
#[derive(Debug)]
pub(crate) struct AircraftLocationRequest {}

impl NoBodyHTTPRequestType for AircraftLocationRequest {}

impl HTTPRequestType for AircraftLocationRequest {
    type Response = AircraftLocationResponse;
    fn endpoint(&self) -> &'static str { "/aircraft/location" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
