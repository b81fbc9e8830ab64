use super::landing_confirmation::LandingConfirmationResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /flight_controller/landing_confirmation_needed endpoint.
#[derive(Debug)]
pub(crate) struct LandingConfirmationRequest {}

impl NoBodyHTTPRequestType for LandingConfirmationRequest {}

impl HTTPRequestType for LandingConfirmationRequest {
    type Response = LandingConfirmationResponse;
    fn endpoint(&self) -> &'static str { "/flight_controller/landing_confirmation_needed" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
