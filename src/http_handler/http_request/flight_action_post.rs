use super::command_ack::CommandAck;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use strum_macros::Display;

/// Single-shot flight controller actions without parameters.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlightAction {
    Takeoff,
    Landing,
    GoHome,
    ConfirmLanding,
}

/// Request type for the /flight_controller/{action} endpoints.
#[derive(Debug)]
pub(crate) struct FlightActionRequest {
    pub(crate) action: FlightAction,
}

impl NoBodyHTTPRequestType for FlightActionRequest {}

impl HTTPRequestType for FlightActionRequest {
    type Response = CommandAck;
    fn endpoint(&self) -> &'static str {
        match self.action {
            FlightAction::Takeoff => "/flight_controller/takeoff",
            FlightAction::Landing => "/flight_controller/landing",
            FlightAction::GoHome => "/flight_controller/go_home",
            FlightAction::ConfirmLanding => "/flight_controller/confirm_landing",
        }
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
