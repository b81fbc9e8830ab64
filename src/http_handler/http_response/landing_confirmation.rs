/// Response type for the /flight_controller/landing_confirmation_needed endpoint.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LandingConfirmationResponse {
    needed: Option<bool>,
}

impl LandingConfirmationResponse {
    /// `None` if the platform could not tell.
    pub(crate) fn needed(&self) -> Option<bool> { self.needed }
}
