use super::http_response::{aircraft_location, command_ack, landing_confirmation};

pub(crate) mod aircraft_location_get;
pub(crate) mod flight_action_post;
pub(crate) mod hotpoint_start_post;
pub(crate) mod hotpoint_stop_post;
pub(crate) mod hotpoint_velocity_put;
pub(crate) mod landing_confirmation_get;
pub(crate) mod precision_landing_put;
pub(crate) mod request_common;
