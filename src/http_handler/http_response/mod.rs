pub(crate) mod aircraft_location;
pub(crate) mod command_ack;
pub(crate) mod landing_confirmation;
pub(crate) mod response_common;
