mod http_client;
mod http_flight_sink;
pub(crate) mod http_request;
pub(crate) mod http_response;

pub use http_flight_sink::HTTPFlightSink;
