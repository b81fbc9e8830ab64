pub mod command_sink;
mod flight_computer;
pub mod landing_handshake;
#[cfg(test)]
pub(crate) mod mock_sink;
pub mod orbit;
pub mod position;

pub use command_sink::{CommandError, Completion, FlightCommandSink, QueryError};
pub use flight_computer::FlightComputer;
pub use position::Position3D;
