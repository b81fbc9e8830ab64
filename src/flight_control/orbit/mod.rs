mod mission_controller;
mod orbit_parameters;
mod orbit_session;
mod velocity_mapper;

pub use mission_controller::OrbitMissionController;
pub use orbit_parameters::{HeadingMode, OrbitParameters, StartBearing};
pub use orbit_session::{OrbitSession, OrbitState};
