use super::orbit::OrbitParameters;
use super::position::Position3D;
use futures::future::BoxFuture;
use strum_macros::Display;

/// The pending outcome of a command that has already been issued to the flight platform.
///
/// Resolving it is the completion callback. It may resolve on any runtime worker
/// and in any order relative to other issued commands.
pub type Completion<T, E> = BoxFuture<'static, Result<T, E>>;

/// Abstract transport to the flight platform.
///
/// Every command method *issues* the command synchronously and returns its
/// [`Completion`]. Implementations must deliver commands to the platform in
/// call order; there is no way to withdraw a command once it was issued.
pub trait FlightCommandSink: Send + Sync {
    fn start_orbit(&self, params: OrbitParameters) -> Completion<(), CommandError>;
    fn set_orbit_velocity(&self, velocity: f64) -> Completion<(), CommandError>;
    fn stop_orbit(&self) -> Completion<(), CommandError>;

    /// Latest valid location fix of the aircraft, `None` without a fix.
    fn current_position(&self) -> Option<Position3D>;

    fn set_precision_landing(&self, enabled: bool) -> Completion<(), CommandError>;
    fn is_landing_confirmation_required(&self) -> Completion<bool, QueryError>;
    fn confirm_landing(&self) -> Completion<(), CommandError>;

    fn start_takeoff(&self) -> Completion<(), CommandError>;
    fn start_landing(&self) -> Completion<(), CommandError>;
    fn start_go_home(&self) -> Completion<(), CommandError>;

    /// Maximum angular velocity in degrees per second the platform allows for an
    /// orbit of the given radius in meters. Pure and synchronous.
    fn max_angular_velocity(&self, radius: f64) -> f64;
}

/// A precondition for a command was not met, so nothing was issued.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CommandRejected {
    /// The aircraft has no valid location fix to center an orbit on.
    NoPositionFix,
}

impl std::error::Error for CommandRejected {}

/// The flight platform reported a failure for an issued command.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The platform refused the command, e.g. because the aircraft is not airborne.
    Rejected(String),
    /// The platform failed internally while executing the command.
    Platform(String),
    NoConnection,
    Timeout,
    Unknown,
}

impl std::error::Error for CommandError {}

/// A state query failed. Its answer is unknown and must not be guessed.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum QueryError {
    Failed(CommandError),
    Unavailable,
}

impl std::error::Error for QueryError {}

impl From<CommandError> for QueryError {
    fn from(value: CommandError) -> Self { QueryError::Failed(value) }
}
