use crate::flight_control::position::Position3D;
use strum_macros::Display;

/// Radius of every orbit in meters.
pub const ORBIT_RADIUS: f64 = 5.0;
/// Altitude of every orbit in meters.
pub const ORBIT_ALTITUDE: f64 = 5.0;

/// Point on the circle where the aircraft joins the orbit.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StartBearing {
    North,
    South,
    West,
    East,
    Nearest,
}

/// Direction the aircraft faces while orbiting.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeadingMode {
    AlongCircleLookingForward,
    AlongCircleLookingBackward,
    TowardsCenter,
    AwayFromCenter,
    Controlled,
    UsingInitialHeading,
}

/// Descriptor of a single orbit mission. Built once per mission start and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    center: (f64, f64),
    altitude: f64,
    radius: f64,
    angular_velocity: f64,
    start_bearing: StartBearing,
    heading: HeadingMode,
}

impl OrbitParameters {
    /// Creates the orbit around the current location with the fixed radius and altitude.
    pub fn around(position: &Position3D, angular_velocity: f64) -> Self {
        Self {
            center: (position.latitude(), position.longitude()),
            altitude: ORBIT_ALTITUDE,
            radius: ORBIT_RADIUS,
            angular_velocity,
            start_bearing: StartBearing::North,
            heading: HeadingMode::TowardsCenter,
        }
    }

    /// Latitude and longitude of the circled point.
    pub fn center(&self) -> (f64, f64) { self.center }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn radius(&self) -> f64 { self.radius }
    /// Signed angular velocity in degrees per second.
    pub fn angular_velocity(&self) -> f64 { self.angular_velocity }
    /// Negative velocities orbit clockwise.
    pub fn clockwise(&self) -> bool { self.angular_velocity < 0.0 }
    pub fn start_bearing(&self) -> StartBearing { self.start_bearing }
    pub fn heading(&self) -> HeadingMode { self.heading }
}

impl std::fmt::Display for OrbitParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "orbit around [{:.6}, {:.6}] r={}m alt={}m at {}°/s ({}), start {}, heading {}",
            self.center.0,
            self.center.1,
            self.radius,
            self.altitude,
            self.angular_velocity,
            if self.clockwise() { "clockwise" } else { "counter-clockwise" },
            self.start_bearing,
            self.heading
        )
    }
}
