/// Snapshot of the aircraft location taken from telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position3D {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Position3D {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude }
    }

    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }
    /// Altitude in meters relative to the take off point.
    pub fn altitude(&self) -> f64 { self.altitude }

    /// The platform reports a missing fix as `NaN` coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.altitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    /// Returns the position only if it is a usable fix.
    pub fn valid(self) -> Option<Self> { self.is_valid().then_some(self) }
}

impl std::fmt::Display for Position3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.1}m]", self.latitude, self.longitude, self.altitude)
    }
}
