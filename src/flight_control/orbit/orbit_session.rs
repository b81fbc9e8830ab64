use strum_macros::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum OrbitState {
    Idle,
    Circling,
}

/// Lifecycle of the orbit owned by a single `OrbitMissionController`.
///
/// The commanded velocity only exists while circling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrbitSession {
    #[default]
    Idle,
    Circling { velocity: f64 },
}

impl OrbitSession {
    pub fn state(&self) -> OrbitState {
        match self {
            OrbitSession::Idle => OrbitState::Idle,
            OrbitSession::Circling { .. } => OrbitState::Circling,
        }
    }

    /// Last angular velocity issued to the platform, `None` while idle.
    pub fn current_velocity(&self) -> Option<f64> {
        match self {
            OrbitSession::Idle => None,
            OrbitSession::Circling { velocity } => Some(*velocity),
        }
    }

    pub fn is_circling(&self) -> bool { matches!(self, OrbitSession::Circling { .. }) }
}
