use std::ops::RangeInclusive;

/// Maps the integral orbit slider position to a signed angular velocity.
///
/// The slider spans `0..=2 * max` so that its lower half selects clockwise and its
/// upper half counter-clockwise rotation. The mapper is pure; it only carries the
/// velocity limit it was sized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitVelocityMapper {
    /// Maximum angular velocity in whole degrees per second.
    max_velocity: i32,
}

impl OrbitVelocityMapper {
    /// Sizes the mapper from the platform's angular velocity limit for a radius.
    ///
    /// The limit is truncated to whole degrees per second since the slider is integral,
    /// and capped so that every slider position fits an `i32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_platform_limit(limit: f64) -> Self {
        let max_velocity = if limit.is_finite() {
            limit.clamp(0.0, f64::from(Self::MAX_LIMIT)).trunc() as i32
        } else {
            0
        };
        Self { max_velocity }
    }

    /// Largest velocity limit for which `3 * max` does not overflow.
    const MAX_LIMIT: i32 = i32::MAX / 3;

    pub fn max_velocity(&self) -> i32 { self.max_velocity }

    pub fn slider_range(&self) -> RangeInclusive<i32> { 0..=2 * self.max_velocity }

    /// Slider position on activation, selecting half the maximum velocity.
    pub fn default_position(&self) -> i32 { self.max_velocity * 3 / 2 }

    pub fn clamp_position(&self, position: i32) -> i32 {
        position.clamp(*self.slider_range().start(), *self.slider_range().end())
    }

    pub fn velocity_from_position(&self, position: i32) -> f64 {
        f64::from(position - self.max_velocity)
    }

    /// Slider position closest to a velocity, clamped to the slider range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn position_from_velocity(&self, velocity: f64) -> i32 {
        let max = f64::from(self.max_velocity);
        (velocity.clamp(-max, max).round() + max) as i32
    }

    /// Human readable velocity together with the time for one full revolution.
    ///
    /// Seconds per revolution are truncated to whole seconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn describe(velocity: f64) -> String {
        if velocity == 0.0 {
            String::from("Circle Velocity: 0°/sec\n(infinity secs for full rotation)")
        } else {
            let revolution_secs = (360.0 / velocity.abs()).trunc() as i64;
            format!("Circle Velocity: {velocity}°/sec\n({revolution_secs} secs for full rotation)")
        }
    }
}
