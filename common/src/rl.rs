//! Various Rocket League constants.

use lazy_static::lazy_static;
use nalgebra::Vector3;

/// The distance from the field center to the side wall.
///
/// This value was copied from https://github.com/RLBot/RLBot/wiki/Useful-Game-Values.
pub const FIELD_MAX_X: f32 = 4096.0;

/// The distance from the field center to the back wall.
///
/// This value was copied from https://github.com/RLBot/RLBot/wiki/Useful-Game-Values.
pub const FIELD_MAX_Y: f32 = 5120.0;

/// The distance from the ground (z = 0) to the ceiling, as far as the landing
/// simulation is concerned.
pub const FIELD_MAX_Z: f32 = 2044.0;

/// Source: https://github.com/RLBot/RLBot/wiki/Useful-Game-Values
pub const GRAVITY: f32 = -650.0;

/// The constant frequency of RL's physics engine.
pub const PHYSICS_TICK_FREQ: f32 = 120.0;

/// The number of seconds between physics ticks.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_TICK_FREQ;

/// The max speed a car can reach using only the throttle.
pub const CAR_NORMAL_SPEED: f32 = 1410.0;

/// The speed at which throttle acceleration starts tapering off.
pub const CAR_THROTTLE_TAPER_SPEED: f32 = 1400.0;

/// The max speed a car can reach by boosting.
pub const CAR_MAX_SPEED: f32 = 2300.0;

/// Deceleration while braking, and acceleration when throttling against the
/// direction of travel.
pub const CAR_BRAKE_ACCEL: f32 = 3500.0;

/// Throttle acceleration from a standstill.
pub const CAR_THROTTLE_ACCEL: f32 = 1600.0;

/// Extra acceleration granted by boosting.
pub const CAR_BOOST_ACCEL: f32 = 991.667;

lazy_static! {
    /// The point just inside the blue goal.
    pub static ref BLUE_GOAL_INSIDE: Vector3<f32> = Vector3::new(0.0, -FIELD_MAX_Y, 0.0);

    /// The point just inside the orange goal.
    pub static ref ORANGE_GOAL_INSIDE: Vector3<f32> = Vector3::new(0.0, FIELD_MAX_Y, 0.0);
}

/// Returns `1.0` for blue (team 0) and `-1.0` for orange (team 1).
///
/// Multiplying a blue-side position by this mirrors it into the given team's
/// half of the field.
pub fn team_sign(team: u8) -> f32 {
    -2.0 * f32::from(team) + 1.0
}

/// The goal the given team is trying to score in.
pub fn opponent_goal(team: u8) -> Vector3<f32> {
    *ORANGE_GOAL_INSIDE * team_sign(team)
}

/// The goal the given team is defending.
pub fn own_goal(team: u8) -> Vector3<f32> {
    *BLUE_GOAL_INSIDE * team_sign(team)
}
