use common::math::special_sauce;

/// Maps the angle to a target (radians, positive when the target is to the
/// right) onto a steering input.
///
/// Steeper than linear near zero, saturating toward ±1. A negative `gain`
/// steers toward the target; its magnitude sets how aggressively.
pub fn steer_response(angle: f32, gain: f32) -> f32 {
    special_sauce(angle, gain)
}
