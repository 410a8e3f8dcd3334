use crate::{
    mechanics::{speed_controller, steer_response},
    strategy::{Car, PlayerInput},
    tuning::Tuning,
};
use common::{orientation::to_local, prelude::*};
use nalgebra::Vector3;

/// The heading of `target` relative to the car's nose, in radians. Positive
/// means the target is to the right.
pub fn angle_to(car: &Car, target: &Vector3<f32>) -> f32 {
    let local = to_local(&car.orientation, &car.loc, target);
    local.y.atan2(local.x)
}

/// Flat-out driving toward a target.
pub fn drive_simple(car: &Car, target: &Vector3<f32>, tuning: &Tuning) -> PlayerInput {
    let angle = angle_to(car, target);
    PlayerInput {
        steer: steer_response(angle, tuning.steer_gain),
        throttle: 1.0,
        handbrake: angle.abs() > tuning.wide_angle,
        boost: angle.abs() < tuning.narrow_angle,
        ..Default::default()
    }
}

/// Drive so as to reach `target` at game time `arrival_time`, no earlier.
pub fn drive_precise(
    car: &Car,
    target: &Vector3<f32>,
    arrival_time: f32,
    now: f32,
    dt: f32,
    tuning: &Tuning,
) -> PlayerInput {
    let time_remaining = arrival_time - now;
    if time_remaining == 0.0 {
        return PlayerInput::default();
    }

    let angle = angle_to(car, target);
    let to_target = target - car.loc;
    let distance = to_target.norm();
    let speed_toward = to_target.normalize_or_zero().dot(&car.vel);
    let desired_speed = distance / time_remaining;

    let mut input = PlayerInput {
        steer: steer_response(angle, tuning.steer_gain),
        ..Default::default()
    };

    if angle.abs() <= tuning.narrow_angle {
        let (throttle, boost) = speed_controller(speed_toward, desired_speed, dt);
        input.throttle = throttle;
        input.boost = boost;
    } else if angle.abs() >= tuning.wide_angle {
        input.throttle = 1.0;
        input.handbrake = true;
    } else {
        input.throttle = tuning.turning_throttle;
    }

    if distance < tuning.arrival_radius {
        input.throttle = 0.0;
        input.boost = false;
    }

    input
}
