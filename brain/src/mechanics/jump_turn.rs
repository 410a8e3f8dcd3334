use crate::{
    mechanics::aerial_turn,
    strategy::{Car, PlayerInput},
};
use common::prelude::*;
use nalgebra::Vector3;

/// Let the suspension settle this long between hops.
const MIN_GROUND_TIME: f32 = 6.0 / 120.0;

/// Turns a slow car in place: hop, then rotate toward `heading` in the air.
pub fn jump_turn(car: &Car, heading: &Vector3<f32>, time_on_ground: f32) -> PlayerInput {
    if car.on_ground {
        return PlayerInput {
            jump: time_on_ground >= MIN_GROUND_TIME,
            ..Default::default()
        };
    }

    let (pitch, yaw, roll) = aerial_turn(car, &heading.flat().normalize_or_zero(), &Vector3::z());
    PlayerInput {
        pitch,
        yaw,
        roll,
        ..Default::default()
    }
}
