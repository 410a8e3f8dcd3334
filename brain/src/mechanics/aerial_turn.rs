use crate::strategy::Car;
use common::prelude::*;
use nalgebra::Vector3;

/// A PD controller that rotates the car in the air until its nose points
/// along `forward` and its roof along `up`. Returns `(pitch, yaw, roll)`.
pub fn aerial_turn(car: &Car, forward: &Vector3<f32>, up: &Vector3<f32>) -> (f32, f32, f32) {
    let car_forward = car.orientation.forward();
    let car_right = car.orientation.right();
    let car_up = car.orientation.up();

    let desired_facing_ang_vel = -car_forward.cross(forward);
    let desired_up_ang_vel = -car_up.cross(up);

    let mut pitch = desired_facing_ang_vel.dot(&car_right);
    let yaw = -desired_facing_ang_vel.dot(&car_up);
    let mut roll = desired_up_ang_vel.dot(&car_forward);

    let mut pitch_vel = car.ang_vel.dot(&car_right);
    let yaw_vel = -car.ang_vel.dot(&car_up);
    let roll_vel = car.ang_vel.dot(&car_forward);

    // avoid getting stuck in directly-opposite states
    if car_up.dot(up) < -0.8 && car_forward.dot(forward) > 0.8 {
        if roll == 0.0 {
            roll = 1.0;
        }
        roll *= 1e10;
    }
    if car_forward.dot(forward) < -0.8 {
        if pitch == 0.0 {
            pitch = 1.0;
        }
        pitch *= 1e10;
    }

    if car_forward.dot(forward) < 0.0 {
        pitch_vel *= -1.0;
    }

    let mut roll = 3.0 * roll + 0.30 * roll_vel;
    let yaw = 3.0 * yaw + 0.70 * yaw_vel;
    let pitch = 3.0 * pitch + 0.90 * pitch_vel;

    // only start adjusting roll once we're roughly facing the right way
    if car_forward.dot(forward) < 0.0 {
        roll = 0.0;
    }

    (clamp(pitch), clamp(yaw), clamp(roll))
}

fn clamp(x: f32) -> f32 {
    nalgebra::clamp(x, -1.0, 1.0)
}
