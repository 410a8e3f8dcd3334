use crate::{
    maneuvers::HalfFlip,
    mechanics::{angle_to, steer_response},
    strategy::{Car, PlayerInput},
};
use nalgebra::Vector3;
use std::f32::consts::PI;

/// Drive to a point and come to a stop on it, reversing (and half-flipping)
/// when the point is behind us.
pub struct SlowToPosition {
    target: Vector3<f32>,
    half_flip: Option<HalfFlip>,
    finished: bool,
}

impl SlowToPosition {
    const ARRIVAL_DISTANCE: f32 = 100.0;
    /// Full throttle until this close.
    const BRAKING_DISTANCE: f32 = 700.0;
    const STEER_GAIN: f32 = -6.0;
    const HANDBRAKE_ANGLE: f32 = 1.7;
    const BEHIND_ANGLE: f32 = 2.5;
    const MAX_REVERSING_SPEED: f32 = 1600.0;

    pub fn new(target: Vector3<f32>) -> Self {
        Self {
            target,
            half_flip: None,
            finished: false,
        }
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    /// Head somewhere else without starting over.
    pub fn retarget(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self, car: &Car, now: f32) -> PlayerInput {
        if let Some(half_flip) = &mut self.half_flip {
            let input = half_flip.step(car, now);
            if half_flip.finished() {
                self.half_flip = None;
            }
            return input;
        }

        let distance = (self.target - car.loc).norm();
        if distance <= Self::ARRIVAL_DISTANCE {
            self.finished = true;
            return PlayerInput::default();
        }
        self.finished = false;

        let speed = car.speed();
        let forward_speed = car.forward_speed();
        let angle = angle_to(car, &self.target);

        // PD controller to stop on the spot.
        let magnitude = if distance > Self::BRAKING_DISTANCE {
            1.0
        } else {
            (0.2 * (distance - speed)).max(-1.0).min(1.0)
        };

        let mut input = PlayerInput::default();
        if forward_speed < Self::MAX_REVERSING_SPEED && angle.abs() > Self::BEHIND_ANGLE {
            // Flip the angle around to steer while reversing.
            let adjusted = if angle > 0.0 { PI - angle } else { -(PI + angle) };
            input.throttle = if forward_speed < 0.0 { -magnitude } else { -1.0 };
            input.handbrake = adjusted.abs() > Self::HANDBRAKE_ANGLE;
            input.steer = steer_response(adjusted, Self::STEER_GAIN);

            if forward_speed < -500.0 && distance > 1500.0 {
                self.half_flip = Some(HalfFlip::new(false));
            }
        } else {
            input.throttle = magnitude;
            input.handbrake = angle.abs() > Self::HANDBRAKE_ANGLE;
            input.steer = steer_response(angle, Self::STEER_GAIN);
            input.boost = magnitude >= 0.99 && angle.abs() < 0.5 && forward_speed < 2200.0;
        }
        input
    }
}
