use crate::{
    mechanics::{aerial_turn, angle_to, speed_controller, steer_response},
    strategy::{Car, PlayerInput},
    tuning::Tuning,
    utils::Stopwatch,
};
use common::prelude::*;
use nalgebra::Vector3;

/// Fly to a point in the air, arriving at a given game time.
///
/// Lines up on the ground first, then fast-aerials (two jumps with boost), then
/// points the nose at the target and boosts.
pub struct Aerial {
    target: Vector3<f32>,
    arrival_time: f32,
    /// Started on the tick we decide to jump.
    jump_timer: Option<Stopwatch>,
    finished: bool,
}

impl Aerial {
    const HANDBRAKE_MIN_ANGLE: f32 = 2.0;
    const ANGLE_BEFORE_JUMP: f32 = 0.1;
    const SPEED_FRACTION_BEFORE_JUMP: f32 = 0.7;
    const GIVE_UP_SPEED_NEEDED: f32 = 2200.0;
    const MIN_TARGET_DISTANCE: f32 = 100.0;

    const HOLD_FIRST_JUMP: f32 = 0.2;
    const BETWEEN_JUMPS: f32 = 0.1;
    const HOLD_SECOND_JUMP: f32 = 0.05;
    const FACING_TOLERANCE: f32 = 0.5;

    pub fn new(target: Vector3<f32>, arrival_time: f32) -> Self {
        Self {
            target,
            arrival_time,
            jump_timer: None,
            finished: false,
        }
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self, car: &Car, now: f32, dt: f32, tuning: &Tuning) -> PlayerInput {
        let time_left = self.arrival_time - now;
        let flat_difference = (self.target - car.loc).flat();
        let speed_needed = if time_left > 0.0 {
            flat_difference.norm() / time_left
        } else {
            f32::INFINITY
        };

        let input = match &mut self.jump_timer {
            Some(timer) => Self::fly(car, &self.target, timer.tick(now)),
            None => {
                let (input, ready) = Self::line_up(car, &self.target, speed_needed, dt, tuning);
                if ready {
                    self.jump_timer = Some(Stopwatch::new());
                }
                input
            }
        };

        self.finished = time_left <= 0.0
            || speed_needed > Self::GIVE_UP_SPEED_NEEDED
            || (car.loc - self.target).norm() < Self::MIN_TARGET_DISTANCE;
        input
    }

    /// Drive under the target at the speed that arrives on time. Also returns
    /// whether we're lined up well enough to jump.
    fn line_up(
        car: &Car,
        target: &Vector3<f32>,
        speed_needed: f32,
        dt: f32,
        tuning: &Tuning,
    ) -> (PlayerInput, bool) {
        let flat_difference = (target - car.loc).flat();
        let direction = flat_difference.normalize_or_zero();
        let speed_toward = direction.dot(&car.vel);
        let angle = flat_difference.angle_between(&car.vel);

        let (throttle, boost) = speed_controller(speed_toward, speed_needed, dt);
        let mut input = PlayerInput {
            throttle,
            boost,
            steer: steer_response(angle_to(car, target), tuning.steer_gain),
            ..Default::default()
        };
        if angle > Self::HANDBRAKE_MIN_ANGLE {
            input.handbrake = true;
            input.throttle = 1.0;
        }

        let ready = angle < Self::ANGLE_BEFORE_JUMP
            && speed_toward > Self::SPEED_FRACTION_BEFORE_JUMP * speed_needed;
        (input, ready)
    }

    fn fly(car: &Car, target: &Vector3<f32>, since_jump: f32) -> PlayerInput {
        let first = Self::HOLD_FIRST_JUMP;
        let gap = first + Self::BETWEEN_JUMPS;
        let second = gap + Self::HOLD_SECOND_JUMP;

        if since_jump < first {
            PlayerInput {
                jump: true,
                pitch: 1.0,
                boost: true,
                ..Default::default()
            }
        } else if since_jump < gap {
            PlayerInput {
                pitch: 1.0,
                boost: true,
                ..Default::default()
            }
        } else if since_jump < second {
            PlayerInput {
                jump: true,
                boost: true,
                ..Default::default()
            }
        } else {
            let direction = (target - car.loc).normalize_or_zero();
            let (pitch, yaw, roll) = aerial_turn(car, &direction, &Vector3::z());
            PlayerInput {
                pitch,
                yaw,
                roll,
                boost: car.forward().angle_between(&direction) < Self::FACING_TOLERANCE,
                ..Default::default()
            }
        }
    }
}
