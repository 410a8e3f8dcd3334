use crate::{
    mechanics::{aerial_turn, predict_landing},
    strategy::{Car, PlayerInput},
    tuning::Tuning,
};
use common::prelude::*;
use nalgebra::Vector3;

/// Get back on our wheels after being knocked into the air.
///
/// While there's time, boost toward a point under the predicted landing spot
/// to get down faster. Close to landing, match the surface instead.
pub struct Recovery {
    about_to_land: bool,
    time_on_ground: f32,
    finished: bool,
}

impl Recovery {
    /// Aim this far below the landing spot when boosting down.
    const BOOST_HEIGHT_COMPENSATION: f32 = -2000.0;
    const BOOST_ANGLE_TOLERANCE: f32 = 0.5;
    const MIN_RECOVERY_TIME: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            about_to_land: false,
            time_on_ground: 0.0,
            finished: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self, car: &Car, dt: f32, tuning: &Tuning) -> PlayerInput {
        let landing = predict_landing(car);
        let mut input = PlayerInput::default();

        if self.about_to_land {
            let (forward, up) = match landing {
                Some(landing) => (landing.forward, landing.normal),
                None => (car.forward(), car.up()),
            };
            let (pitch, yaw, roll) = aerial_turn(car, &forward, &up);
            input.pitch = pitch;
            input.yaw = yaw;
            input.roll = roll;
        } else {
            let landing_loc = landing.map_or(car.loc, |l| l.loc);
            let under_landing = landing_loc + Vector3::new(0.0, 0.0, Self::BOOST_HEIGHT_COMPENSATION);
            let landing_dir = (under_landing - car.loc).normalize_or_zero();
            let up = (Vector3::z() - landing_dir * landing_dir.z).normalize_or_zero();

            let (pitch, yaw, roll) = aerial_turn(car, &landing_dir, &up);
            input.pitch = pitch;
            input.yaw = yaw;
            input.roll = roll;
            input.boost = car.forward().angle_between(&landing_dir) < Self::BOOST_ANGLE_TOLERANCE;

            let distance = (landing_loc - car.loc).norm();
            let speed = car.speed();
            if car.boost < 5.0
                || landing_loc.z > 1000.0
                || speed > 2200.0
                || (speed != 0.0 && distance / speed < Self::MIN_RECOVERY_TIME)
            {
                self.about_to_land = true;
            }
        }

        // Turtled.
        if car.on_ground && car.up().dot(&Vector3::z()) < -0.95 {
            input.jump = true;
            self.about_to_land = false;
        }

        input.throttle = 1.0;
        input.handbrake = true;

        if car.on_ground {
            self.time_on_ground += dt;
        } else {
            self.time_on_ground = 0.0;
        }
        self.finished = self.time_on_ground > tuning.recovery_ground_time;
        input
    }
}
