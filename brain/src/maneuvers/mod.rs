pub use self::{
    aerial::Aerial, half_flip::HalfFlip, recovery::Recovery, slow_to_position::SlowToPosition,
};

use crate::{
    strategy::{Car, PlayerInput},
    tuning::Tuning,
};
use nalgebra::Vector3;
use nameof::name_of_type;

mod aerial;
mod half_flip;
mod recovery;
mod slow_to_position;

/// A multi-tick manoeuvre one hive drone is busy with.
pub enum Manoeuvre {
    Recovery(Recovery),
    SlowToPosition(SlowToPosition),
    Aerial(Aerial),
}

impl Manoeuvre {
    pub fn name(&self) -> &'static str {
        match self {
            Manoeuvre::Recovery(_) => name_of_type!(Recovery),
            Manoeuvre::SlowToPosition(_) => name_of_type!(SlowToPosition),
            Manoeuvre::Aerial(_) => name_of_type!(Aerial),
        }
    }

    /// The point on the ground this manoeuvre is driving to, if any.
    pub fn destination(&self) -> Option<Vector3<f32>> {
        match self {
            Manoeuvre::SlowToPosition(m) => Some(m.target()),
            Manoeuvre::Recovery(_) | Manoeuvre::Aerial(_) => None,
        }
    }

    pub fn step(&mut self, car: &Car, now: f32, dt: f32, tuning: &Tuning) -> PlayerInput {
        match self {
            Manoeuvre::Recovery(m) => m.step(car, dt, tuning),
            Manoeuvre::SlowToPosition(m) => m.step(car, now),
            Manoeuvre::Aerial(m) => m.step(car, now, dt, tuning),
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            Manoeuvre::Recovery(m) => m.finished(),
            Manoeuvre::SlowToPosition(m) => m.finished(),
            Manoeuvre::Aerial(m) => m.finished(),
        }
    }
}
