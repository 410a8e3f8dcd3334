use crate::{
    strategy::{Car, PlayerInput},
    utils::Stopwatch,
};

/// Back-flip, cancel the flip halfway, then roll upright facing the other
/// way.
pub struct HalfFlip {
    use_boost: bool,
    timer: Stopwatch,
    finished: bool,
}

impl HalfFlip {
    const JUMP_DURATION: f32 = 0.12;
    const RELEASE_DURATION: f32 = 0.03;
    const DODGE_DURATION: f32 = 0.05;
    const STALL_START: f32 = 0.5;
    const STALL_END: f32 = 0.7;
    const BOOST_DELAY: f32 = 0.4;
    const TIMEOUT: f32 = 2.0;
    /// Landing any earlier than this is still the takeoff.
    const MIN_AIR_TIME: f32 = 0.5;

    pub fn new(use_boost: bool) -> Self {
        Self {
            use_boost,
            timer: Stopwatch::new(),
            finished: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self, car: &Car, now: f32) -> PlayerInput {
        let elapsed = self.timer.tick(now);
        let mut input = Self::dodge(elapsed);

        if Self::STALL_START < elapsed && elapsed < Self::STALL_END {
            input.roll = 0.0;
            input.pitch = -1.0;
            input.yaw = 0.0;
        }
        if elapsed > Self::STALL_END {
            input.roll = 0.95;
            input.pitch = -1.0;
            input.yaw = 0.95;
        }
        input.boost = self.use_boost && elapsed > Self::BOOST_DELAY;

        self.finished =
            elapsed > Self::TIMEOUT || (car.on_ground && elapsed > Self::MIN_AIR_TIME);
        input
    }

    /// A dodge straight backwards.
    fn dodge(elapsed: f32) -> PlayerInput {
        let release = Self::JUMP_DURATION + Self::RELEASE_DURATION;
        if elapsed < Self::JUMP_DURATION {
            PlayerInput {
                jump: true,
                ..Default::default()
            }
        } else if elapsed < release {
            PlayerInput::default()
        } else if elapsed < release + Self::DODGE_DURATION {
            PlayerInput {
                jump: true,
                pitch: 1.0,
                ..Default::default()
            }
        } else {
            PlayerInput::default()
        }
    }
}
