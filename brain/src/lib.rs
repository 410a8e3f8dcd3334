#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    brain::Brain,
    eeg::{Drawable, EEG},
    hive::{DroneStatus, Hivemind, NeverAssign, SaveAssignment},
    predict::{linear_predict, Frame, FutureGoal, Trajectory},
    strategy::{
        BallInfo, BoostPadInfo, BoostPadState, FieldInfo, GameInfo, Packet, Physics, PlayerInfo,
        PlayerInput, Rotator, Team, Touch,
    },
    tuning::Tuning,
};

macro_rules! some_or_else {
    ($e:expr, $b:block) => {
        match $e {
            Some(x) => x,
            None => $b,
        }
    };
}

mod behavior;
mod brain;
pub mod eeg;
mod hive;
#[cfg(test)]
mod integration_tests;
mod maneuvers;
mod mechanics;
mod predict;
mod strategy;
mod tuning;
mod utils;
