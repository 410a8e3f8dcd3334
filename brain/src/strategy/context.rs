use crate::{
    eeg::EEG,
    strategy::{Car, Game, Memory, Scenario},
    tuning::Tuning,
};

/// Everything a state can look at (and the few things it may touch) during a
/// single tick.
pub struct Context<'a> {
    pub game: &'a Game<'a>,
    pub scenario: &'a Scenario<'a>,
    pub tuning: &'a Tuning,
    pub memory: &'a mut Memory,
    pub eeg: &'a mut EEG,
}

impl<'a> Context<'a> {
    /// Return the car we are controlling.
    pub fn me(&self) -> &'a Car {
        self.game.me()
    }

    pub fn now(&self) -> f32 {
        self.game.time
    }
}
