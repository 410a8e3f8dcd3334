pub use self::{
    behavior::{Action, Behavior, State},
    context::Context,
    game::{Ball, BoostPad, Car, Game, Pads, Team},
    memory::Memory,
    packet::{
        BallInfo, BoostPadInfo, BoostPadState, FieldInfo, GameInfo, Packet, Physics, PlayerInfo,
        PlayerInput, Rotator, Touch,
    },
    runner::Runner,
    scenario::Scenario,
};

mod behavior;
mod context;
mod game;
mod memory;
mod packet;
mod runner;
mod scenario;
