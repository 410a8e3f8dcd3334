//! The data exchanged with the game host.
//!
//! These mirror what the host delivers each tick. They are plain data; the
//! engine converts them into the richer types in `strategy::game` before
//! making any decisions.

use nalgebra::Vector3;

/// Unreal euler angles, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Physics {
    pub location: Vector3<f32>,
    pub rotation: Rotator,
    pub velocity: Vector3<f32>,
    pub angular_velocity: Vector3<f32>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    pub time: f32,
    pub player_index: usize,
    pub team: u8,
}

#[derive(Clone, Debug, Default)]
pub struct BallInfo {
    pub physics: Physics,
    pub latest_touch: Option<Touch>,
}

#[derive(Clone, Debug, Default)]
pub struct PlayerInfo {
    pub physics: Physics,
    pub has_wheel_contact: bool,
    pub is_supersonic: bool,
    pub is_demolished: bool,
    /// From 0 to 100.
    pub boost: f32,
    pub team: u8,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct BoostPadState {
    pub is_active: bool,
    pub timer: f32,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct GameInfo {
    pub seconds_elapsed: f32,
    pub is_round_active: bool,
    pub is_kickoff_pause: bool,
}

/// One tick's worth of game state.
#[derive(Clone, Debug, Default)]
pub struct Packet {
    pub game_info: GameInfo,
    pub ball: BallInfo,
    pub cars: Vec<PlayerInfo>,
    /// Indexed the same as `FieldInfo::boost_pads`.
    pub boost_pads: Vec<BoostPadState>,
    pub team_scores: [u32; 2],
}

#[derive(Copy, Clone, Debug)]
pub struct BoostPadInfo {
    pub location: Vector3<f32>,
    pub is_full_boost: bool,
}

/// Static arena metadata, fetched once before the first tick.
#[derive(Clone, Debug, Default)]
pub struct FieldInfo {
    pub boost_pads: Vec<BoostPadInfo>,
}

/// The controller state sent back to the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerInput {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
    pub use_item: bool,
}

impl PlayerInput {
    /// Force every analog axis into `[-1, 1]`. NaN becomes zero.
    pub fn clamped(self) -> Self {
        fn axis(x: f32) -> f32 {
            if x.is_nan() {
                0.0
            } else {
                x.max(-1.0).min(1.0)
            }
        }

        Self {
            throttle: axis(self.throttle),
            steer: axis(self.steer),
            pitch: axis(self.pitch),
            yaw: axis(self.yaw),
            roll: axis(self.roll),
            ..self
        }
    }
}
