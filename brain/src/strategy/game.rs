use crate::strategy::packet::{BoostPadState, FieldInfo, Packet, PlayerInfo, Touch};
use common::{orientation::orientation_matrix, prelude::*, rl};
use nalgebra::{Matrix3, Vector3};
use ordered_float::OrderedFloat;

/// The engine's view of a single tick, from the perspective of one car.
pub struct Game<'a> {
    pub time: f32,
    /// Seconds since the previous tick. Zero on the first tick.
    pub dt: f32,
    pub round_active: bool,
    pub kickoff_pause: bool,
    pub ball: Ball,
    cars: Vec<Car>,
    player_index: usize,
    pub team: Team,
    pub enemy_team: Team,
    pads: &'a Pads,
}

impl<'a> Game<'a> {
    pub fn new(packet: &Packet, pads: &'a Pads, player_index: usize, dt: f32) -> Self {
        let cars: Vec<Car> = packet
            .cars
            .iter()
            .enumerate()
            .map(|(index, info)| Car::from_info(index, info))
            .collect();
        let team = cars
            .get(player_index)
            .map(|c| c.team)
            .unwrap_or(Team::Blue);
        Self {
            time: packet.game_info.seconds_elapsed,
            dt,
            round_active: packet.game_info.is_round_active,
            kickoff_pause: packet.game_info.is_kickoff_pause,
            ball: Ball::from_info(packet),
            cars,
            player_index,
            team,
            enemy_team: team.opposing(),
            pads,
        }
    }

    /// The car we are controlling.
    ///
    /// Panics if the host sent a packet without our car in it.
    pub fn me(&self) -> &Car {
        &self.cars[self.player_index]
    }

    pub fn cars(&self, team: Team) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(move |c| c.team == team)
    }

    /// Our living teammates, not including ourselves.
    pub fn teammates(&self) -> impl Iterator<Item = &Car> {
        let me = self.player_index;
        self.cars(self.team)
            .filter(move |c| c.index != me && !c.demolished)
    }

    /// Opponents that are currently on the field.
    pub fn opponents(&self) -> impl Iterator<Item = &Car> {
        self.cars(self.enemy_team).filter(|c| !c.demolished)
    }

    pub fn closest_opponent(&self, loc: &Vector3<f32>) -> Option<&Car> {
        self.opponents()
            .min_by_key(|c| OrderedFloat((c.loc - loc).norm()))
    }

    pub fn own_goal(&self) -> Vector3<f32> {
        rl::own_goal(self.team.to_ffi())
    }

    pub fn enemy_goal(&self) -> Vector3<f32> {
        rl::opponent_goal(self.team.to_ffi())
    }

    pub fn pads(&self) -> &Pads {
        self.pads
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub fn from_ffi(index: u8) -> Self {
        match index {
            0 => Team::Blue,
            _ => Team::Orange,
        }
    }

    pub fn to_ffi(self) -> u8 {
        match self {
            Team::Blue => 0,
            Team::Orange => 1,
        }
    }

    pub fn opposing(self) -> Self {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }

    /// `1.0` for blue, `-1.0` for orange. Blue-side coordinates times this
    /// land on our side of the field.
    pub fn sign(self) -> f32 {
        rl::team_sign(self.to_ffi())
    }
}

#[derive(Clone, Debug)]
pub struct Car {
    pub index: usize,
    pub loc: Vector3<f32>,
    /// Columns are forward, right, up. Rebuilt from the host's rotation every
    /// tick.
    pub orientation: Matrix3<f32>,
    pub vel: Vector3<f32>,
    pub ang_vel: Vector3<f32>,
    pub on_ground: bool,
    pub supersonic: bool,
    pub boost: f32,
    pub team: Team,
    pub demolished: bool,
}

impl Car {
    pub fn from_info(index: usize, info: &PlayerInfo) -> Self {
        let rot = info.physics.rotation;
        Self {
            index,
            loc: info.physics.location,
            orientation: orientation_matrix(rot.pitch, rot.yaw, rot.roll),
            vel: info.physics.velocity,
            ang_vel: info.physics.angular_velocity,
            on_ground: info.has_wheel_contact,
            supersonic: info.is_supersonic,
            boost: info.boost,
            team: Team::from_ffi(info.team),
            demolished: info.is_demolished,
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.orientation.forward()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.orientation.up()
    }

    pub fn speed(&self) -> f32 {
        self.vel.norm()
    }

    /// Velocity along the car's nose. Negative when reversing.
    pub fn forward_speed(&self) -> f32 {
        self.vel.dot(&self.forward())
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub loc: Vector3<f32>,
    pub vel: Vector3<f32>,
    pub ang_vel: Vector3<f32>,
    pub last_touch: Option<Touch>,
}

impl Ball {
    fn from_info(packet: &Packet) -> Self {
        let physics = &packet.ball.physics;
        Self {
            loc: physics.location,
            vel: physics.velocity,
            ang_vel: physics.angular_velocity,
            last_touch: packet.ball.latest_touch,
        }
    }

    /// True if anyone touched the ball in the last `window` seconds.
    pub fn touched_within(&self, now: f32, window: f32) -> bool {
        match self.last_touch {
            Some(touch) => touch.time + window > now,
            None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BoostPad {
    pub index: usize,
    pub loc: Vector3<f32>,
    pub active: bool,
    /// Seconds until respawn, as reported by the host.
    pub timer: f32,
}

/// The arena's boost pads, split by size.
#[derive(Clone, Debug, Default)]
pub struct Pads {
    full: Vec<BoostPad>,
    partial: Vec<BoostPad>,
}

impl Pads {
    pub fn from_field(field: &FieldInfo) -> Self {
        let mut pads = Self::default();
        for (index, info) in field.boost_pads.iter().enumerate() {
            let pad = BoostPad {
                index,
                loc: info.location,
                active: false,
                timer: 0.0,
            };
            if info.is_full_boost {
                pads.full.push(pad);
            } else {
                pads.partial.push(pad);
            }
        }
        pads
    }

    /// Refresh pad activity from the host. Pads the host didn't mention are
    /// treated as taken.
    pub fn update(&mut self, states: &[BoostPadState]) {
        for pad in self.full.iter_mut().chain(self.partial.iter_mut()) {
            let state = states.get(pad.index).copied().unwrap_or_default();
            pad.active = state.is_active;
            pad.timer = state.timer;
        }
    }

    pub fn full(&self) -> &[BoostPad] {
        &self.full
    }

    pub fn partial(&self) -> &[BoostPad] {
        &self.partial
    }
}
