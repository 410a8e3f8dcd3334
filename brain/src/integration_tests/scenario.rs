use crate::{
    predict::{linear_predict, Trajectory},
    strategy::{
        BallInfo, BoostPadInfo, BoostPadState, FieldInfo, GameInfo, Packet, Physics, PlayerInfo,
        Rotator, Touch,
    },
};
use nalgebra::Vector3;
use std::f32::consts::PI;

/// One car in a test scenario.
#[derive(Clone, Debug)]
pub struct TestCar {
    pub loc: Vector3<f32>,
    pub rot: Rotator,
    pub vel: Vector3<f32>,
    pub on_ground: bool,
    pub boost: f32,
    pub team: u8,
}

impl Default for TestCar {
    fn default() -> Self {
        Self {
            loc: Vector3::new(0.0, 0.0, 17.01),
            rot: Rotator::new(0.0, PI / 2.0, 0.0),
            vel: Vector3::zeros(),
            on_ground: true,
            boost: 100.0,
            team: 0,
        }
    }
}

impl TestCar {
    pub fn at(loc: Vector3<f32>) -> Self {
        Self {
            loc,
            ..Default::default()
        }
    }

    /// Turn the car to face `target`.
    pub fn facing(mut self, target: Vector3<f32>) -> Self {
        let d = target - self.loc;
        self.rot = Rotator::new(0.0, d.y.atan2(d.x), 0.0);
        self
    }

    fn info(&self) -> PlayerInfo {
        PlayerInfo {
            physics: Physics {
                location: self.loc,
                rotation: self.rot,
                velocity: self.vel,
                angular_velocity: Vector3::zeros(),
            },
            has_wheel_contact: self.on_ground,
            is_supersonic: false,
            is_demolished: false,
            boost: self.boost,
            team: self.team,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TestPad {
    pub loc: Vector3<f32>,
    pub full: bool,
    pub active: bool,
}

/// A frozen snapshot of the world. Tests mutate it between ticks to move
/// things around.
#[derive(Clone, Debug)]
pub struct TestScenario {
    pub ball_loc: Vector3<f32>,
    pub ball_vel: Vector3<f32>,
    pub latest_touch: Option<Touch>,
    /// Index 0 is the car under test.
    pub cars: Vec<TestCar>,
    pub pads: Vec<TestPad>,
    pub round_active: bool,
    pub team_scores: [u32; 2],
    /// Overrides the straight-line ball forecast.
    pub ball_prediction: Option<Trajectory>,
}

impl Default for TestScenario {
    fn default() -> Self {
        Self {
            ball_loc: Vector3::new(0.0, 0.0, 92.74),
            ball_vel: Vector3::zeros(),
            latest_touch: None,
            cars: vec![
                TestCar::default(),
                TestCar {
                    loc: Vector3::new(3500.0, 4500.0, 17.01),
                    team: 1,
                    ..Default::default()
                },
            ],
            pads: Vec::new(),
            round_active: true,
            team_scores: [0, 0],
            ball_prediction: None,
        }
    }
}

impl TestScenario {
    pub fn me(&mut self) -> &mut TestCar {
        &mut self.cars[0]
    }

    pub fn field_info(&self) -> FieldInfo {
        FieldInfo {
            boost_pads: self
                .pads
                .iter()
                .map(|p| BoostPadInfo {
                    location: p.loc,
                    is_full_boost: p.full,
                })
                .collect(),
        }
    }

    pub fn packet(&self, time: f32) -> Packet {
        Packet {
            game_info: GameInfo {
                seconds_elapsed: time,
                is_round_active: self.round_active,
                is_kickoff_pause: false,
            },
            ball: BallInfo {
                physics: Physics {
                    location: self.ball_loc,
                    rotation: Rotator::new(0.0, 0.0, 0.0),
                    velocity: self.ball_vel,
                    angular_velocity: Vector3::zeros(),
                },
                latest_touch: self.latest_touch,
            },
            cars: self.cars.iter().map(TestCar::info).collect(),
            boost_pads: self
                .pads
                .iter()
                .map(|p| BoostPadState {
                    is_active: p.active,
                    timer: 0.0,
                })
                .collect(),
            team_scores: self.team_scores,
        }
    }

    pub fn ball_prediction(&self, time: f32) -> Trajectory {
        match &self.ball_prediction {
            Some(prediction) => prediction.clone(),
            None => linear_predict(self.ball_loc, self.ball_vel, time, 6.0),
        }
    }
}
