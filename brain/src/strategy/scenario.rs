use crate::{
    predict::{find_bounces, find_future_goal, Frame, FutureGoal, Trajectory},
    strategy::Game,
    tuning::Tuning,
};
use lazycell::LazyCell;

/// Derived facts about the ball forecast, computed at most once per tick and
/// only when a state asks for them.
pub struct Scenario<'a> {
    pub game: &'a Game<'a>,
    ball_prediction: &'a Trajectory,
    tuning: &'a Tuning,
    bounces: LazyCell<Vec<Frame>>,
    ground_contact: LazyCell<Option<Frame>>,
    future_goal: LazyCell<Option<FutureGoal>>,
    rolling_frames: LazyCell<usize>,
}

impl<'a> Scenario<'a> {
    pub fn new(game: &'a Game<'a>, ball_prediction: &'a Trajectory, tuning: &'a Tuning) -> Self {
        Self {
            game,
            ball_prediction,
            tuning,
            bounces: LazyCell::new(),
            ground_contact: LazyCell::new(),
            future_goal: LazyCell::new(),
            rolling_frames: LazyCell::new(),
        }
    }

    /// Every predicted bounce, in time order.
    pub fn bounces(&self) -> &[Frame] {
        self.bounces.borrow_with(|| {
            find_bounces(
                self.ball_prediction,
                self.tuning.bounce_rebound,
                self.tuning.bounce_ground_height,
            )
        })
    }

    /// The first forecast frame where the ball drops low enough to touch the
    /// ground (or a car's roof).
    pub fn ground_contact(&self) -> Option<&Frame> {
        self.ground_contact
            .borrow_with(|| {
                self.ball_prediction
                    .iter()
                    .find(|f| f.loc.z < self.tuning.dribble_min_height)
                    .copied()
            })
            .as_ref()
    }

    pub fn future_goal(&self) -> Option<&FutureGoal> {
        self.future_goal
            .borrow_with(|| {
                find_future_goal(
                    self.ball_prediction,
                    self.tuning.goal_line,
                    self.tuning.goal_search_stride,
                )
            })
            .as_ref()
    }

    /// How many forecast frames have the ball rolling flat along the ground.
    pub fn rolling_frames(&self) -> usize {
        *self.rolling_frames.borrow_with(|| {
            self.ball_prediction
                .iter()
                .filter(|f| f.vel.z.abs() < 10.0 && f.loc.z < self.tuning.dribble_min_height)
                .count()
        })
    }
}
