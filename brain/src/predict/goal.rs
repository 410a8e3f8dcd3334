use crate::{
    predict::{Frame, Trajectory},
    strategy::Team,
};
use nalgebra::Vector3;

/// A predicted goal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FutureGoal {
    pub loc: Vector3<f32>,
    pub vel: Vector3<f32>,
    pub t: f32,
    /// The team whose net the ball enters.
    pub team: Team,
}

/// Find the first frame in which the ball has crossed a goal line at
/// `|y| >= goal_line`.
///
/// Samples every `stride` frames first, then walks back through the skipped
/// frames to find the exact crossing.
pub fn find_future_goal(trajectory: &Trajectory, goal_line: f32, stride: usize) -> Option<FutureGoal> {
    let frames = trajectory.frames();
    let stride = stride.max(1);
    let crossed = |f: &Frame| f.loc.y.abs() >= goal_line;

    let last = frames.len().checked_sub(1)?;
    let coarse = (0..frames.len())
        .step_by(stride)
        .chain(Some(last))
        .find(|&i| crossed(&frames[i]))?;

    let go_back = coarse.saturating_sub(stride);
    let frame = frames[go_back..=coarse].iter().find(|f| crossed(f))?;

    Some(FutureGoal {
        loc: frame.loc,
        vel: frame.vel,
        t: frame.t,
        team: if frame.loc.y > 0.0 {
            Team::Orange
        } else {
            Team::Blue
        },
    })
}
