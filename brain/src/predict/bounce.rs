use crate::predict::{Frame, Trajectory};
use itertools::Itertools;

/// Every frame where the ball rebounds off the ground: the vertical velocity
/// jumps up by more than `rebound` between this frame and the next, while the
/// ball is below `ground_height`.
pub fn find_bounces(trajectory: &Trajectory, rebound: f32, ground_height: f32) -> Vec<Frame> {
    trajectory
        .iter()
        .tuple_windows()
        .filter(|(cur, next)| cur.vel.z < next.vel.z - rebound && cur.loc.z < ground_height)
        .map(|(cur, _)| *cur)
        .collect()
}
