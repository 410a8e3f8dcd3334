pub use self::{
    bounce::find_bounces,
    goal::{find_future_goal, FutureGoal},
    linear::linear_predict,
    trajectory::{Frame, Trajectory},
};

mod bounce;
mod goal;
mod linear;
mod trajectory;
