use crate::predict::{Frame, Trajectory};
use nalgebra::Vector3;

/// Samples per second of a straight-line prediction.
const SAMPLE_RATE: f32 = 60.0;

/// Extrapolates a body moving at constant velocity, 60 samples per second,
/// starting at `start_time` and covering `duration` seconds.
pub fn linear_predict(
    loc: Vector3<f32>,
    vel: Vector3<f32>,
    start_time: f32,
    duration: f32,
) -> Trajectory {
    let count = (duration.max(0.0) * SAMPLE_RATE) as usize;
    let frames = (0..count)
        .map(|i| {
            let elapsed = i as f32 / SAMPLE_RATE;
            Frame::new(start_time + elapsed, loc + vel * elapsed, vel)
        })
        .collect();
    Trajectory::new(frames)
}
