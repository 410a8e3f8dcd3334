use nalgebra::Vector3;

/// A finite sequence of predicted states for a body, ordered by time.
///
/// For the ball this is supplied fresh by the host every tick and never
/// modified by the engine.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Absolute game time, in seconds.
    pub t: f32,
    pub loc: Vector3<f32>,
    pub vel: Vector3<f32>,
}

impl Frame {
    pub fn new(t: f32, loc: Vector3<f32>, vel: Vector3<f32>) -> Self {
        Self { t, loc, vel }
    }
}

impl Trajectory {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
