/// Measures game time since the first tick it saw.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    start: Option<f32>,
    now: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current game time and return the elapsed time. The first
    /// call returns zero.
    pub fn tick(&mut self, time: f32) -> f32 {
        self.start.get_or_insert(time);
        self.now = time;
        self.elapsed()
    }

    pub fn elapsed(&self) -> f32 {
        match self.start {
            Some(start) => self.now - start,
            None => 0.0,
        }
    }
}
