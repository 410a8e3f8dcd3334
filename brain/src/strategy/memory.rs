/// Facts the engine carries from one tick to the next, outside of whichever
/// state is running.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Whether we're still willing to fake the center kickoff. Starts out
    /// true; cleared for the rest of the match the first time a fake is
    /// followed closely by a conceded goal.
    pub fake_kickoff_works: bool,
    /// Game time of the most recent fake kickoff tick.
    pub went_for_fake_kickoff: Option<f32>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            fake_kickoff_works: true,
            went_for_fake_kickoff: None,
        }
    }
}

impl Memory {
    /// Call when the opposing team scores. A goal inside `window` seconds of a
    /// fake kickoff means fakes don't work against this opponent.
    pub fn conceded(&mut self, now: f32, window: f32) -> bool {
        match self.went_for_fake_kickoff {
            Some(t) if self.fake_kickoff_works && now - t <= window => {
                self.fake_kickoff_works = false;
                true
            }
            _ => false,
        }
    }
}
