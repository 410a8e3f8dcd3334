use crate::{
    strategy::{Action, Behavior, Context, PlayerInput},
    utils::Stopwatch,
};
use nameof::name_of_type;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlickKind {
    /// Double-tap jump to knock the ball up off the roof.
    Pop,
    /// Spin around under the ball and flip it backwards over the car.
    Backflick,
}

/// A scripted flick off the roof while dribbling.
pub struct Flick {
    kind: FlickKind,
    timer: Stopwatch,
}

impl Flick {
    pub fn new(kind: FlickKind) -> Self {
        Self {
            kind,
            timer: Stopwatch::new(),
        }
    }

    fn pop(elapsed: f32) -> Option<PlayerInput> {
        let jump = if elapsed < 0.1 {
            true
        } else if elapsed < 0.2 {
            false
        } else if elapsed < 0.3 {
            true
        } else {
            return None;
        };
        Some(PlayerInput {
            jump,
            ..Default::default()
        })
    }

    fn backflick(elapsed: f32) -> Option<PlayerInput> {
        let mut input = PlayerInput::default();
        if elapsed < 0.1 {
            // Let the ball settle.
        } else if elapsed < 0.3 {
            input.jump = true;
            input.yaw = 1.0;
            input.pitch = 1.0;
        } else if elapsed < 0.5 {
            input.boost = true;
            input.yaw = 1.0;
        } else if elapsed < 1.1 {
            input.yaw = 1.0;
        } else if elapsed < 1.2 {
            input.jump = true;
            input.pitch = 1.0;
        } else {
            return None;
        }
        Some(input)
    }
}

impl Behavior for Flick {
    fn name(&self) -> &str {
        name_of_type!(Flick)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let elapsed = self.timer.tick(ctx.now());
        let input = match self.kind {
            FlickKind::Pop => Self::pop(elapsed),
            FlickKind::Backflick => Self::backflick(elapsed),
        };
        match input {
            Some(input) => Action::Yield(input),
            None => Action::Return(PlayerInput::default()),
        }
    }
}
