use crate::strategy::{Action, Behavior, Context, PlayerInput};
use derive_new::new;
use nameof::name_of_type;

/// Does nothing, and gives up control immediately.
#[derive(new)]
pub struct Idle;

impl Behavior for Idle {
    fn name(&self) -> &str {
        name_of_type!(Idle)
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> Action {
        Action::Return(PlayerInput::default())
    }
}
