use crate::{
    behavior::{Catch, DemolishOpponent, Dribble, GetBoost, Idle, Kickoff, PickUp, SimplePush},
    eeg::{color, Drawable},
    strategy::{Action, Behavior, Context, PlayerInput, State},
};
use nameof::name_of_type;

/// Owns the running state and decides when to replace it.
pub struct Runner {
    current: State,
    expired: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    pub fn new() -> Self {
        Self {
            current: Idle::new().into(),
            expired: false,
        }
    }

    #[cfg(test)]
    pub fn with_current(current: impl Into<State>) -> Self {
        Self {
            current: current.into(),
            expired: false,
        }
    }

    pub fn current(&self) -> &State {
        &self.current
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn execute(&mut self, ctx: &mut Context<'_>) -> PlayerInput {
        if !self.current.is_kickoff() && !self.current.is_protected() && Kickoff::available(ctx) {
            ctx.eeg.log(name_of_type!(Runner), "kickoff!");
            let kickoff = Kickoff::new(ctx).into();
            self.enter(ctx, kickoff);
        } else if self.expired {
            let next = self.choose(ctx);
            self.enter(ctx, next);
        }

        ctx.eeg
            .draw(Drawable::print(self.current.name(), color::YELLOW));

        match self.current.execute(ctx) {
            Action::Yield(input) => {
                if !ctx.game.round_active {
                    self.expire(ctx);
                }
                input
            }
            Action::Return(input) => {
                self.expire(ctx);
                input
            }
            Action::TailCall(input, next) => {
                self.enter(ctx, *next);
                input
            }
        }
    }

    /// Walk the states from most to least important and take the first one
    /// that's available. `SimplePush` always is.
    fn choose(&self, ctx: &mut Context<'_>) -> State {
        if Kickoff::available(ctx) {
            Kickoff::new(ctx).into()
        } else if DemolishOpponent::available(ctx) {
            DemolishOpponent::new().into()
        } else if Dribble::available(ctx) {
            Dribble::new().into()
        } else if PickUp::available(ctx) {
            PickUp::new().into()
        } else if Catch::available(ctx) {
            Catch::new().into()
        } else if GetBoost::available(ctx) {
            GetBoost::new().into()
        } else {
            SimplePush::new().into()
        }
    }

    fn enter(&mut self, ctx: &mut Context<'_>, next: State) {
        ctx.eeg
            .log(name_of_type!(Runner), format!("> {}", next.name()));
        self.current = next;
        self.expired = false;
    }

    fn expire(&mut self, ctx: &mut Context<'_>) {
        if !self.expired {
            ctx.eeg
                .log(name_of_type!(Runner), format!("< {}", self.current.name()));
        }
        self.expired = true;
    }
}
