use crate::{
    eeg::{color, Drawable},
    mechanics::drive_simple,
    predict::linear_predict,
    strategy::{Action, Behavior, Context, PlayerInput},
};
use derive_new::new;
use nameof::name_of_type;

/// Leave the ball to a teammate and go bump the nearest opponent.
#[derive(new)]
pub struct DemolishOpponent;

impl DemolishOpponent {
    /// Used as the ETA when we aren't moving.
    const STATIONARY_ETA: f32 = 100.0;
    /// Never extrapolate the target further than this.
    const MAX_HORIZON: f32 = 2.0;

    pub fn available(ctx: &Context<'_>) -> bool {
        let me = ctx.me();
        if Self::is_primary(ctx) || me.boost <= ctx.tuning.demolish_min_boost {
            return false;
        }
        match ctx.game.closest_opponent(&me.loc) {
            Some(opponent) => (opponent.loc - me.loc).norm() < ctx.tuning.demolish_range,
            None => false,
        }
    }

    /// We're the primary if no teammate is closer to the ball than us.
    pub fn is_primary(ctx: &Context<'_>) -> bool {
        let ball = ctx.game.ball.loc;
        let mine = (ball - ctx.me().loc).norm();
        !ctx.game
            .teammates()
            .any(|teammate| (ball - teammate.loc).norm() < mine)
    }
}

impl Behavior for DemolishOpponent {
    fn name(&self) -> &str {
        name_of_type!(DemolishOpponent)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let tuning = ctx.tuning;
        let me = ctx.me();
        let opponent = some_or_else!(ctx.game.closest_opponent(&me.loc), {
            ctx.eeg.log(self.name(), "nobody to hit");
            return Action::Return(PlayerInput::default());
        });

        let distance = (opponent.loc - me.loc).norm();
        let speed = me.speed();
        let eta = if speed == 0.0 {
            Self::STATIONARY_ETA
        } else {
            distance / speed
        };
        let horizon = (eta + tuning.demolish_lead).min(Self::MAX_HORIZON);
        let target = linear_predict(opponent.loc, opponent.vel, ctx.now(), horizon)
            .iter()
            .last()
            .map(|frame| frame.loc)
            .unwrap_or(opponent.loc);

        ctx.eeg.draw(Drawable::Box3d(target, color::PINK));
        let input = drive_simple(me, &target, tuning);

        if distance > tuning.demolish_leash || speed < tuning.demolish_min_speed {
            Action::Return(input)
        } else {
            Action::Yield(input)
        }
    }
}
