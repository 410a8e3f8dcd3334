use crate::{
    eeg::{color, Drawable},
    mechanics::drive_precise,
    predict::Frame,
    strategy::{Action, Behavior, Context, PlayerInput},
};
use common::prelude::*;
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Be under the ball when it next hits the ground.
#[derive(new)]
pub struct Catch {
    /// Where and when, once chosen.
    #[new(default)]
    target: Option<(Vector3<f32>, f32)>,
}

impl Catch {
    pub fn available(ctx: &Context<'_>) -> bool {
        Self::first_reachable(ctx).is_some()
    }

    /// The first bounce we could plausibly get to in time, assuming a
    /// conservative average speed.
    fn first_reachable<'a>(ctx: &Context<'a>) -> Option<&'a Frame> {
        let me = ctx.me();
        let now = ctx.now();
        let closing_speed = ctx.tuning.catch_closing_speed;
        ctx.scenario
            .bounces()
            .iter()
            .find(|b| (b.loc - me.loc).norm() / closing_speed <= b.t - now)
    }

    fn lock(ctx: &Context<'_>, bounce: &Frame) -> (Vector3<f32>, f32) {
        let bounce_loc = bounce.loc.flat();
        let away = (ctx.me().loc.flat() - bounce_loc).normalize_or_zero();
        let mut target = bounce_loc + away * ctx.tuning.catch_standoff;

        // Near their goal, shade toward the side that sends it in.
        if bounce_loc.y * ctx.game.team.sign() > ctx.tuning.catch_goal_zone_y {
            let goal = ctx.game.enemy_goal();
            target += (bounce_loc - goal).normalize_or_zero() * ctx.tuning.catch_goal_nudge;
        }
        (target, bounce.t)
    }

    pub fn target(&self) -> Option<(Vector3<f32>, f32)> {
        self.target
    }
}

impl Behavior for Catch {
    fn name(&self) -> &str {
        name_of_type!(Catch)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let now = ctx.now();
        if ctx.game.ball.touched_within(now, ctx.tuning.touch_grace) {
            ctx.eeg.log(self.name(), "ball was touched");
            return Action::Return(PlayerInput::default());
        }

        let (target, time) = match self.target {
            Some(target) => target,
            None => match Self::first_reachable(ctx) {
                Some(bounce) => {
                    let target = Self::lock(ctx, bounce);
                    self.target = Some(target);
                    target
                }
                None => {
                    ctx.eeg.log(self.name(), "no reachable bounce");
                    return Action::Return(PlayerInput::default());
                }
            },
        };

        if time < now {
            ctx.eeg.log(self.name(), "too late");
            return Action::Return(PlayerInput::default());
        }

        ctx.eeg.draw(Drawable::Box3d(target, color::BLUE));
        Action::Yield(drive_precise(
            ctx.me(),
            &target,
            time,
            now,
            ctx.game.dt,
            ctx.tuning,
        ))
    }
}
