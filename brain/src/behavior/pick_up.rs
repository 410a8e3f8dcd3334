use crate::{
    behavior::Dodge,
    eeg::{color, Drawable},
    mechanics::{drive_simple, speed_controller},
    strategy::{Action, Behavior, Car, Context},
};
use common::{math::special_sauce, prelude::*};
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Scoop a rolling ball up onto the roof by cutting in from the side.
#[derive(new)]
pub struct PickUp {
    /// Once we're alongside the ball, stop offsetting and drive into it.
    #[new(default)]
    ready_to_cut: bool,
}

impl PickUp {
    pub fn available(ctx: &Context<'_>) -> bool {
        let tuning = ctx.tuning;
        let me = ctx.me();
        let ball = &ctx.game.ball;
        let goal = ctx.game.enemy_goal();

        let rolling = ball.loc.z < tuning.dribble_min_height
            && ctx.scenario.rolling_frames() > tuning.pickup_rolling_frames;
        let good_distance = (ball.loc - goal).norm() > tuning.pickup_goal_clearance
            && (ball.loc - me.loc).norm() < tuning.pickup_reach;

        // In a 1v1, leave it alone if they're already back defending.
        let opponents: Vec<&Car> = ctx.game.opponents().collect();
        let uncontested = match opponents.as_slice() {
            [opponent] => (me.loc - goal).norm() < (opponent.loc - goal).norm(),
            _ => true,
        };

        rolling && good_distance && uncontested
    }

    fn target(&mut self, ctx: &Context<'_>) -> Vector3<f32> {
        let tuning = ctx.tuning;
        let me = ctx.me();
        let ball = &ctx.game.ball;
        let goal = ctx.game.enemy_goal();

        let close_to_own_goal = (ball.loc - ctx.game.own_goal()).norm() < tuning.pickup_own_goal_danger;
        let too_slow = ball.vel.dot(&me.vel.normalize_or_zero()) < 700.0;
        let wrong_side = me.loc.y.abs() + 200.0 < ball.loc.y.abs();

        if self.ready_to_cut || (too_slow && !(close_to_own_goal || wrong_side)) {
            return ball.loc;
        }

        let perpendicular = ball.vel.normalize_or_zero().cross(&Vector3::z());
        let side = perpendicular.dot(&(ball.loc - goal)).sign();
        let offset = 90.0 + 30.0 * special_sauce(ball.vel.norm(), -0.002);
        let target = ball.loc + perpendicular * offset * side + ball.vel / 20.0;

        if (target - me.loc).norm() < tuning.pickup_cut_radius {
            self.ready_to_cut = true;
        }
        target
    }
}

impl Behavior for PickUp {
    fn name(&self) -> &str {
        name_of_type!(PickUp)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let tuning = ctx.tuning;
        let me = ctx.me();
        let ball = &ctx.game.ball;

        let lost = ctx.game.ball.touched_within(ctx.now(), tuning.touch_grace)
            || ball.loc.z > tuning.dribble_min_height
            || (ball.loc - me.loc).norm() > tuning.pickup_leash
            || (ball.loc - ctx.game.enemy_goal()).norm() < tuning.pickup_goal_clearance;

        let target = self.target(ctx);
        ctx.eeg.draw(Drawable::Box3d(target, color::BLUE));

        let mut input = drive_simple(me, &target, tuning);
        let (throttle, boost) = speed_controller(
            me.speed(),
            ball.vel.norm() + tuning.pickup_speed_margin,
            ctx.game.dt,
        );
        input.throttle = throttle;
        input.boost = boost;

        if lost {
            Action::Return(input)
        } else if Dodge::opportunity(ctx, &target) {
            Action::tail_call(input, Dodge::new(target))
        } else {
            Action::Yield(input)
        }
    }
}
