use crate::{
    behavior::{Flick, FlickKind},
    eeg::{color, Drawable},
    mechanics::drive_precise,
    predict::linear_predict,
    strategy::{Action, Behavior, Context, PlayerInput},
    utils::Stopwatch,
};
use common::{
    math::special_sauce,
    orientation::{to_local, to_world},
    prelude::*,
};
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Carry the ball on the roof and steer it toward their goal.
#[derive(new)]
pub struct Dribble {
    #[new(default)]
    timer: Stopwatch,
}

impl Dribble {
    /// How far ahead to extrapolate cars when looking for a challenge.
    const CHALLENGE_HORIZON: f32 = 2.0;

    pub fn available(ctx: &Context<'_>) -> bool {
        let ball = ctx.game.ball.loc;
        ball.z > ctx.tuning.dribble_min_height
            && (ball - ctx.me().loc).norm() < ctx.tuning.dribble_reach
    }

    /// Where on the roof we want the ball, in car coordinates. Leans the ball
    /// left or right to curve its path toward the goal.
    fn desired_ball(ctx: &Context<'_>) -> Vector3<f32> {
        let ball = &ctx.game.ball;
        let ball_to_goal = (ctx.game.enemy_goal() - ball.loc).flat();

        let ball_vel_angle = ball.vel.y.atan2(ball.vel.x).abs();
        let goal_angle = ball_to_goal.y.atan2(ball_to_goal.x).abs();
        let angle_diff = (goal_angle - ball_vel_angle) * ctx.game.team.sign();
        let raw_angle = ball_to_goal.angle_between(&ball.vel.flat());

        let lean = if raw_angle.abs() < 0.5 {
            special_sauce(angle_diff * 1.2, -3.0)
        } else {
            angle_diff.sign()
        };
        Vector3::new(35.0, 100.0 * lean, 125.0)
    }

    /// Pop the ball over an opponent who's about to drive into us head-on.
    fn should_pop(ctx: &Context<'_>, elapsed: f32) -> bool {
        let tuning = ctx.tuning;
        if elapsed <= tuning.pop_delay {
            return false;
        }

        let me = ctx.me();
        let opponent = some_or_else!(ctx.game.closest_opponent(&me.loc), {
            return false;
        });

        let now = ctx.now();
        let mine = linear_predict(me.loc, me.vel, now, Self::CHALLENGE_HORIZON);
        let theirs = linear_predict(opponent.loc, opponent.vel, now, Self::CHALLENGE_HORIZON);
        let collision = mine
            .iter()
            .zip(theirs.iter())
            .find(|(a, b)| (a.loc - b.loc).norm() < tuning.pop_collision_radius)
            .map(|(_, b)| b.t);
        let collision = some_or_else!(collision, {
            return false;
        });

        let goal_distance = (ctx.game.enemy_goal() - me.loc).norm();
        me.vel.dot(&opponent.vel) < 0.0
            && tuning.pop_min_goal_distance < goal_distance
            && goal_distance < tuning.pop_max_goal_distance
            && me.speed() > tuning.pop_min_speed
            && collision - now < tuning.pop_reaction_time
    }
}

impl Behavior for Dribble {
    fn name(&self) -> &str {
        name_of_type!(Dribble)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let tuning = ctx.tuning;
        let now = ctx.now();
        let elapsed = self.timer.tick(now);
        let me = ctx.me();
        let ball = ctx.game.ball.loc;

        let lost = ball.z < tuning.dribble_min_height
            || ball.z > tuning.dribble_max_height
            || (ball - me.loc).norm() > tuning.dribble_reach;

        let landing = *some_or_else!(ctx.scenario.ground_contact(), {
            ctx.eeg.log(self.name(), "ball never lands");
            return Action::Return(PlayerInput::default());
        });

        let desired = Self::desired_ball(ctx);
        let relative = to_local(&me.orientation, &me.loc, &ball);
        let difference = relative - desired;
        let offset =
            Vector3::new(difference.x, difference.y * 2.0, 0.0) * special_sauce(elapsed, -1.0);
        let target = to_world(&me.orientation, &landing.loc.flat(), &offset);

        ctx.eeg.draw(Drawable::Box3d(target, color::BLUE));
        ctx.eeg.draw(Drawable::Box3d(
            to_world(&me.orientation, &me.loc, &desired),
            color::RED,
        ));

        let input = drive_precise(me, &target, landing.t, now, ctx.game.dt, tuning);

        if Self::should_pop(ctx, elapsed) {
            ctx.eeg.log(self.name(), "pop!");
            Action::tail_call(input, Flick::new(FlickKind::Pop))
        } else if lost {
            Action::Return(input)
        } else {
            Action::Yield(input)
        }
    }
}

