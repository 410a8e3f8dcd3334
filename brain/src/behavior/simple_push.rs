use crate::{
    behavior::Dodge,
    eeg::{color, Drawable},
    mechanics::drive_simple,
    strategy::{Action, Behavior, Context},
};
use common::prelude::*;
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Drive at a point behind the ball, lined up with their goal. Always
/// available, and lasts exactly one tick so the dispatcher can reconsider.
#[derive(new)]
pub struct SimplePush;

impl SimplePush {
    pub fn target(ball: &Vector3<f32>, goal: &Vector3<f32>, distance: f32) -> Vector3<f32> {
        let hit = (goal - ball).normalize_or_zero();
        let perpendicular = hit.cross(&Vector3::z());
        let reach = distance / 3.0;
        let sideways = perpendicular.dot(ball).max(-reach).min(reach);
        ball - hit * reach + perpendicular * 2.0 * sideways / 3.0
    }
}

impl Behavior for SimplePush {
    fn name(&self) -> &str {
        name_of_type!(SimplePush)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let me = ctx.me();
        let ball = ctx.game.ball.loc;
        let distance = (ball - me.loc).norm();
        let target = Self::target(&ball, &ctx.game.enemy_goal(), distance);
        ctx.eeg.draw(Drawable::Box3d(target, color::BLUE));

        let mut input = drive_simple(me, &target, ctx.tuning);
        input.boost = false;

        if Dodge::opportunity(ctx, &ball) {
            Action::tail_call(input, Dodge::new(ball))
        } else {
            Action::Return(input)
        }
    }
}
