use crate::{
    eeg::{color, Drawable},
    strategy::{Action, Behavior, Car, Context, PlayerInput},
    utils::Stopwatch,
};
use common::{orientation::to_local, prelude::*};
use nalgebra::Vector3;
use nameof::name_of_type;

/// A jump followed by a flip toward a fixed point.
pub struct Dodge {
    target: Vector3<f32>,
    timer: Stopwatch,
}

impl Dodge {
    const JUMP_TIME: f32 = 0.1;
    const RELEASE_TIME: f32 = 0.2;
    const FLIP_TIME: f32 = 0.3;

    pub fn new(target: Vector3<f32>) -> Self {
        Self {
            target,
            timer: Stopwatch::new(),
        }
    }

    /// Whether it's worth flipping toward `target` instead of driving: we're
    /// on the ground, far away, and already moving toward it at a decent (but
    /// not supersonic) speed.
    pub fn opportunity(ctx: &Context<'_>, target: &Vector3<f32>) -> bool {
        let me = ctx.me();
        let to_target = target - me.loc;
        let closing_speed = to_target.normalize_or_zero().dot(&me.vel);
        me.loc.z < ctx.tuning.dodge_max_height
            && !me.supersonic
            && to_target.norm() > ctx.tuning.dodge_min_distance
            && closing_speed > ctx.tuning.dodge_min_closing_speed
            && closing_speed < ctx.tuning.dodge_max_closing_speed
    }

    /// Controls for this tick, or `None` once the flip is done.
    pub fn step(&mut self, car: &Car, now: f32) -> Option<PlayerInput> {
        let elapsed = self.timer.tick(now);
        if elapsed < Self::JUMP_TIME {
            Some(PlayerInput {
                jump: true,
                ..Default::default()
            })
        } else if elapsed < Self::RELEASE_TIME {
            Some(PlayerInput {
                pitch: -0.5,
                ..Default::default()
            })
        } else if elapsed < Self::FLIP_TIME {
            let local = to_local(&car.orientation, &car.loc, &self.target);
            let direction = local.normalize_or_zero();
            Some(PlayerInput {
                jump: true,
                pitch: -direction.x,
                yaw: direction.y,
                ..Default::default()
            })
        } else {
            None
        }
    }
}

impl Behavior for Dodge {
    fn name(&self) -> &str {
        name_of_type!(Dodge)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        ctx.eeg.draw(Drawable::Box3d(self.target, color::RED));
        match self.step(ctx.me(), ctx.now()) {
            Some(input) => Action::Yield(input),
            None => Action::Return(PlayerInput::default()),
        }
    }
}
