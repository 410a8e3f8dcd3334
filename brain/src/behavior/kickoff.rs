use crate::{
    behavior::Dodge,
    eeg::{color, Drawable},
    mechanics::drive_simple,
    strategy::{Action, Behavior, Context, PlayerInput},
    utils::Stopwatch,
};
use lazy_static::lazy_static;
use nalgebra::Vector3;
use nameof::name_of_type;
use ordered_float::OrderedFloat;

lazy_static! {
    /// Kickoff spawn points for blue. Mirror through the origin for orange.
    static ref SPAWNS: [Vector3<f32>; 5] = [
        Vector3::new(-1952.0, -2464.0, 0.0),
        Vector3::new(1952.0, -2464.0, 0.0),
        Vector3::new(-256.0, -3840.0, 0.0),
        Vector3::new(256.0, -3840.0, 0.0),
        Vector3::new(0.0, -4608.0, 0.0),
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KickoffRole {
    Corner,
    Back,
    Center,
}

pub struct Kickoff {
    role: KickoffRole,
    /// `1.0` when spawning on the right (from our own goal), `-1.0` on the left.
    side: f32,
    timer: Stopwatch,
    dodge: Option<Dodge>,
}

impl Kickoff {
    /// ETA reported while standing still.
    const STATIONARY_ETA: f32 = 100.0;
    /// Fall back to a point in front of the ball while further than this.
    const BACK_STAGING: [f32; 3] = [0.0, -2700.0, 70.0];

    pub fn new(ctx: &Context<'_>) -> Self {
        let (role, side) = Self::classify(&ctx.me().loc, ctx.game.team.sign());
        Self {
            role,
            side,
            timer: Stopwatch::new(),
            dodge: None,
        }
    }

    /// The ball sits on the center spot during every kickoff.
    pub fn available(ctx: &Context<'_>) -> bool {
        let ball = ctx.game.ball.loc;
        ball.x == 0.0 && ball.y == 0.0
    }

    pub fn role(&self) -> KickoffRole {
        self.role
    }

    /// Match `loc` to the nearest spawn point.
    pub fn classify(loc: &Vector3<f32>, team_sign: f32) -> (KickoffRole, f32) {
        let nearest = SPAWNS
            .iter()
            .enumerate()
            .min_by_key(|(_, spawn)| OrderedFloat((*spawn * team_sign - loc).norm()))
            .map(|(i, _)| i)
            .unwrap_or(4);
        let role = match nearest {
            0 | 1 => KickoffRole::Corner,
            2 | 3 => KickoffRole::Back,
            _ => KickoffRole::Center,
        };
        let side = if nearest == 0 || nearest == 2 {
            1.0
        } else {
            -1.0
        };
        (role, side)
    }

    fn corner(&mut self, ctx: &mut Context<'_>, elapsed: f32) -> PlayerInput {
        let me = ctx.me();
        let sign = ctx.game.team.sign();

        if elapsed < ctx.tuning.kickoff_corner_lead_in {
            let target = Vector3::new(-800.0 * self.side, 0.0, 0.0) * sign;
            ctx.eeg.draw(Drawable::Box3d(target, color::GREEN));
            return drive_simple(me, &target, ctx.tuning);
        }

        let mut input = match &mut self.dodge {
            Some(dodge) => dodge.step(me, ctx.now()).unwrap_or_default(),
            None => {
                self.dodge = Some(Dodge::new(Vector3::new(0.0, -2500.0, 0.0) * sign));
                PlayerInput::default()
            }
        };
        input.boost = true;
        input
    }

    /// Drive at the ball and flip into it at the last moment.
    fn charge(&mut self, ctx: &mut Context<'_>, staging: bool) -> PlayerInput {
        let me = ctx.me();
        let ball = ctx.game.ball.loc;
        let distance = (ball - me.loc).norm();
        let speed = me.speed();
        let eta = if speed == 0.0 {
            Self::STATIONARY_ETA
        } else {
            distance / speed
        };

        if let Some(dodge) = &mut self.dodge {
            return dodge.step(me, ctx.now()).unwrap_or_default();
        }

        let target = if staging && distance > ctx.tuning.kickoff_back_approach {
            Vector3::from(Self::BACK_STAGING) * ctx.game.team.sign()
        } else {
            ball
        };
        if eta < ctx.tuning.kickoff_dodge_eta {
            self.dodge = Some(Dodge::new(ball));
        }
        ctx.eeg.draw(Drawable::Box3d(target, color::GREEN));
        drive_simple(me, &target, ctx.tuning)
    }

    fn center(&mut self, ctx: &mut Context<'_>) -> PlayerInput {
        if !ctx.memory.fake_kickoff_works {
            return self.charge(ctx, false);
        }

        // Fake: back up a little and let them commit.
        ctx.memory.went_for_fake_kickoff = Some(ctx.now());
        let throttle = if ctx.me().loc.y.abs() < 5000.0 {
            -0.5
        } else {
            0.0
        };
        PlayerInput {
            throttle,
            ..Default::default()
        }
    }
}

impl Behavior for Kickoff {
    fn name(&self) -> &str {
        name_of_type!(Kickoff)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let elapsed = self.timer.tick(ctx.now());
        let done = !Self::available(ctx) || elapsed > ctx.tuning.kickoff_timeout;

        ctx.eeg.print_value("role", format!("{:?}", self.role));

        let input = match self.role {
            KickoffRole::Corner => self.corner(ctx, elapsed),
            KickoffRole::Back => self.charge(ctx, true),
            KickoffRole::Center => self.center(ctx),
        };

        if done {
            Action::Return(input)
        } else {
            Action::Yield(input)
        }
    }
}
