use crate::{
    behavior::Dodge,
    eeg::{color, Drawable},
    mechanics::drive_simple,
    strategy::{Action, Behavior, BoostPad, Context, PlayerInput},
};
use derive_new::new;
use nameof::name_of_type;
use ordered_float::OrderedFloat;

/// Grab the nearest big boost pad that isn't much of a detour.
#[derive(new)]
pub struct GetBoost {
    /// Host index of the chosen pad.
    #[new(default)]
    pad: Option<usize>,
}

impl GetBoost {
    pub fn available(ctx: &Context<'_>) -> bool {
        ctx.me().boost < ctx.tuning.boost_low && Self::choose_pad(ctx).is_some()
    }

    /// A pad qualifies if it's active and either very close, or closer than
    /// the ball with room to spare.
    fn choose_pad<'a>(ctx: &Context<'a>) -> Option<&'a BoostPad> {
        let me = ctx.me();
        let tuning = ctx.tuning;
        let ball_distance = (ctx.game.ball.loc - me.loc).norm();
        ctx.game
            .pads()
            .full()
            .iter()
            .filter(|pad| pad.active)
            .filter(|pad| {
                let distance = (pad.loc - me.loc).norm();
                distance < tuning.boost_pad_reach
                    || distance + tuning.boost_pad_detour < ball_distance
            })
            .min_by_key(|pad| OrderedFloat((pad.loc - me.loc).norm()))
    }

    pub fn pad(&self) -> Option<usize> {
        self.pad
    }
}

impl Behavior for GetBoost {
    fn name(&self) -> &str {
        name_of_type!(GetBoost)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        if self.pad.is_none() {
            self.pad = Self::choose_pad(ctx).map(|pad| pad.index);
        }

        let game = ctx.game;
        let pad = self
            .pad
            .and_then(|index| game.pads().full().iter().find(|pad| pad.index == index));
        let pad = some_or_else!(pad, {
            ctx.eeg.log(self.name(), "no pad");
            return Action::Return(PlayerInput::default());
        });

        let me = ctx.me();
        ctx.eeg.draw(Drawable::Box3d(pad.loc, color::ORANGE));
        let input = drive_simple(me, &pad.loc, ctx.tuning);

        if me.boost >= ctx.tuning.boost_full || !pad.active {
            Action::Return(input)
        } else if Dodge::opportunity(ctx, &pad.loc) {
            Action::tail_call(input, Dodge::new(pad.loc))
        } else {
            Action::Yield(input)
        }
    }
}
