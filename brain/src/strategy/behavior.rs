use crate::{
    behavior::{
        Catch, DemolishOpponent, Dodge, Dribble, Flick, GetBoost, Idle, Kickoff, PickUp,
        SimplePush,
    },
    strategy::{Context, PlayerInput},
};

pub trait Behavior {
    /// A very short string identifying the behavior; usually just the name of
    /// the type.
    fn name(&self) -> &str;

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action;
}

pub enum Action {
    /// Keep running next tick.
    Yield(PlayerInput),
    /// This tick's controls are the last; pick something new next tick.
    Return(PlayerInput),
    /// Use this tick's controls, then hand control straight to the given
    /// state, skipping the priority scan.
    TailCall(PlayerInput, Box<State>),
}

impl Action {
    pub fn tail_call(input: PlayerInput, state: impl Into<State>) -> Self {
        Action::TailCall(input, Box::new(state.into()))
    }
}

macro_rules! states {
    ($($variant:ident),* $(,)?) => {
        /// The closed set of states the dispatcher can run.
        pub enum State {
            $($variant($variant),)*
        }

        impl Behavior for State {
            fn name(&self) -> &str {
                match self {
                    $(State::$variant(s) => s.name(),)*
                }
            }

            fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
                match self {
                    $(State::$variant(s) => s.execute(ctx),)*
                }
            }
        }

        $(
            impl From<$variant> for State {
                fn from(state: $variant) -> Self {
                    State::$variant(state)
                }
            }
        )*
    };
}

states!(
    Idle,
    Kickoff,
    DemolishOpponent,
    Dribble,
    PickUp,
    Catch,
    GetBoost,
    SimplePush,
    Dodge,
    Flick,
);

impl State {
    /// Open-loop manoeuvres that must run to completion once started.
    pub fn is_protected(&self) -> bool {
        match self {
            State::Dodge(_) | State::Flick(_) => true,
            _ => false,
        }
    }

    pub fn is_kickoff(&self) -> bool {
        match self {
            State::Kickoff(_) => true,
            _ => false,
        }
    }
}
