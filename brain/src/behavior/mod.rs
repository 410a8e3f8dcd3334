pub use self::{
    catch::Catch,
    demolish::DemolishOpponent,
    dodge::Dodge,
    dribble::Dribble,
    flick::{Flick, FlickKind},
    get_boost::GetBoost,
    idle::Idle,
    kickoff::{Kickoff, KickoffRole},
    pick_up::PickUp,
    simple_push::SimplePush,
};

mod catch;
mod demolish;
mod dodge;
mod dribble;
mod flick;
mod get_boost;
mod idle;
mod kickoff;
mod pick_up;
mod simple_push;
