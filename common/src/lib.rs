#![cfg_attr(feature = "strict", deny(warnings))]

pub mod ext;
pub mod kinematics;
pub mod math;
pub mod orientation;
pub mod prelude;
pub mod rl;
