pub use self::{
    builder::TestRunner,
    running_test::{RunningTest, TickRecord},
    scenario::{TestCar, TestPad, TestScenario},
};

mod catch;
mod dispatch;
mod get_boost;
mod hive;
mod kickoff;
mod scenario;
