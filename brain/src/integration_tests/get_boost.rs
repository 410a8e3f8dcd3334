use crate::{
    eeg::{color, Drawable},
    integration_tests::{TestPad, TestRunner, TestScenario},
    strategy::State,
};
use nalgebra::Vector3;

fn scenario() -> TestScenario {
    let mut scenario = TestScenario {
        ball_loc: Vector3::new(0.0, -1500.0, 92.74),
        pads: vec![
            TestPad {
                loc: Vector3::new(400.0, -3000.0, 73.0),
                full: true,
                active: true,
            },
            TestPad {
                loc: Vector3::new(0.0, -2800.0, 70.0),
                full: false,
                active: true,
            },
        ],
        ..Default::default()
    };
    scenario.me().loc = Vector3::new(0.0, -3000.0, 17.01);
    scenario.me().boost = 25.0;
    scenario
}

fn chosen_pad(state: &State) -> Option<usize> {
    match state {
        State::GetBoost(get_boost) => get_boost.pad(),
        _ => None,
    }
}

#[test]
fn low_boost_goes_for_a_pad() {
    let test = TestRunner::new().scenario(scenario()).run_for_millis(50);
    assert_eq!(test.last().state, "GetBoost");
    assert_eq!(chosen_pad(test.brain().runner().current()), Some(0));
    assert!(test.last().drawables.contains(&Drawable::Box3d(
        Vector3::new(400.0, -3000.0, 73.0),
        color::ORANGE,
    )));
    assert_eq!(test.last().input.throttle, 1.0);
}

#[test]
fn enough_boost_moves_on() {
    let mut test = TestRunner::new().scenario(scenario()).run_for_millis(50);
    test.scenario_mut().me().boost = 85.0;
    test.tick();
    assert!(test.brain().runner().expired());
    assert!(test.logged("[Runner] < GetBoost"));

    test.tick();
    assert_eq!(test.last().state, "SimplePush");
}

#[test]
fn pad_taken_moves_on() {
    let mut test = TestRunner::new().scenario(scenario()).run_for_millis(50);
    test.scenario_mut().pads[0].active = false;
    test.tick();
    assert!(test.logged("[Runner] < GetBoost"));

    test.tick();
    assert_eq!(test.last().state, "SimplePush");
}

#[test]
fn plenty_of_boost_ignores_pads() {
    let mut scenario = scenario();
    scenario.me().boost = 60.0;
    let test = TestRunner::new().scenario(scenario).run_for_millis(50);
    assert_eq!(test.last().state, "SimplePush");
}

#[test]
fn round_pause_restarts_the_state() {
    let mut test = TestRunner::new().scenario(scenario()).run_for_millis(50);
    assert_eq!(test.count_logged("[Runner] > GetBoost"), 1);

    test.scenario_mut().round_active = false;
    test.tick();
    assert_eq!(test.last().state, "GetBoost");
    assert!(test.brain().runner().expired());
    assert!(test.logged("[Runner] < GetBoost"));

    test.scenario_mut().round_active = true;
    test.tick();
    assert_eq!(test.last().state, "GetBoost");
    assert!(!test.brain().runner().expired());
    assert_eq!(test.count_logged("[Runner] > GetBoost"), 2);
}
