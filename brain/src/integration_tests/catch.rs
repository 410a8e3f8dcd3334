use crate::{
    eeg::{color, Drawable},
    integration_tests::{TestRunner, TestScenario},
    predict::{Frame, Trajectory},
    strategy::{State, Touch},
};
use nalgebra::Vector3;

/// A ball dropping onto (0, 2000), bouncing at t = 1 and landing again at
/// t = 2.2.
fn bouncing_ball() -> Trajectory {
    let frames = (0..=132)
        .map(|i| {
            let t = i as f32 / 60.0;
            let (z, vz) = if t <= 1.0 {
                (325.0 * (1.0 - t * t), -650.0 * t)
            } else {
                let u = t - 1.0;
                (390.0 * u - 325.0 * u * u, 390.0 - 650.0 * u)
            };
            Frame::new(t, Vector3::new(0.0, 2000.0, z), Vector3::new(0.0, 0.0, vz))
        })
        .collect();
    Trajectory::new(frames)
}

fn scenario() -> TestScenario {
    let mut scenario = TestScenario {
        ball_loc: Vector3::new(0.0, 2000.0, 325.0),
        ball_prediction: Some(bouncing_ball()),
        ..Default::default()
    };
    scenario.me().loc = Vector3::new(0.0, 1100.0, 17.01);
    scenario
}

fn catch_target(state: &State) -> Option<(Vector3<f32>, f32)> {
    match state {
        State::Catch(catch) => catch.target(),
        _ => None,
    }
}

#[test]
fn waits_under_the_bounce() {
    let mut test = TestRunner::new().scenario(scenario()).run();
    test.tick();
    test.tick();
    assert_eq!(test.last().state, "Catch");

    let (target, time) = catch_target(test.brain().runner().current()).unwrap();
    assert!((target - Vector3::new(0.0, 1970.0, 0.0)).norm() < 1.0, "{:?}", target);
    assert!((time - 1.0).abs() < 1e-4);
    assert!(test
        .last()
        .drawables
        .contains(&Drawable::Box3d(target, color::BLUE)));

    // The lock holds for the rest of the approach.
    test.run_for_millis(500);
    assert_eq!(test.last().state, "Catch");
    assert_eq!(
        catch_target(test.brain().runner().current()).map(|(_, t)| t),
        Some(time),
    );
}

#[test]
fn gives_up_when_the_ball_is_touched() {
    let mut test = TestRunner::new()
        .scenario(scenario())
        .each_tick(|time, scenario| {
            if time >= 0.25 {
                scenario.latest_touch = Some(Touch {
                    time,
                    player_index: 1,
                    team: 1,
                });
            }
        })
        .run_for_millis(100);
    assert_eq!(test.last().state, "Catch");

    test.run_for_millis(200);
    assert!(test.logged("[Catch] ball was touched"));
    assert!(test.logged("[Runner] < Catch"));
}

#[test]
fn unreachable_bounce_is_ignored() {
    let mut scenario = scenario();
    scenario.me().loc = Vector3::new(0.0, -3000.0, 17.01);
    let test = TestRunner::new().scenario(scenario).run_for_millis(50);
    assert_ne!(test.last().state, "Catch");
}
