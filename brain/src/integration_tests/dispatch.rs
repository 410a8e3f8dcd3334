use crate::{
    eeg::{color, Drawable},
    integration_tests::{RunningTest, TestCar, TestRunner, TestScenario},
    strategy::PlayerInput,
};
use nalgebra::Vector3;

fn assert_sane(test: &RunningTest) {
    for record in test.records() {
        let input = record.input;
        for &axis in &[input.throttle, input.steer, input.pitch, input.yaw, input.roll] {
            assert!(axis.is_finite(), "{:?}", record);
            assert!(-1.0 <= axis && axis <= 1.0, "{:?}", record);
        }
        assert!(!record.state.is_empty());
    }
}

fn moving_ball() -> TestScenario {
    TestScenario {
        ball_loc: Vector3::new(-1000.0, 1500.0, 92.74),
        ball_vel: Vector3::new(300.0, -600.0, 0.0),
        ..Default::default()
    }
}

#[test]
fn idle_hands_over_on_the_second_tick() {
    let mut test = TestRunner::new().scenario(moving_ball()).run();
    test.tick();
    assert_eq!(test.last().state, "Idle");
    assert_eq!(test.last().input, PlayerInput::default());
    assert!(test.logged("[Runner] < Idle"));

    test.tick();
    assert_ne!(test.last().state, "Idle");
}

#[test]
fn state_name_is_drawn() {
    let test = TestRunner::new().scenario(moving_ball()).run_for_millis(50);
    let name = test.last().state.clone();
    assert!(test
        .last()
        .drawables
        .contains(&Drawable::print(name, color::YELLOW)));
}

#[test]
fn deterministic() {
    let run = || {
        TestRunner::new()
            .scenario(moving_ball())
            .each_tick(|time, scenario| {
                scenario.ball_loc = Vector3::new(-1000.0, 1500.0, 92.74)
                    + Vector3::new(300.0, -600.0, 0.0) * time;
                scenario.me().loc = Vector3::new(0.0, 200.0 * time, 17.01);
                scenario.me().vel = Vector3::new(0.0, 200.0, 0.0);
            })
            .run_for_millis(1500)
    };
    let a = run();
    let b = run();
    assert_eq!(a.records().len(), b.records().len());
    for (x, y) in a.records().iter().zip(b.records()) {
        assert_eq!(x.input, y.input);
        assert_eq!(x.state, y.state);
    }
}

#[test]
fn alone_on_an_empty_field() {
    let scenario = TestScenario {
        cars: vec![TestCar::default()],
        ..Default::default()
    };
    let test = TestRunner::new().scenario(scenario).run_for_millis(4000);
    assert_sane(&test);
    // Kickoff times out after three seconds and is picked right back up.
    assert!(test.count_logged("[Runner] > Kickoff") >= 2);
}

#[test]
fn round_inactive_every_tick() {
    let scenario = TestScenario {
        round_active: false,
        ..moving_ball()
    };
    let mut test = TestRunner::new().scenario(scenario).run();
    for _ in 0..240 {
        test.tick();
        assert!(test.brain().runner().expired());
    }
    assert_sane(&test);
}

#[test]
fn missing_car_gets_neutral_controls() {
    let scenario = TestScenario {
        cars: Vec::new(),
        ..Default::default()
    };
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert!(test
        .records()
        .iter()
        .all(|r| r.input == PlayerInput::default()));
}

#[test]
fn carries_a_ball_on_the_roof() {
    let mut scenario = TestScenario {
        ball_loc: Vector3::new(0.0, 1000.0, 150.0),
        ball_vel: Vector3::new(0.0, 0.0, -100.0),
        ..Default::default()
    };
    scenario.me().loc = Vector3::new(0.0, 900.0, 17.01);
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert_eq!(test.last().state, "Dribble");
    assert!(!test.brain().runner().expired());
}

fn rolling_ball(opponent: Vector3<f32>) -> TestScenario {
    let mut scenario = TestScenario {
        ball_loc: Vector3::new(0.0, 500.0, 92.74),
        ball_vel: Vector3::new(0.0, 300.0, 0.0),
        ..Default::default()
    };
    scenario.me().loc = Vector3::new(0.0, 0.0, 17.01);
    scenario.cars[1].loc = opponent;
    scenario
}

#[test]
fn scoops_up_a_rolling_ball() {
    // Their only car is stuck upfield, further from their goal than us.
    let scenario = rolling_ball(Vector3::new(0.0, -2000.0, 17.01));
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert_eq!(test.last().state, "PickUp");
}

#[test]
fn leaves_a_rolling_ball_when_they_are_back() {
    let scenario = rolling_ball(Vector3::new(0.0, 3000.0, 17.01));
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert!(!test.logged("[Runner] > PickUp"));
    assert_eq!(test.last().state, "SimplePush");
}

#[test]
fn scoops_freely_with_two_opponents() {
    let mut scenario = rolling_ball(Vector3::new(0.0, 3000.0, 17.01));
    scenario.cars.push(TestCar {
        team: 1,
        ..TestCar::at(Vector3::new(-3000.0, 4000.0, 17.01))
    });
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert_eq!(test.last().state, "PickUp");
}

#[test]
fn second_man_goes_for_a_bump() {
    let mut scenario = TestScenario {
        ball_loc: Vector3::new(0.0, 3000.0, 92.74),
        cars: vec![
            TestCar {
                vel: Vector3::new(0.0, 1000.0, 0.0),
                ..TestCar::at(Vector3::new(-2000.0, -1000.0, 17.01))
            },
            TestCar::at(Vector3::new(0.0, 2500.0, 17.01)),
            TestCar {
                team: 1,
                ..TestCar::at(Vector3::new(-2000.0, -500.0, 17.01))
            },
        ],
        ..Default::default()
    };
    scenario.me().boost = 100.0;
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);
    assert_eq!(test.last().state, "DemolishOpponent");
    assert!(test.last().drawables.contains(&Drawable::Box3d(
        Vector3::new(-2000.0, -500.0, 17.01),
        color::PINK,
    )));
}
