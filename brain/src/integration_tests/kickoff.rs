use crate::{
    behavior::{Dodge, KickoffRole},
    eeg::{color, Drawable},
    integration_tests::{TestCar, TestRunner, TestScenario},
    strategy::State,
};
use nalgebra::Vector3;

fn kickoff_role(state: &State) -> Option<KickoffRole> {
    match state {
        State::Kickoff(kickoff) => Some(kickoff.role()),
        _ => None,
    }
}

#[test]
fn corner_spawn() {
    let mut scenario = TestScenario::default();
    *scenario.me() = TestCar::at(Vector3::new(-1952.0, -2464.0, 17.01)).facing(Vector3::zeros());
    let mut test = TestRunner::new().scenario(scenario).run();

    test.tick();
    assert_eq!(test.last().state, "Kickoff");
    assert!(test.logged("[Runner] kickoff!"));
    assert_eq!(
        kickoff_role(test.brain().runner().current()),
        Some(KickoffRole::Corner),
    );
    let lead_in = Drawable::Box3d(Vector3::new(-800.0, 0.0, 0.0), color::GREEN);
    assert!(test.last().drawables.contains(&lead_in));

    // Lead-in lasts half a second.
    while test.records().len() < 60 {
        test.tick();
    }
    assert!(test.last().drawables.contains(&lead_in));

    let input = test.tick().input;
    assert!(input.boost);
    assert!(!input.jump);

    let input = test.tick().input;
    assert!(input.boost);
    assert!(input.jump);
    assert_eq!(test.last().state, "Kickoff");
}

#[test]
fn back_spawn_charges() {
    let mut scenario = TestScenario::default();
    *scenario.me() = TestCar::at(Vector3::new(256.0, -3840.0, 17.01)).facing(Vector3::zeros());
    let test = TestRunner::new().scenario(scenario).run_for_millis(100);

    assert_eq!(
        kickoff_role(test.brain().runner().current()),
        Some(KickoffRole::Back),
    );
    let input = test.last().input;
    assert_eq!(input.throttle, 1.0);
    assert!(!input.jump);
}

#[test]
fn fake_until_it_backfires() {
    let mut scenario = TestScenario::default();
    *scenario.me() = TestCar::at(Vector3::new(0.0, -4608.0, 17.01));
    let mut test = TestRunner::new().scenario(scenario).run_for_millis(500);

    assert_eq!(
        kickoff_role(test.brain().runner().current()),
        Some(KickoffRole::Center),
    );
    assert!(test.brain().memory().fake_kickoff_works);
    assert!(test.brain().memory().went_for_fake_kickoff.is_some());
    assert_eq!(test.last().input.throttle, -0.5);

    // They score right away.
    test.scenario_mut().team_scores = [0, 1];
    test.tick();
    assert!(!test.brain().memory().fake_kickoff_works);
    assert!(test.logged("[Brain] fake kickoffs disabled"));

    // From now on we go for the ball instead.
    test.tick();
    assert_eq!(test.last().state, "Kickoff");
    assert!(test.last().input.throttle > 0.0);
}

#[test]
fn late_goal_keeps_faking() {
    let mut scenario = TestScenario::default();
    *scenario.me() = TestCar::at(Vector3::new(0.0, -4608.0, 17.01));
    let mut test = TestRunner::new()
        .scenario(scenario)
        .each_tick(|time, scenario| {
            // Ball leaves the center spot after the kickoff.
            if time > 1.0 {
                scenario.ball_loc = Vector3::new(0.0, 1000.0, 92.74);
            }
            if time > 25.0 {
                scenario.team_scores = [0, 1];
            }
        })
        .run_for_millis(25_100);

    assert!(test.brain().memory().fake_kickoff_works);
    test.tick();
    assert!(test.brain().memory().fake_kickoff_works);
}

#[test]
fn flips_are_not_interrupted() {
    let test = TestRunner::new()
        .state(Dodge::new(Vector3::new(0.0, 1000.0, 0.0)))
        .run_for_millis(200);
    assert_eq!(test.last().state, "Dodge");
    assert!(!test.logged("[Runner] kickoff!"));

    let test = TestRunner::new()
        .state(Dodge::new(Vector3::new(0.0, 1000.0, 0.0)))
        .run_for_millis(400);
    assert_eq!(test.last().state, "Kickoff");
}
