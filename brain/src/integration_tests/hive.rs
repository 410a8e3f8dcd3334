use crate::{
    eeg::EEG,
    hive::{DroneStatus, Hivemind, SaveAssignment},
    integration_tests::{RunningTest, TestCar, TestScenario},
    predict::FutureGoal,
    strategy::{PlayerInput, Team},
    tuning::Tuning,
};
use nalgebra::Vector3;
use std::ops::Range;

/// Sends the first ready drone.
struct FirstReady;

impl SaveAssignment for FirstReady {
    fn assign(&mut self, _threat: &FutureGoal, drones: &[DroneStatus]) -> Option<usize> {
        drones.iter().find(|d| d.ready).map(|d| d.index)
    }
}

fn three_drones() -> TestScenario {
    TestScenario {
        ball_loc: Vector3::new(0.0, 2000.0, 92.74),
        cars: vec![
            TestCar::at(Vector3::new(3000.0, -3000.0, 17.01)),
            TestCar::at(Vector3::new(0.0, -4620.0, 17.01)),
            TestCar::at(Vector3::new(-3000.0, -3000.0, 17.01)),
        ],
        ..Default::default()
    }
}

fn run(hive: &mut Hivemind, scenario: &TestScenario, ticks: Range<u32>) {
    let mut eeg = EEG::new();
    for i in ticks {
        let time = i as f32 / RunningTest::TICK_RATE;
        let outputs = hive.tick(&scenario.packet(time), &scenario.ball_prediction(time), &mut eeg);
        assert_eq!(outputs.len(), 3);
    }
}

fn manoeuvre(hive: &Hivemind, index: usize) -> Option<&'static str> {
    hive.drones()
        .iter()
        .find(|d| d.index() == index)
        .and_then(|d| d.manoeuvre())
}

fn destination(hive: &Hivemind, index: usize) -> Option<Vector3<f32>> {
    hive.drones()
        .iter()
        .find(|d| d.index() == index)
        .and_then(|d| d.destination())
}

#[test]
fn drones_take_their_slots() {
    let scenario = three_drones();
    let mut hive = Hivemind::new(Team::Blue, vec![2, 0, 1], Tuning::default());
    run(&mut hive, &scenario, 0..1);

    let ready: Vec<bool> = hive.drones().iter().map(|d| d.ready()).collect();
    assert_eq!(ready, vec![false, true, false]);
    assert_eq!(manoeuvre(&hive, 0), Some("SlowToPosition"));
    assert_eq!(manoeuvre(&hive, 2), Some("SlowToPosition"));
    assert_eq!(manoeuvre(&hive, 1), None);

    run(&mut hive, &scenario, 1..61);
    assert_eq!(manoeuvre(&hive, 0), Some("SlowToPosition"));
    assert_eq!(manoeuvre(&hive, 2), Some("SlowToPosition"));
    assert!(hive.drones()[1].ready());
}

#[test]
fn landing_drone_recovers_first() {
    let mut scenario = three_drones();
    scenario.cars[0].on_ground = false;
    let mut hive = Hivemind::new(Team::Blue, 0..3, Tuning::default());
    run(&mut hive, &scenario, 0..1);
    assert_eq!(manoeuvre(&hive, 0), Some("Recovery"));
    assert_eq!(manoeuvre(&hive, 2), Some("SlowToPosition"));
}

#[test]
fn slots_follow_the_drones() {
    let mut scenario = three_drones();
    let mut hive = Hivemind::new(Team::Blue, 0..3, Tuning::default());
    let slots = Hivemind::slots(Team::Blue, 3, &Tuning::default());
    run(&mut hive, &scenario, 0..5);
    assert_eq!(destination(&hive, 0), Some(slots[2]));
    assert_eq!(destination(&hive, 2), Some(slots[0]));

    // The outside drones trade sides mid-drive.
    let left = scenario.cars[2].loc;
    scenario.cars[2].loc = scenario.cars[0].loc;
    scenario.cars[0].loc = left;
    run(&mut hive, &scenario, 5..6);
    assert_eq!(manoeuvre(&hive, 0), Some("SlowToPosition"));
    assert_eq!(destination(&hive, 0), Some(slots[0]));
    assert_eq!(destination(&hive, 2), Some(slots[2]));
}

#[test]
fn nobody_leaves_without_an_assignment() {
    let mut scenario = three_drones();
    scenario.ball_loc = Vector3::new(0.0, -4000.0, 300.0);
    scenario.ball_vel = Vector3::new(0.0, -2000.0, 0.0);
    let mut hive = Hivemind::new(Team::Blue, 0..3, Tuning::default());
    run(&mut hive, &scenario, 0..10);
    assert_eq!(manoeuvre(&hive, 1), None);
}

#[test]
fn ready_drone_goes_for_the_save() {
    let mut scenario = three_drones();
    scenario.ball_loc = Vector3::new(0.0, -4000.0, 300.0);
    scenario.ball_vel = Vector3::new(0.0, -2000.0, 0.0);
    let mut hive = Hivemind::new(Team::Blue, 0..3, Tuning::default()).with_assignment(FirstReady);

    // Nobody is ready on the first tick.
    run(&mut hive, &scenario, 0..1);
    assert_eq!(manoeuvre(&hive, 1), None);

    run(&mut hive, &scenario, 1..3);
    assert_eq!(manoeuvre(&hive, 1), Some("Aerial"));
    assert!(!hive.drones()[1].ready());
}

#[test]
fn shots_at_their_net_are_not_threats() {
    let mut scenario = three_drones();
    scenario.ball_loc = Vector3::new(0.0, 4000.0, 300.0);
    scenario.ball_vel = Vector3::new(0.0, 2000.0, 0.0);
    let mut hive = Hivemind::new(Team::Blue, 0..3, Tuning::default()).with_assignment(FirstReady);
    run(&mut hive, &scenario, 0..10);
    assert_eq!(manoeuvre(&hive, 1), None);
}

#[test]
fn missing_drone_idles() {
    let scenario = three_drones();
    let mut hive = Hivemind::new(Team::Blue, vec![0, 1, 2, 7], Tuning::default());
    let mut eeg = EEG::new();
    let outputs = hive.tick(&scenario.packet(0.0), &scenario.ball_prediction(0.0), &mut eeg);
    assert_eq!(outputs.len(), 4);
    assert_eq!(outputs[&7], PlayerInput::default());
}
