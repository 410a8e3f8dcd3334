//! Controls several cars from one decision process.
//!
//! Every drone defends a slot spread along our goal line. Once in its slot it
//! turns to face upfield and reports itself ready. When the forecast shows the
//! ball going into our net, a [`SaveAssignment`] may send one drone up to meet
//! it.

use crate::{
    eeg::{color, Drawable, EEG},
    maneuvers::{Aerial, Manoeuvre, Recovery, SlowToPosition},
    mechanics::jump_turn,
    predict::{find_future_goal, FutureGoal, Trajectory},
    strategy::{Car, Packet, PlayerInput, Team},
    tuning::Tuning,
};
use common::prelude::*;
use log::warn;
use nameof::name_of_type;
use nalgebra::Vector3;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Chooses which drone, if any, goes for a ball heading into our net.
pub trait SaveAssignment {
    fn assign(&mut self, threat: &FutureGoal, drones: &[DroneStatus]) -> Option<usize>;
}

/// Leaves every drone in its slot.
pub struct NeverAssign;

impl SaveAssignment for NeverAssign {
    fn assign(&mut self, _threat: &FutureGoal, _drones: &[DroneStatus]) -> Option<usize> {
        None
    }
}

/// A read-only summary of a drone, as of the end of the previous tick.
#[derive(Clone, Debug)]
pub struct DroneStatus {
    pub index: usize,
    pub ready: bool,
    pub busy: bool,
    pub loc: Vector3<f32>,
    pub vel: Vector3<f32>,
}

pub struct Drone {
    index: usize,
    time_on_ground: f32,
    time_off_ground: f32,
    manoeuvre: Option<Manoeuvre>,
    ready: bool,
}

impl Drone {
    fn new(index: usize) -> Self {
        Self {
            index,
            // Until told otherwise, assume it's been sitting on its wheels.
            time_on_ground: f32::INFINITY,
            time_off_ground: 0.0,
            manoeuvre: None,
            ready: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn time_off_ground(&self) -> f32 {
        self.time_off_ground
    }

    /// Name of the manoeuvre in progress.
    pub fn manoeuvre(&self) -> Option<&'static str> {
        self.manoeuvre.as_ref().map(Manoeuvre::name)
    }

    /// Where the drone is currently driving to.
    pub fn destination(&self) -> Option<Vector3<f32>> {
        self.manoeuvre.as_ref().and_then(Manoeuvre::destination)
    }

    fn update_ground_time(&mut self, car: &Car, dt: f32) {
        if car.on_ground {
            self.time_on_ground += dt;
            self.time_off_ground = 0.0;
        } else {
            self.time_on_ground = 0.0;
            self.time_off_ground += dt;
        }
    }

    fn step(
        &mut self,
        car: &Car,
        slot: Vector3<f32>,
        heading: Vector3<f32>,
        now: f32,
        dt: f32,
        tuning: &Tuning,
    ) -> PlayerInput {
        if self.manoeuvre.is_none() && (slot - car.loc).flat().norm() > tuning.slot_tolerance {
            let upside_down = car.up().z < 0.0;
            self.manoeuvre = Some(
                if self.time_on_ground < tuning.recovery_ground_time || upside_down {
                    Manoeuvre::Recovery(Recovery::new())
                } else {
                    Manoeuvre::SlowToPosition(SlowToPosition::new(slot))
                },
            );
        }

        // Roles are re-sorted every tick, so the slot may have moved.
        if let Some(Manoeuvre::SlowToPosition(slow)) = &mut self.manoeuvre {
            slow.retarget(slot);
        }

        if let Some(manoeuvre) = &mut self.manoeuvre {
            self.ready = false;
            let input = manoeuvre.step(car, now, dt, tuning);
            if manoeuvre.finished() {
                self.manoeuvre = None;
            }
            return input;
        }

        // In the slot. Face upfield and stay put.
        let aligned = car.forward().flat().angle_between(&heading) < tuning.ready_angle;
        let slow = car.speed() < tuning.ready_speed;
        self.ready = aligned && slow;
        if self.ready {
            PlayerInput::default()
        } else if !slow {
            PlayerInput {
                throttle: -car.forward_speed().sign(),
                ..Default::default()
            }
        } else {
            jump_turn(car, &heading, self.time_on_ground)
        }
    }

    fn status(&self, car: &Car) -> DroneStatus {
        DroneStatus {
            index: self.index,
            ready: self.ready,
            busy: self.manoeuvre.is_some(),
            loc: car.loc,
            vel: car.vel,
        }
    }
}

pub struct Hivemind {
    team: Team,
    drones: Vec<Drone>,
    tuning: Tuning,
    assignment: Box<dyn SaveAssignment>,
    last_time: Option<f32>,
}

impl Hivemind {
    pub fn new(team: Team, drone_indices: impl IntoIterator<Item = usize>, tuning: Tuning) -> Self {
        let mut indices: Vec<usize> = drone_indices.into_iter().collect();
        indices.sort();
        indices.dedup();
        Self {
            team,
            drones: indices.into_iter().map(Drone::new).collect(),
            tuning,
            assignment: Box::new(NeverAssign),
            last_time: None,
        }
    }

    pub fn with_assignment(mut self, assignment: impl SaveAssignment + 'static) -> Self {
        self.assignment = Box::new(assignment);
        self
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// Defensive slots for `count` drones, from our left to our right.
    pub fn slots(team: Team, count: usize, tuning: &Tuning) -> Vec<Vector3<f32>> {
        let sign = team.sign();
        let goal = common::rl::own_goal(team.to_ffi());
        let middle = count.saturating_sub(1) as f32 / 2.0;
        (0..count)
            .map(|i| {
                let x = (i as f32 - middle) * tuning.slot_spacing * sign;
                Vector3::new(x, goal.y + tuning.slot_depth * sign, 0.0)
            })
            .collect()
    }

    pub fn tick(
        &mut self,
        packet: &Packet,
        ball_prediction: &Trajectory,
        eeg: &mut EEG,
    ) -> BTreeMap<usize, PlayerInput> {
        let now = packet.game_info.seconds_elapsed;
        eeg.begin(now);
        let dt = match self.last_time {
            Some(last) if now >= last => now - last,
            _ => 0.0,
        };
        self.last_time = Some(now);

        let cars: Vec<Car> = packet
            .cars
            .iter()
            .enumerate()
            .map(|(index, info)| Car::from_info(index, info))
            .collect();

        let mut outputs = BTreeMap::new();
        let mut live = Vec::new();
        for (i, drone) in self.drones.iter_mut().enumerate() {
            match cars.get(drone.index) {
                Some(car) => {
                    drone.update_ground_time(car, dt);
                    live.push(i);
                }
                None => {
                    warn!("drone {} is missing from the packet", drone.index);
                    outputs.insert(drone.index, PlayerInput::default());
                }
            }
        }

        let threat = find_future_goal(
            ball_prediction,
            self.tuning.goal_line,
            self.tuning.goal_search_stride,
        )
        .filter(|goal| goal.team == self.team);
        if let Some(threat) = &threat {
            eeg.draw(Drawable::Box3d(threat.loc, color::RED));
            self.assign_save(threat, &cars, &live, eeg);
        }

        // Left to right, from our point of view.
        let sign = self.team.sign();
        let drones = &self.drones;
        live.sort_by_key(|&i| OrderedFloat(cars[drones[i].index].loc.x * sign));
        let slots = Self::slots(self.team, live.len(), &self.tuning);
        let heading = Vector3::new(0.0, sign, 0.0);

        for (&i, slot) in live.iter().zip(slots) {
            let drone = &mut self.drones[i];
            let car = &cars[drone.index];
            eeg.draw(Drawable::Box3d(slot, color::for_team(self.team)));
            let input = drone.step(car, slot, heading, now, dt, &self.tuning);
            outputs.insert(drone.index, input.clamped());
        }
        outputs
    }

    fn assign_save(&mut self, threat: &FutureGoal, cars: &[Car], live: &[usize], eeg: &mut EEG) {
        let statuses: Vec<DroneStatus> = live
            .iter()
            .map(|&i| {
                let drone = &self.drones[i];
                drone.status(&cars[drone.index])
            })
            .collect();

        let chosen = match self.assignment.assign(threat, &statuses) {
            Some(chosen) => chosen,
            None => return,
        };
        let drone = match self.drones.iter_mut().find(|d| d.index == chosen) {
            Some(drone) => drone,
            None => {
                warn!("save assigned to unknown drone {}", chosen);
                return;
            }
        };
        if let Some(Manoeuvre::Aerial(_)) = drone.manoeuvre {
            return;
        }
        eeg.log(name_of_type!(Hivemind), format!("drone {} goes for the save", chosen));
        drone.manoeuvre = Some(Manoeuvre::Aerial(Aerial::new(threat.loc, threat.t)));
        drone.ready = false;
    }
}
