//! Recorded ticks, one CSV row each, with no header:
//!
//! ```text
//! time, round_active, blue_score, orange_score, ball[12], car[15]...
//! ```
//!
//! A physics block is location, rotation (pitch, yaw, roll), velocity and
//! angular velocity. Each car is team, boost, wheel contact, then its physics.

use brain::{BallInfo, GameInfo, Packet, Physics, PlayerInfo, PlayerInput, Rotator};
use nalgebra::Vector3;
use std::{error::Error, fmt, io, str::FromStr};

#[derive(Debug)]
pub struct BadRow {
    row: usize,
    reason: &'static str,
}

impl fmt::Display for BadRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

impl Error for BadRow {}

const PHYSICS_LEN: usize = 12;
const CAR_LEN: usize = 3 + PHYSICS_LEN;

pub fn read_packets(reader: impl io::Read) -> Result<Vec<Packet>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut packets = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        let packet = to_packet(&fields).map_err(|reason| BadRow { row, reason })?;
        packets.push(packet);
    }
    Ok(packets)
}

fn real(field: &str) -> Result<f32, &'static str> {
    field.parse().map_err(|_| "not a number")
}

/// Counts, flags and team indices. `2.5` or `-1` is an error, not a
/// truncation.
fn whole<T: FromStr>(field: &str) -> Result<T, &'static str> {
    field.parse().map_err(|_| "not a whole number")
}

fn to_packet(fields: &[&str]) -> Result<Packet, &'static str> {
    if fields.len() < 4 + PHYSICS_LEN {
        return Err("too few columns");
    }
    let (head, rest) = fields.split_at(4);
    let (ball, cars) = rest.split_at(PHYSICS_LEN);
    if cars.len() % CAR_LEN != 0 {
        return Err("partial car");
    }

    Ok(Packet {
        game_info: GameInfo {
            seconds_elapsed: real(head[0])?,
            is_round_active: whole::<u8>(head[1])? != 0,
            is_kickoff_pause: false,
        },
        ball: BallInfo {
            physics: to_physics(ball)?,
            latest_touch: None,
        },
        cars: cars
            .chunks(CAR_LEN)
            .map(to_car)
            .collect::<Result<Vec<_>, _>>()?,
        boost_pads: Vec::new(),
        team_scores: [whole(head[2])?, whole(head[3])?],
    })
}

fn to_car(fields: &[&str]) -> Result<PlayerInfo, &'static str> {
    Ok(PlayerInfo {
        physics: to_physics(&fields[3..])?,
        has_wheel_contact: whole::<u8>(fields[2])? != 0,
        is_supersonic: false,
        is_demolished: false,
        boost: real(fields[1])?,
        team: whole(fields[0])?,
    })
}

fn to_physics(fields: &[&str]) -> Result<Physics, &'static str> {
    let v = fields
        .iter()
        .map(|f| real(f))
        .collect::<Result<Vec<f32>, _>>()?;
    Ok(Physics {
        location: Vector3::new(v[0], v[1], v[2]),
        rotation: Rotator::new(v[3], v[4], v[5]),
        velocity: Vector3::new(v[6], v[7], v[8]),
        angular_velocity: Vector3::new(v[9], v[10], v[11]),
    })
}

pub fn controls_record(time: f32, index: usize, input: &PlayerInput) -> Vec<String> {
    let flag = |b: bool| if b { "1" } else { "0" }.to_string();
    vec![
        time.to_string(),
        index.to_string(),
        input.throttle.to_string(),
        input.steer.to_string(),
        input.pitch.to_string(),
        input.yaw.to_string(),
        input.roll.to_string(),
        flag(input.jump),
        flag(input.boost),
        flag(input.handbrake),
    ]
}
