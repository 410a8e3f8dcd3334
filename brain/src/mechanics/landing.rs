use crate::strategy::Car;
use common::{kinematics::kinematic, prelude::*, rl};
use nalgebra::Vector3;

const SIMULATION_DT: f32 = 1.0 / 60.0;
const SIMULATION_STEPS: usize = 200;
/// The car is approximated as a sphere this size.
const CAR_RADIUS: f32 = 40.0;
/// Skipped so a car that just left a surface doesn't "land" on it again.
const IGNORE_STEPS: usize = 10;

/// Where a falling car will hit the arena, and which way it should face when
/// it does.
#[derive(Copy, Clone, Debug)]
pub struct Landing {
    pub loc: Vector3<f32>,
    /// Points out of the surface.
    pub normal: Vector3<f32>,
    /// The car's velocity projected onto the surface.
    pub forward: Vector3<f32>,
    /// Seconds from now.
    pub time: f32,
}

/// Simulates ballistic flight until the car touches the arena. Returns `None`
/// if it stays airborne for the whole horizon.
pub fn predict_landing(car: &Car) -> Option<Landing> {
    let gravity = Vector3::new(0.0, 0.0, rl::GRAVITY);
    let mut loc = car.loc;
    let mut vel = car.vel;

    for i in 0..SIMULATION_STEPS {
        let (d, v) = kinematic(vel, gravity, SIMULATION_DT);
        vel = v;
        let speed = vel.norm();
        if speed > rl::CAR_MAX_SPEED {
            vel *= rl::CAR_MAX_SPEED / speed;
        }
        loc += d;

        if i < IGNORE_STEPS {
            continue;
        }

        let normal = arena_collision(&loc, CAR_RADIUS);
        if normal != Vector3::zeros() {
            let forward = (vel - vel.dot(&normal) * normal).normalize_or_zero();
            return Some(Landing {
                loc,
                normal,
                forward,
                time: (i + 1) as f32 * SIMULATION_DT,
            });
        }
    }
    None
}

/// The combined surface normal of every arena wall a sphere is touching, or
/// zero if it's touching nothing.
///
/// The arena is treated as a plain box; goals and corner ramps are ignored.
fn arena_collision(loc: &Vector3<f32>, radius: f32) -> Vector3<f32> {
    let mut normal = Vector3::zeros();
    if loc.z < radius {
        normal += Vector3::z();
    }
    if loc.z > rl::FIELD_MAX_Z - radius {
        normal -= Vector3::z();
    }
    if loc.x > rl::FIELD_MAX_X - radius {
        normal -= Vector3::x();
    }
    if loc.x < -rl::FIELD_MAX_X + radius {
        normal += Vector3::x();
    }
    if loc.y > rl::FIELD_MAX_Y - radius {
        normal -= Vector3::y();
    }
    if loc.y < -rl::FIELD_MAX_Y + radius {
        normal += Vector3::y();
    }
    normal.normalize_or_zero()
}
