use common::rl;

/// Returns the throttle and boost that move `current` toward `desired` in one
/// tick of length `dt`.
///
/// Both speeds are measured along the direction of travel. `desired` is
/// clamped to what the car can actually reach.
pub fn speed_controller(current: f32, desired: f32, dt: f32) -> (f32, bool) {
    if dt == 0.0 {
        return (0.0, false);
    }

    let desired = desired.max(0.0).min(rl::CAR_MAX_SPEED);
    let possible_accel = throttle_accel(current);
    let desired_accel = (desired - current) / dt;

    if desired_accel < -rl::CAR_BRAKE_ACCEL {
        // More than coasting can shed in one tick.
        (-1.0, false)
    } else if desired_accel < 0.0 {
        (0.0, false)
    } else if possible_accel >= desired_accel {
        if possible_accel == 0.0 {
            (0.0, false)
        } else {
            (desired_accel / possible_accel, false)
        }
    } else if desired_accel < (possible_accel + rl::CAR_BOOST_ACCEL) * 4.0 {
        (1.0, false)
    } else {
        (1.0, true)
    }
}

/// Acceleration from full throttle at the given forward speed.
fn throttle_accel(speed: f32) -> f32 {
    if speed < 0.0 {
        rl::CAR_BRAKE_ACCEL
    } else if speed < rl::CAR_THROTTLE_TAPER_SPEED {
        -36.0 / 35.0 * speed + rl::CAR_THROTTLE_ACCEL
    } else if speed < rl::CAR_NORMAL_SPEED {
        -16.0 * speed + 22560.0
    } else {
        0.0
    }
}
