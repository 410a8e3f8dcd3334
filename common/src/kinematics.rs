// A nice idiot-friendly site with the equations:
//
// http://zonalandeducation.com/mstm/physics/mechanics/kinematics/EquationsForAcceleratedMotion/EquationsForAcceleratedMotion.htm

use nalgebra::Vector3;

/// Calculate displacement and velocity given a set of initial conditions and a
/// constant acceleration.
pub fn kinematic(v_0: Vector3<f32>, a: Vector3<f32>, t: f32) -> (Vector3<f32>, Vector3<f32>) {
    let d = v_0 * t + 0.5 * a * t * t;
    let v_f = v_0 + a * t;
    (d, v_f)
}
