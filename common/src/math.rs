/// A sigmoid squashed into `-1..=1`.
///
/// >2 / (1 + e^(ax)) - 1
///
/// With a negative `a` it rises through the origin; the magnitude of `a`
/// controls how quickly it saturates.
pub fn special_sauce(x: f32, a: f32) -> f32 {
    2.0 / (1.0 + (a * x).exp()) - 1.0
}
