use crate::strategy::Team;

/// RGBA, each component from 0 to 1.
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const ORANGE: Color = [1.0, 0.5, 0.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const BLUE: Color = [0.5, 0.5, 1.0, 1.0];
pub const PINK: Color = [1.0, 0.5, 0.8, 1.0];

pub fn for_team(team: Team) -> Color {
    match team {
        Team::Blue => BLUE,
        Team::Orange => ORANGE,
    }
}
