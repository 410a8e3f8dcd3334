pub use self::{
    aerial_turn::aerial_turn,
    drive::{angle_to, drive_precise, drive_simple},
    jump_turn::jump_turn,
    landing::{predict_landing, Landing},
    speed::speed_controller,
    steer::steer_response,
};

mod aerial_turn;
mod drive;
mod jump_turn;
mod landing;
mod speed;
mod steer;
