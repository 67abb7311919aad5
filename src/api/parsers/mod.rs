mod fields;
pub mod player;
pub mod rankings;

pub use player::parse_player_detail;
pub use rankings::{PayloadShape, detect_shape, normalize};
