pub mod mode;
pub mod models;

pub use mode::{Mode, UnknownMode};
pub use models::{ModeResult, Player, PlayerDetail, PlayerId, TierEntry};
