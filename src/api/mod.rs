pub mod parsers;
pub mod tierlist_client;

pub use tierlist_client::{RankingSource, TierlistClient};
