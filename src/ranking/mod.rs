pub mod presenter;
pub mod tiers;
pub mod view_state;

pub use presenter::{filter_by_search, rank};
pub use tiers::{TierClass, TierLabel, Title, classify, tier_label};
pub use view_state::{ApplyOutcome, RequestTicket, ViewState};
