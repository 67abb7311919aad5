pub mod rankings;
pub mod watch;

pub use rankings::RankingsService;
pub use watch::WatchService;

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::api::RankingSource;
    use crate::domain::{Mode, Player, PlayerDetail, PlayerId};
    use crate::errors::FetchError;

    /// Scripted source: the n-th rankings call gets the n-th response (HTTP status on error)
    #[derive(Clone)]
    pub struct FakeSource {
        responses: Arc<Vec<Result<Vec<Player>, u16>>>,
        delays: Arc<Vec<Duration>>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeSource {
        pub fn new(responses: Vec<Result<Vec<Player>, u16>>) -> Self {
            Self {
                responses: Arc::new(responses),
                delays: Arc::new(Vec::new()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
            self.delays = Arc::new(delays);
            self
        }
    }

    fn status(url: &str, code: u16) -> FetchError {
        FetchError::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::from_u16(code).unwrap(),
        }
    }

    pub fn player(id: &str, name: &str, points: f64) -> Player {
        Player {
            id: PlayerId::from(id),
            name: name.to_string(),
            premium: false,
            points,
            mode_points: None,
            modes: BTreeMap::new(),
        }
    }

    impl RankingSource for FakeSource {
        async fn fetch_rankings(&self, mode: Mode) -> Result<Vec<Player>, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(call) {
                tokio::time::sleep(*delay).await;
            }
            match self.responses.get(call) {
                Some(Ok(players)) => Ok(players.clone()),
                Some(Err(code)) => Err(status(&format!("fake/rankings/{mode}"), *code)),
                None => Ok(Vec::new()),
            }
        }

        async fn fetch_player(&self, id: &PlayerId) -> Result<PlayerDetail, FetchError> {
            if id.0 == "missing" {
                return Err(status("fake/player/missing", 404));
            }
            Ok(PlayerDetail {
                name: format!("player-{id}"),
                premium: false,
                position: Some(1),
                total_points: 0.0,
                tiers: Vec::new(),
            })
        }
    }
}
