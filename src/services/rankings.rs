use log::{error, info};

use crate::api::RankingSource;
use crate::config::settings::{AppConfig, AvatarSettings};
use crate::domain::{Mode, Player, PlayerId};
use crate::errors::FetchError;
use crate::ranking::{ApplyOutcome, RequestTicket, ViewState};
use crate::rendering::{Screen, fetch_error_screen, player_card_screen, ranking_screen};

/// Owns the view state and turns user actions into screens.
///
/// Every fetch failure ends up as an error screen; nothing here returns an error.
pub struct RankingsService<S> {
    source: S,
    state: ViewState,
    avatars: AvatarSettings,
}

impl<S: RankingSource> RankingsService<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        Self {
            source,
            state: ViewState::default(),
            avatars: config.avatar.clone(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Switch to `mode` and load its ranking
    pub async fn load(&mut self, mode: Mode) -> Screen {
        let ticket = self.state.begin_request(mode);
        let result = self.source.fetch_rankings(mode).await;
        self.state.apply(ticket, result);
        self.screen()
    }

    /// Switch mode without fetching; anything still in flight becomes stale
    pub fn select_mode(&mut self, mode: Mode) {
        self.state.begin_request(mode);
    }

    pub fn search(&mut self, term: &str) -> Screen {
        self.state.set_search(term);
        self.screen()
    }

    pub fn screen(&self) -> Screen {
        ranking_screen(&self.state, &self.avatars)
    }

    /// Start a refresh of the active mode whose result arrives later through [`Self::apply`]
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.state.begin_request(self.state.mode())
    }

    pub fn apply(&mut self, ticket: RequestTicket, result: Result<Vec<Player>, FetchError>) -> ApplyOutcome {
        let outcome = self.state.apply(ticket, result);
        if outcome == ApplyOutcome::Applied {
            info!("Showing {} players for {}", self.state.players().len(), ticket.mode());
        }
        outcome
    }

    /// Detail card of one player, or an inline error screen
    pub async fn player_card(&self, id: &PlayerId) -> Screen {
        match self.source.fetch_player(id).await {
            Ok(detail) => player_card_screen(&detail, &self.avatars),
            Err(e) => {
                error!("Error loading player {} from {}: {}", id, e.url(), e);
                fetch_error_screen(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::{FakeSource, player};
    use crate::rendering::screen::NoDataReason;

    fn service(source: FakeSource) -> RankingsService<FakeSource> {
        RankingsService::new(source, &AppConfig::new())
    }

    #[tokio::test]
    async fn load_then_search() {
        let source = FakeSource::new(vec![Ok(vec![player("1", "alex", 10.0), player("2", "sam", 90.0)])]);
        let mut service = service(source);

        let Screen::Ranking(screen) = service.load(Mode::Overall).await else {
            panic!("expected ranking");
        };
        assert_eq!(screen.rows[0].name, "sam");

        let Screen::Ranking(screen) = service.search("ALE") else {
            panic!("expected ranking");
        };
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].rank, 1);
        assert_eq!(service.state().players().len(), 2);
    }

    #[tokio::test]
    async fn failed_load_shows_inline_error() {
        let source = FakeSource::new(vec![Err(503)]);
        let mut service = service(source);
        match service.load(Mode::Sword).await {
            Screen::Error(error) => assert_eq!(error.message, "HTTP error! status: 503"),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_mode_is_no_data() {
        let mut service = service(FakeSource::new(vec![Ok(vec![])]));
        match service.load(Mode::Axe).await {
            Screen::NoData(no_data) => assert_eq!(no_data.reason, NoDataReason::ModeUntested),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn player_errors_are_inline() {
        let service = service(FakeSource::new(vec![]));
        match service.player_card(&PlayerId::from("missing")).await {
            Screen::Error(error) => assert_eq!(error.message, "Not found"),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn player_card_is_built() {
        let service = service(FakeSource::new(vec![]));
        match service.player_card(&PlayerId::from("1")).await {
            Screen::PlayerCard(card) => assert_eq!(card.name, "player-1"),
            other => panic!("unexpected screen {other:?}"),
        }
    }
}
