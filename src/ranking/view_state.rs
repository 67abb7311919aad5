use log::{debug, warn};

use super::presenter::{filter_by_search, rank};
use crate::domain::{Mode, Player};
use crate::errors::FetchError;

/// Handle for one rankings request; only the most recently issued one may change state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    mode: Mode,
}

impl RequestTicket {
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed,
    /// A newer request was issued first; the result was dropped
    Stale,
}

/// Everything the ranking screen is derived from
#[derive(Debug, Clone)]
pub struct ViewState {
    mode: Mode,
    search: String,
    players: Vec<Player>,
    error: Option<String>,
    latest_seq: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Mode::Overall)
    }
}

impl ViewState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            search: String::new(),
            players: Vec::new(),
            error: None,
            latest_seq: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch to `mode` and issue a ticket superseding every earlier one
    pub fn begin_request(&mut self, mode: Mode) -> RequestTicket {
        self.latest_seq += 1;
        self.mode = mode;
        RequestTicket {
            seq: self.latest_seq,
            mode,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply a finished request. Success replaces the player set wholesale;
    /// failure keeps the last good set and records the error.
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<Vec<Player>, FetchError>) -> ApplyOutcome {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale {} response (request {} superseded by {})",
                ticket.mode, ticket.seq, self.latest_seq
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(players) => {
                self.players = players;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!("Error loading rankings from {}: {}", e.url(), e);
                self.error = Some(e.user_message());
                ApplyOutcome::Failed
            }
        }
    }

    /// Change the search term; the error state gives way to the filtered list
    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
        self.error = None;
    }

    /// Players to show, ranked for the active mode and filtered by the search term
    pub fn visible(&self) -> Vec<Player> {
        filter_by_search(&rank(&self.players, self.mode), &self.search)
    }
}
