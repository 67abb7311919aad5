use serde::Serialize;

use super::avatar::avatar_url;
use crate::config::settings::AvatarSettings;
use crate::domain::mode::glyph_for_key;
use crate::domain::{Mode, Player, PlayerDetail, PlayerId};
use crate::errors::FetchError;
use crate::ranking::{TierClass, Title, ViewState, classify, tier_label};

pub const NOT_TESTED: &str = "No tested";
pub const NO_TIERS: &str = "No tiers recorded";
pub const RETRY_HINT: &str = "Run the command again to retry";

/// Everything the terminal can show in place of the rankings container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    Ranking(RankingScreen),
    NoData(NoData),
    Error(ErrorMessage),
    PlayerCard(PlayerCard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingScreen {
    pub mode: Mode,
    pub rows: Vec<RankingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub avatar_url: String,
    pub title: Title,
    pub points: f64,
    /// Empty when the player has no result in any known discipline
    pub badges: Vec<TierBadge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBadge {
    pub mode: String,
    pub glyph: &'static str,
    pub label: String,
    pub class: TierClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoDataReason {
    NoSearchMatches,
    ModeUntested,
    NothingTested,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoData {
    pub reason: NoDataReason,
    pub headline: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub message: String,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub name: String,
    pub avatar_url: String,
    pub position: Option<u32>,
    pub total_points: f64,
    pub tiers: Vec<CardTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTier {
    pub mode: String,
    pub glyph: &'static str,
    pub label: String,
    pub class: TierClass,
    pub points: Option<f64>,
}

/// Derive the rankings screen from the current view state
pub fn ranking_screen(state: &ViewState, avatars: &AvatarSettings) -> Screen {
    if let Some(message) = state.error() {
        return error_screen(message);
    }

    let visible = state.visible();
    if visible.is_empty() {
        return Screen::NoData(no_data(state.search(), state.mode()));
    }

    let mode = state.mode();
    let rows = visible
        .iter()
        .enumerate()
        .map(|(i, player)| ranking_row(i + 1, player, mode, avatars))
        .collect();

    Screen::Ranking(RankingScreen { mode, rows })
}

fn ranking_row(rank: usize, player: &Player, mode: Mode, avatars: &AvatarSettings) -> RankingRow {
    RankingRow {
        rank,
        id: player.id.clone(),
        name: player.name.clone(),
        avatar_url: avatar_url(avatars, &player.name, player.premium),
        title: classify(player.points),
        points: player.score_for(mode),
        badges: tier_badges(player),
    }
}

/// Badges for known disciplines in fixed order; unknown mode keys are not shown
pub fn tier_badges(player: &Player) -> Vec<TierBadge> {
    Mode::DISCIPLINES
        .iter()
        .filter_map(|mode| {
            let result = player.mode_result(*mode)?;
            let label = tier_label(result);
            Some(TierBadge {
                mode: mode.as_str().to_string(),
                glyph: mode.glyph(),
                label: label.label,
                class: label.class,
            })
        })
        .collect()
}

fn no_data(search: &str, mode: Mode) -> NoData {
    if !search.is_empty() {
        NoData {
            reason: NoDataReason::NoSearchMatches,
            headline: "🔍 No players found".to_string(),
            subtitle: format!("No players named \"{}\"", search),
        }
    } else if !mode.is_overall() {
        NoData {
            reason: NoDataReason::ModeUntested,
            headline: format!("📊 No players tested in {} yet", mode),
            subtitle: "Try another mode or wait for results to be published".to_string(),
        }
    } else {
        NoData {
            reason: NoDataReason::NothingTested,
            headline: "📊 No players tested yet".to_string(),
            subtitle: "Rankings will appear once the first results are published".to_string(),
        }
    }
}

pub fn error_screen(message: &str) -> Screen {
    Screen::Error(ErrorMessage {
        message: message.to_string(),
        hint: RETRY_HINT,
    })
}

pub fn fetch_error_screen(error: &FetchError) -> Screen {
    error_screen(&error.user_message())
}

pub fn player_card_screen(detail: &PlayerDetail, avatars: &AvatarSettings) -> Screen {
    let tiers = detail
        .tiers
        .iter()
        .map(|entry| {
            let label = tier_label(&entry.result);
            CardTier {
                mode: entry.mode.clone(),
                glyph: glyph_for_key(&entry.mode),
                label: label.label,
                class: label.class,
                points: entry.result.points,
            }
        })
        .collect();

    Screen::PlayerCard(PlayerCard {
        name: detail.name.clone(),
        avatar_url: avatar_url(avatars, &detail.name, detail.premium),
        position: detail.position,
        total_points: detail.total_points,
        tiers,
    })
}
