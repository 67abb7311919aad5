use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::mode::Mode;

/// Opaque player identity; the API sends it as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Result of a player in a single mode. Absent fields mean the API did not send them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResult {
    pub tier: Option<u8>,
    pub tier_display: Option<String>,
    pub points: Option<f64>,
}

/// Player as listed by the rankings endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub premium: bool,
    pub points: f64,
    /// Per-mode score some API versions attach when ranking a single mode
    pub mode_points: Option<f64>,
    /// Keyed by the API's mode name; unknown modes are kept but never badged
    pub modes: BTreeMap<String, ModeResult>,
}

impl Player {
    pub fn mode_result(&self, mode: Mode) -> Option<&ModeResult> {
        self.modes.get(mode.as_str())
    }

    /// Score that orders this player within `mode`.
    ///
    /// Overall uses aggregate points. A discipline uses its own result's
    /// points, then the player-level `mode_points`, then aggregate points.
    pub fn score_for(&self, mode: Mode) -> f64 {
        if mode.is_overall() {
            return self.points;
        }
        self.mode_result(mode)
            .and_then(|result| result.points)
            .or(self.mode_points)
            .unwrap_or(self.points)
    }
}

/// One row of the per-mode section of a player's detail card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    pub mode: String,
    pub result: ModeResult,
}

/// Player as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub name: String,
    pub premium: bool,
    pub position: Option<u32>,
    pub total_points: f64,
    pub tiers: Vec<TierEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(points: f64, mode_points: Option<f64>, sword: Option<f64>) -> Player {
        let mut modes = BTreeMap::new();
        if let Some(p) = sword {
            modes.insert(
                "Sword".to_string(),
                ModeResult {
                    tier: Some(2),
                    tier_display: None,
                    points: Some(p),
                },
            );
        }
        Player {
            id: PlayerId::from("1"),
            name: "alex".to_string(),
            premium: false,
            points,
            mode_points,
            modes,
        }
    }

    #[test]
    fn overall_uses_aggregate_points() {
        assert_eq!(player(120.0, Some(5.0), Some(30.0)).score_for(Mode::Overall), 120.0);
    }

    #[test]
    fn discipline_prefers_its_own_result() {
        assert_eq!(player(120.0, Some(5.0), Some(30.0)).score_for(Mode::Sword), 30.0);
    }

    #[test]
    fn discipline_falls_back_to_mode_points_then_aggregate() {
        assert_eq!(player(120.0, Some(5.0), None).score_for(Mode::Sword), 5.0);
        assert_eq!(player(120.0, None, None).score_for(Mode::Axe), 120.0);
    }
}
