use serde::Deserialize;
use serde_json::{Map, Value};

use super::fields::{RawFlag, RawNumber, flag_is_set, number, parse_mode_results, whole_number};
use super::rankings::json_kind;
use crate::domain::{PlayerDetail, PlayerId, TierEntry};
use crate::errors::PayloadError;

#[derive(Debug, Deserialize)]
struct RawPlayerDetail {
    #[serde(default)]
    nick: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    discord_name: Option<String>,
    #[serde(default)]
    es_premium: Option<RawFlag>,
    #[serde(default)]
    position: Option<RawNumber>,
    #[serde(default)]
    total_points: Option<RawNumber>,
    #[serde(default)]
    puntos_totales: Option<RawNumber>,
    #[serde(default)]
    tiers: Option<Map<String, Value>>,
}

/// Parse a player detail body. `id` names the player when the body carries no usable name.
pub fn parse_player_detail(payload: &Value, id: &PlayerId) -> Result<PlayerDetail, PayloadError> {
    if !payload.is_object() {
        return Err(PayloadError::NotAnObject {
            found: json_kind(payload),
        });
    }

    let raw = RawPlayerDetail::deserialize(payload)?;

    let name = [raw.nick, raw.name, raw.discord_name]
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| id.to_string());

    let tiers = parse_mode_results(raw.tiers.as_ref())
        .into_iter()
        .map(|(mode, result)| TierEntry { mode, result })
        .collect();

    Ok(PlayerDetail {
        name,
        premium: flag_is_set(raw.es_premium.as_ref()),
        position: whole_number(raw.position.as_ref()),
        total_points: number(raw.total_points.as_ref())
            .or(number(raw.puntos_totales.as_ref()))
            .unwrap_or(0.0),
        tiers,
    })
}
