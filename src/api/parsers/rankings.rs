use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

use super::fields::{RawFlag, RawId, RawNumber, flag_is_set, number, parse_mode_results};
use crate::domain::{Player, PlayerId};
use crate::errors::PayloadError;

const FLAT_FIELD: &str = "players";
const TIER_BUCKETS: [&str; 5] = ["tier1", "tier2", "tier3", "tier4", "tier5"];

/// How a rankings body lays out its players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// `{ "players": [...] }`
    Flat,
    /// `{ "tier1": [...], ..., "tier5": [...] }`
    TierBuckets,
    /// Neither layout present
    Empty,
}

/// Detect the layout; a flat `players` array wins whenever it is present.
pub fn detect_shape(body: &Map<String, Value>) -> PayloadShape {
    if body.get(FLAT_FIELD).is_some_and(|v| !v.is_null()) {
        PayloadShape::Flat
    } else if TIER_BUCKETS.iter().any(|key| body.get(*key).is_some_and(|v| !v.is_null())) {
        PayloadShape::TierBuckets
    } else {
        PayloadShape::Empty
    }
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: RawId,
    name: String,
    #[serde(default)]
    es_premium: Option<RawFlag>,
    #[serde(default)]
    points: Option<RawNumber>,
    #[serde(default)]
    mode_points: Option<RawNumber>,
    #[serde(default)]
    modalidades: Option<Map<String, Value>>,
}

impl RawPlayer {
    fn into_player(self) -> Player {
        let modes: BTreeMap<_, _> = parse_mode_results(self.modalidades.as_ref()).into_iter().collect();
        Player {
            id: PlayerId::from(self.id),
            name: self.name,
            premium: flag_is_set(self.es_premium.as_ref()),
            points: number(self.points.as_ref()).unwrap_or(0.0),
            mode_points: number(self.mode_points.as_ref()),
            modes,
        }
    }
}

/// Turn a rankings body of any supported layout into one flat player list.
///
/// Players keep payload order (bucket order for tier buckets). Duplicate ids
/// keep their first occurrence. Unreadable player records are skipped.
pub fn normalize(payload: &Value) -> Result<Vec<Player>, PayloadError> {
    let body = payload.as_object().ok_or(PayloadError::NotAnObject {
        found: json_kind(payload),
    })?;

    let shape = detect_shape(body);
    debug!("Rankings payload shape: {:?}", shape);

    let fields: &[&str] = match shape {
        PayloadShape::Flat => &[FLAT_FIELD],
        PayloadShape::TierBuckets => &TIER_BUCKETS,
        PayloadShape::Empty => &[],
    };

    let mut seen = HashSet::new();
    let mut players = Vec::new();

    for field in fields {
        for player in parse_player_array(body, field)? {
            if seen.insert(player.id.clone()) {
                players.push(player);
            } else {
                debug!("Dropping duplicate player id {}", player.id);
            }
        }
    }

    Ok(players)
}

fn parse_player_array(body: &Map<String, Value>, field: &str) -> Result<Vec<Player>, PayloadError> {
    let entries = match body.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(PayloadError::NotAnArray {
                field: field.to_string(),
            });
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| match RawPlayer::deserialize(entry) {
            Ok(raw) => Some(raw.into_player()),
            Err(e) => {
                warn!("Skipping unreadable player in '{}': {}", field, e);
                None
            }
        })
        .collect())
}

pub(super) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
