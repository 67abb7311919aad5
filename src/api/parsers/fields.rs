use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Mode, ModeResult, PlayerId};

/// Identity sent as either a JSON number (any width) or a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawId {
    Number(serde_json::Number),
    Text(String),
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

impl From<RawId> for PlayerId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) if n.is_i64() || n.is_u64() => PlayerId(n.to_string()),
            RawId::Number(n) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64 => PlayerId(format!("{}", f as i64)),
                _ => PlayerId(n.to_string()),
            },
            RawId::Text(s) => PlayerId(s.trim().to_string()),
        }
    }
}

/// Numeric field sent as a JSON number or a numeric string. Anything else reads as absent.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawNumber {
    pub(super) fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            RawNumber::Other(value) => {
                debug!("Ignoring non-numeric value {}", value);
                None
            }
        }
    }
}

pub(super) fn number(field: Option<&RawNumber>) -> Option<f64> {
    field.and_then(RawNumber::as_f64)
}

/// Non-negative whole number that fits a `u32`, such as a leaderboard position
pub(super) fn whole_number(field: Option<&RawNumber>) -> Option<u32> {
    number(field)
        .filter(|n| n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(n))
        .map(|n| n as u32)
}

/// Premium flag, sent as `"si"`/`"no"` by older API versions and as a boolean by newer ones
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawFlag {
    Bool(bool),
    Text(String),
}

impl RawFlag {
    pub(super) fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "si" | "sí" | "yes" | "true"),
        }
    }
}

pub(super) fn flag_is_set(flag: Option<&RawFlag>) -> bool {
    flag.is_some_and(RawFlag::is_set)
}

/// Tier as a bare ordinal (`3`) or as a display string (`"HT3"`)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTier {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawModeResult {
    #[serde(default)]
    tier: Option<RawTier>,
    #[serde(default)]
    tier_display: Option<String>,
    #[serde(default)]
    puntos: Option<RawNumber>,
    #[serde(default)]
    points: Option<RawNumber>,
}

fn ordinal(value: f64) -> Option<u8> {
    (value.fract() == 0.0 && (1.0..=5.0).contains(&value)).then_some(value as u8)
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl RawModeResult {
    fn into_result(self) -> Option<ModeResult> {
        let (tier, tier_text) = match self.tier {
            Some(RawTier::Number(n)) => (ordinal(n), None),
            Some(RawTier::Text(text)) => match text.trim().parse::<f64>() {
                Ok(n) => (ordinal(n), None),
                Err(_) => (None, non_empty(Some(text))),
            },
            None => (None, None),
        };
        let tier_display = non_empty(self.tier_display).or(tier_text);

        if tier.is_none() && tier_display.is_none() {
            return None;
        }

        Some(ModeResult {
            tier,
            tier_display,
            points: number(self.puntos.as_ref()).or(number(self.points.as_ref())),
        })
    }
}

/// Parse a single per-mode entry. Anything unreadable counts as "not tested".
pub(super) fn parse_mode_result(mode: &str, value: &Value) -> Option<ModeResult> {
    if value.is_null() {
        return None;
    }
    match RawModeResult::deserialize(value) {
        Ok(raw) => {
            let result = raw.into_result();
            if result.is_none() {
                debug!("Mode '{}' has neither tier nor tier_display, treating as untested", mode);
            }
            result
        }
        Err(e) => {
            debug!("Skipping malformed '{}' entry: {}", mode, e);
            None
        }
    }
}

/// Parse every readable per-mode entry, known disciplines first in badge order
pub(super) fn parse_mode_results(entries: Option<&Map<String, Value>>) -> Vec<(String, ModeResult)> {
    let Some(entries) = entries else {
        return Vec::new();
    };

    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort_by_key(|key| {
        let position = Mode::DISCIPLINES.iter().position(|mode| mode.as_str() == key.as_str());
        (position.unwrap_or(Mode::DISCIPLINES.len()), key.to_string())
    });

    keys.into_iter()
        .filter_map(|key| parse_mode_result(key, &entries[key.as_str()]).map(|result| (key.clone(), result)))
        .collect()
}
