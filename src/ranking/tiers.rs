use serde::Serialize;
use std::fmt;

use crate::domain::ModeResult;

/// Title earned from aggregate points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Title {
    Rookie,
    Fighter,
    #[serde(rename = "Combat Ace")]
    CombatAce,
    #[serde(rename = "Combat Expert")]
    CombatExpert,
    #[serde(rename = "Combat Master")]
    CombatMaster,
    #[serde(rename = "Combat Grandmaster")]
    CombatGrandmaster,
}

/// Thresholds checked highest first
const TITLE_LADDER: [(f64, Title); 5] = [
    (400.0, Title::CombatGrandmaster),
    (300.0, Title::CombatMaster),
    (200.0, Title::CombatExpert),
    (100.0, Title::CombatAce),
    (50.0, Title::Fighter),
];

pub fn classify(points: f64) -> Title {
    TITLE_LADDER
        .iter()
        .find(|(threshold, _)| points >= *threshold)
        .map(|(_, title)| *title)
        .unwrap_or(Title::Rookie)
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Rookie => "Rookie",
            Title::Fighter => "Fighter",
            Title::CombatAce => "Combat Ace",
            Title::CombatExpert => "Combat Expert",
            Title::CombatMaster => "Combat Master",
            Title::CombatGrandmaster => "Combat Grandmaster",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge style bucket; T1 is the best tier, T5 the lowest and the fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierClass {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl TierClass {
    /// Bucket for a free-form label such as `"HT3"` or `"T2"`.
    ///
    /// Deliberately loose: the first character in `1..=5` decides, wherever
    /// it sits in the label. Labels without one fall back to T5.
    pub fn from_label(label: &str) -> Self {
        match label.chars().find(|c| ('1'..='5').contains(c)) {
            Some('1') => TierClass::T1,
            Some('2') => TierClass::T2,
            Some('3') => TierClass::T3,
            Some('4') => TierClass::T4,
            _ => TierClass::T5,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TierClass::T1 => "tier-T1",
            TierClass::T2 => "tier-T2",
            TierClass::T3 => "tier-T3",
            TierClass::T4 => "tier-T4",
            TierClass::T5 => "tier-T5",
        }
    }
}

/// Label and style bucket of a per-mode result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLabel {
    pub label: String,
    pub class: TierClass,
}

const UNKNOWN_TIER: &str = "?";

/// `tier_display` when present, else `T{tier}`.
pub fn tier_label(result: &ModeResult) -> TierLabel {
    let label = match (&result.tier_display, result.tier) {
        (Some(display), _) if !display.trim().is_empty() => display.trim().to_string(),
        (_, Some(tier)) => format!("T{}", tier),
        _ => UNKNOWN_TIER.to_string(),
    };
    let class = TierClass::from_label(&label);
    TierLabel { label, class }
}
