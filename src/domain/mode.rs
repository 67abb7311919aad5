use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ranking mode: one combat discipline, or the aggregate over all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Overall,
    Mace,
    Sword,
    Uhc,
    Crystal,
    NethOp,
    Smp,
    Axe,
    Dpot,
}

impl Mode {
    /// Disciplines in badge display order
    pub const DISCIPLINES: [Mode; 8] = [
        Mode::Mace,
        Mode::Sword,
        Mode::Uhc,
        Mode::Crystal,
        Mode::NethOp,
        Mode::Smp,
        Mode::Axe,
        Mode::Dpot,
    ];

    /// Name used by the API, both in URLs and as per-mode result keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Overall => "overall",
            Mode::Mace => "Mace",
            Mode::Sword => "Sword",
            Mode::Uhc => "UHC",
            Mode::Crystal => "Crystal",
            Mode::NethOp => "NethOP",
            Mode::Smp => "SMP",
            Mode::Axe => "Axe",
            Mode::Dpot => "Dpot",
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Mode::Overall)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Mode::Mace => "🔨",
            Mode::Sword => "⚔️",
            Mode::Uhc => "❤️",
            Mode::Crystal => "💎",
            Mode::NethOp | Mode::Dpot => "🧪",
            Mode::Smp | Mode::Axe => "🪓",
            Mode::Overall => GENERIC_GLYPH,
        }
    }
}

const GENERIC_GLYPH: &str = "🎮";

/// Glyph for a mode key as it appears in a payload; unknown keys get a generic one.
pub fn glyph_for_key(key: &str) -> &'static str {
    key.parse::<Mode>()
        .map(|mode| mode.glyph())
        .unwrap_or(GENERIC_GLYPH)
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected overall, Mace, Sword, UHC, Crystal, NethOP, SMP, Axe or Dpot)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        std::iter::once(Mode::Overall)
            .chain(Mode::DISCIPLINES)
            .find(|mode| mode.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
