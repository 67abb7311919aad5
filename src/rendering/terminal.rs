use colored::{ColoredString, Colorize};
use std::fmt::Write;

use super::screen::{
    CardTier, ErrorMessage, NO_TIERS, NOT_TESTED, NoData, PlayerCard, RankingRow, RankingScreen, Screen, TierBadge,
};
use crate::ranking::TierClass;

/// Plain-text rendering of a screen for the terminal
pub fn render_text(screen: &Screen) -> String {
    match screen {
        Screen::Ranking(ranking) => render_ranking(ranking),
        Screen::NoData(no_data) => render_no_data(no_data),
        Screen::Error(error) => render_error(error),
        Screen::PlayerCard(card) => render_card(card),
    }
}

/// Whole points print without a fractional part
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.is_finite() {
        format!("{}", points as i64)
    } else {
        format!("{:.1}", points)
    }
}

fn paint(label: &str, class: TierClass) -> ColoredString {
    match class {
        TierClass::T1 => label.yellow().bold(),
        TierClass::T2 => label.white().bold(),
        TierClass::T3 => label.red(),
        TierClass::T4 => label.green(),
        TierClass::T5 => label.bright_black(),
    }
}

fn render_ranking(ranking: &RankingScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Rankings: {}", ranking.mode).bold().underline());
    for row in &ranking.rows {
        render_row(&mut out, row);
    }
    out
}

fn render_row(out: &mut String, row: &RankingRow) {
    let _ = writeln!(
        out,
        "{:>4} {}  💎 {} {}",
        format!("{}.", row.rank).bold(),
        row.name.bold(),
        row.title,
        format!("({} pts)", format_points(row.points)).dimmed()
    );
    let _ = writeln!(out, "     {}", render_badges(&row.badges));
}

fn render_badges(badges: &[TierBadge]) -> String {
    if badges.is_empty() {
        return NOT_TESTED.dimmed().to_string();
    }
    badges
        .iter()
        .map(|badge| format!("{} {}", badge.glyph, paint(&badge.label, badge.class)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_no_data(no_data: &NoData) -> String {
    format!("{}\n{}\n", no_data.headline.bold(), no_data.subtitle.dimmed())
}

fn render_error(error: &ErrorMessage) -> String {
    format!(
        "{}\n{}\n{}\n",
        "❌ Error loading data".red().bold(),
        error.message,
        error.hint.dimmed()
    )
}

fn render_card(card: &PlayerCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.name.bold());
    let _ = writeln!(out, "{}", card.avatar_url.dimmed());
    if let Some(position) = card.position {
        let _ = writeln!(out, "Rank #{}", position);
    }
    let _ = writeln!(out, "{} total points", format_points(card.total_points));
    let _ = writeln!(out, "\n{}", "Tiers by mode".underline());

    if card.tiers.is_empty() {
        let _ = writeln!(out, "{}", NO_TIERS.dimmed());
    }
    for tier in &card.tiers {
        render_card_tier(&mut out, tier);
    }
    out
}

fn render_card_tier(out: &mut String, tier: &CardTier) {
    let points = tier
        .points
        .map(|p| format!("{} pts", format_points(p)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "{} {:<8} {:<5} {}",
        tier.glyph,
        tier.mode,
        paint(&tier.label, tier.class),
        points
    );
}
