pub mod avatar;
pub mod screen;
pub mod terminal;

use anyhow::{Context, Result};

pub use avatar::avatar_url;
pub use screen::{Screen, fetch_error_screen, player_card_screen, ranking_screen};
pub use terminal::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputFormat::Json } else { OutputFormat::Text }
    }
}

pub fn render(screen: &Screen, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(screen)),
        OutputFormat::Json => serde_json::to_string_pretty(screen).context("Failed to serialize screen"),
    }
}
