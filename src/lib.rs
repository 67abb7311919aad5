pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod ranking;
pub mod refresh;
pub mod rendering;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::api::TierlistClient;
use crate::config::AppConfig;
use crate::domain::{Mode, PlayerId};
use crate::refresh::RefreshPacer;
use crate::rendering::{OutputFormat, Screen, render};
use crate::services::{RankingsService, WatchService};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn parse_mode(mode: &str) -> Result<Mode> {
    mode.parse::<Mode>().context("Invalid --mode")
}

fn print_screen(screen: &Screen, format: OutputFormat) -> Result<()> {
    println!("{}", render(screen, format)?);
    Ok(())
}

fn build_service(config: &AppConfig) -> Result<RankingsService<TierlistClient>> {
    let client = TierlistClient::new(&config.api)?;
    Ok(RankingsService::new(client, config))
}

pub fn handle_rankings(config: AppConfig, format: OutputFormat, mode: &str, search: Option<&str>) -> Result<()> {
    let mode = parse_mode(mode)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = build_service(&config)?;
        if let Some(term) = search {
            service.search(term);
        }
        let screen = service.load(mode).await;
        print_screen(&screen, format)
    })
}

pub fn handle_player(config: AppConfig, format: OutputFormat, id: &str) -> Result<()> {
    let id = PlayerId::from(id);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = build_service(&config)?;
        let screen = service.player_card(&id).await;
        print_screen(&screen, format)
    })
}

pub fn handle_watch(
    config: AppConfig,
    format: OutputFormat,
    mode: &str,
    search: Option<&str>,
    interval_secs: Option<u64>,
    cycles: Option<usize>,
) -> Result<()> {
    let mode = parse_mode(mode)?;
    let interval = interval_secs.unwrap_or(config.refresh.interval_secs);
    let mut pacer = RefreshPacer::new(interval);
    if let Some(max) = cycles {
        pacer = pacer.with_max_ticks(max);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = build_service(&config)?;
        service.select_mode(mode);
        if let Some(term) = search {
            service.search(term);
        }
        let mut watch = WatchService::new(service, pacer);
        watch.run(|screen| print_screen(screen, format)).await
    })
}
