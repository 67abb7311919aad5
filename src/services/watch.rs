use anyhow::Result;
use log::{debug, info};
use tokio::sync::mpsc;

use crate::api::RankingSource;
use crate::domain::Player;
use crate::errors::FetchError;
use crate::ranking::{ApplyOutcome, RequestTicket};
use crate::refresh::RefreshPacer;
use crate::rendering::Screen;
use crate::services::rankings::RankingsService;

type Finished = (RequestTicket, Result<Vec<Player>, FetchError>);

/// Periodically re-fetches the active mode. Fetches run concurrently with the
/// pacer, so a slow response can arrive after a newer one; such stale results are dropped.
pub struct WatchService<S> {
    rankings: RankingsService<S>,
    pacer: RefreshPacer,
}

impl<S> WatchService<S>
where
    S: RankingSource + Clone + Send + Sync + 'static,
{
    pub fn new(rankings: RankingsService<S>, pacer: RefreshPacer) -> Self {
        Self { rankings, pacer }
    }

    /// Run until the pacer's budget is spent and every request has answered, or until Ctrl-C
    pub async fn run<F>(&mut self, mut on_screen: F) -> Result<()>
    where
        F: FnMut(&Screen) -> Result<()>,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Finished>();
        let mut in_flight = 0usize;

        loop {
            let can_tick = !self.pacer.has_reached_max();
            if !can_tick && in_flight == 0 {
                break;
            }

            tokio::select! {
                true = self.pacer.tick(), if can_tick => {
                    self.spawn_refresh(&tx);
                    in_flight += 1;
                }
                Some((ticket, result)) = rx.recv() => {
                    in_flight -= 1;
                    if self.rankings.apply(ticket, result) != ApplyOutcome::Stale {
                        on_screen(&self.rankings.screen())?;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, stopping refresh loop");
                    break;
                }
            }
        }

        Ok(())
    }

    fn spawn_refresh(&mut self, tx: &mpsc::UnboundedSender<Finished>) {
        let ticket = self.rankings.begin_refresh();
        let source = self.rankings.source().clone();
        let tx = tx.clone();
        debug!("Refresh #{} for {}", self.pacer.tick_count(), ticket.mode());

        tokio::spawn(async move {
            let result = source.fetch_rankings(ticket.mode()).await;
            let _ = tx.send((ticket, result));
        });
    }
}
