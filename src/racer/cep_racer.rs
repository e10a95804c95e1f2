use crate::racer::cep_fetcher::CepFetcher;
use crate::racer::endpoint::Endpoint;
use crate::racer::fetch_result::FetchResult;
use crate::racer::race_outcome::RaceOutcome;
use crate::racer::racer_config::RacerConfig;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Races the two lookup endpoints against each other and against the
/// race window. Whichever fetch task delivers first wins; the loser is
/// woken through the shared shutdown notify so it stops instead of
/// running to completion unobserved.
pub struct CepRacer {
    shutdown_notify: Arc<tokio::sync::Notify>,
    primary: Endpoint,
    secondary: Endpoint,
    config: RacerConfig,
}

impl CepRacer {
    pub fn new(
        shutdown_notify: Arc<tokio::sync::Notify>,
        primary: Endpoint,
        secondary: Endpoint,
        config: RacerConfig,
    ) -> Self {
        Self {
            shutdown_notify,
            primary,
            secondary,
            config,
        }
    }

    pub async fn race(&self, cep: &str) -> RaceOutcome {
        let (result_tx1, result_rx1) = oneshot::channel::<FetchResult>();
        let (result_tx2, result_rx2) = oneshot::channel::<FetchResult>();

        self.spawn_fetch_task(self.primary.url_for(cep), result_tx1);
        self.spawn_fetch_task(self.secondary.url_for(cep), result_tx2);

        // A task that dies without sending drops its sender; that branch
        // is disabled and the race keeps waiting on the rest.
        let outcome = tokio::select! {
            Ok(result1) = result_rx1 => RaceOutcome::Finished(result1),
            Ok(result2) = result_rx2 => RaceOutcome::Finished(result2),
            _ = tokio::time::sleep(self.config.timeout()) => RaceOutcome::TimedOut,
            _ = self.shutdown_notify.notified() => RaceOutcome::Interrupted,
        };

        // Wake the task that lost the race; its result is discarded.
        self.shutdown_notify.notify_waiters();

        outcome
    }

    fn spawn_fetch_task(&self, url: String, result_tx: oneshot::Sender<FetchResult>) {
        let shutdown_notify = Arc::clone(&self.shutdown_notify);
        tokio::task::spawn(async move {
            let fetcher = CepFetcher::new();
            tokio::select! {
                result = fetcher.fetch(&url) => {
                    let _ = result_tx.send(result);
                }
                _ = shutdown_notify.notified() => {}
            }
        });
    }
}
