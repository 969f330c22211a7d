use crate::aggregator::JobAggregator;
use crate::types::{AggregatorError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

/// Run the aggregator every `period`, first one period after start, for as
/// long as the process lives.
pub fn spawn_scheduler(aggregator: Arc<JobAggregator>, period: Duration) -> Result<JoinHandle<()>> {
    let first_tick = Instant::now()
        .checked_add(period)
        .ok_or_else(|| AggregatorError::Config(format!("Scrape interval {:?} is out of range", period)))?;
    info!("Scheduler started, scraping every {:?}", period);

    Ok(tokio::spawn(async move {
        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            run_scheduled(&aggregator).await;
        }
    }))
}

pub async fn run_scheduled(aggregator: &JobAggregator) {
    match aggregator.run().await {
        Ok(report) => info!("Scheduled run #{} stored {} listings", report.run_id, report.total()),
        Err(e) => error!("Scheduled scraping run failed: {}", e),
    }
}
