//! Timer ticker background task

use std::sync::Arc;
use tokio::{
    sync::broadcast::error::RecvError,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::state::AppState;

/// Background task that recomputes the active page's timers on every tick
/// and right after any meeting change, publishing them on the timer channel
pub async fn timer_ticker_task(state: Arc<AppState>) {
    info!("Starting timer ticker task ({:?} period)", state.tick_interval);

    let mut meeting_rx = state.meeting_change_tx.subscribe();
    let mut ticker = interval(state.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut was_overtime = false;
    let mut last_page: Option<String> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}

            received = meeting_rx.recv() => {
                match received {
                    Ok(meeting) => {
                        debug!("Meeting changed: page={:?}, paused={}",
                               meeting.current_page_id, meeting.is_paused);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Timer ticker skipped {} meeting notifications", skipped);
                    }
                    Err(RecvError::Closed) => {
                        info!("Meeting channel closed, stopping timer ticker");
                        break;
                    }
                }
            }
        }

        let snapshot = match state.refresh_timer() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to refresh timers: {}", e);
                continue;
            }
        };

        if snapshot.page_id != last_page {
            last_page = snapshot.page_id.clone();
            was_overtime = false;
        }

        let is_overtime = snapshot.is_overtime();
        if is_overtime && !was_overtime {
            info!("Page {:?} went over time", snapshot.page_id);
        }
        was_overtime = is_overtime;

        debug!("Timer tick: {}", snapshot.display.time);
    }
}
