//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::{AgendaPageInput, MeetingState, MetricsWindow, PageSummary, TimerSnapshot};
use crate::{
    error::MeetingError,
    utils::Clock,
    window::{DateRangeWindow, Direction, Frequency},
};

/// Main application state: the meeting runtime, the metrics window and the clock
#[derive(Debug)]
pub struct AppState {
    /// Agenda, active page and pause flag
    pub meeting: Arc<Mutex<MeetingState>>,
    /// Date range shown by the metrics table
    pub metrics_window: Arc<Mutex<MetricsWindow>>,
    /// Time source for every computation
    pub clock: Arc<dyn Clock>,
    /// How often the ticker recomputes the timers
    pub tick_interval: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for meeting change notifications
    pub meeting_change_tx: broadcast::Sender<MeetingState>,
    /// Channel carrying the latest timer snapshot
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new AppState with an empty agenda and the current metrics window
    pub fn new(
        port: u16,
        host: String,
        tick_interval: Duration,
        frequency: Frequency,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, MeetingError> {
        let (meeting_change_tx, _) = broadcast::channel(100);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerSnapshot::idle());
        let metrics_window = MetricsWindow::current(frequency, clock.now_ms().div_euclid(1000))?;

        Ok(Self {
            meeting: Arc::new(Mutex::new(MeetingState::new())),
            metrics_window: Arc::new(Mutex::new(metrics_window)),
            clock,
            tick_interval,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            meeting_change_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        })
    }

    /// Apply a change to the meeting at the current time and notify listeners
    pub fn update_meeting<F>(&self, action: &str, updater: F) -> Result<MeetingState, MeetingError>
    where
        F: FnOnce(&mut MeetingState, i64) -> Result<(), MeetingError>,
    {
        let now_ms = self.clock.now_ms();
        let mut meeting = self
            .meeting
            .lock()
            .map_err(|_| MeetingError::LockPoisoned("meeting state"))?;

        updater(&mut *meeting, now_ms)?;
        let new_meeting = meeting.clone();
        drop(meeting); // Release the lock early

        self.record_action(action, now_ms);

        // Wakes the ticker so the new figures are published without waiting a tick
        if let Err(e) = self.meeting_change_tx.send(new_meeting.clone()) {
            warn!("Failed to send meeting change notification: {}", e);
        }

        Ok(new_meeting)
    }

    fn record_action(&self, action: &str, now_ms: i64) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = DateTime::from_timestamp_millis(now_ms);
        }
    }

    /// Replace the agenda
    pub fn set_agenda(&self, pages: Vec<AgendaPageInput>) -> Result<MeetingState, MeetingError> {
        info!("Setting agenda with {} pages", pages.len());
        self.update_meeting("agenda", |meeting, _| meeting.set_agenda(pages))
    }

    /// Move to an agenda page
    pub fn start_page(&self, page_id: &str) -> Result<MeetingState, MeetingError> {
        self.update_meeting("start-page", |meeting, now_ms| {
            meeting.start_page(page_id, now_ms)
        })
    }

    /// Pause the meeting
    pub fn pause(&self) -> Result<MeetingState, MeetingError> {
        self.update_meeting("pause", |meeting, now_ms| meeting.pause(now_ms))
    }

    /// Resume the meeting
    pub fn resume(&self) -> Result<MeetingState, MeetingError> {
        self.update_meeting("resume", |meeting, now_ms| meeting.resume(now_ms))
    }

    /// Get current meeting state
    pub fn get_meeting(&self) -> Result<MeetingState, MeetingError> {
        self.meeting
            .lock()
            .map(|meeting| meeting.clone())
            .map_err(|_| MeetingError::LockPoisoned("meeting state"))
    }

    /// Compute the active page's timers now
    pub fn compute_timer_snapshot(&self) -> Result<TimerSnapshot, MeetingError> {
        let now_ms = self.clock.now_ms();
        let meeting = self
            .meeting
            .lock()
            .map_err(|_| MeetingError::LockPoisoned("meeting state"))?;
        Ok(TimerSnapshot::compute(&meeting, now_ms))
    }

    /// Compute the timers and publish them to watchers
    pub fn refresh_timer(&self) -> Result<TimerSnapshot, MeetingError> {
        let snapshot = self.compute_timer_snapshot()?;
        if let Err(e) = self.timer_update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }
        Ok(snapshot)
    }

    /// Timer snapshot from the last tick
    pub fn last_timer_snapshot(&self) -> TimerSnapshot {
        self.timer_update_tx.borrow().clone()
    }

    /// Per-page time spent so far
    pub fn summary(&self) -> Result<Vec<PageSummary>, MeetingError> {
        let now_ms = self.clock.now_ms();
        let meeting = self
            .meeting
            .lock()
            .map_err(|_| MeetingError::LockPoisoned("meeting state"))?;
        Ok(meeting.summary(now_ms))
    }

    /// Get the current metrics window
    pub fn get_metrics_window(&self) -> Result<MetricsWindow, MeetingError> {
        self.metrics_window
            .lock()
            .map(|window| *window)
            .map_err(|_| MeetingError::LockPoisoned("metrics window"))
    }

    /// Page the metrics window
    pub fn step_metrics_window(
        &self,
        direction: Direction,
        expand: bool,
    ) -> Result<MetricsWindow, MeetingError> {
        let mut window = self
            .metrics_window
            .lock()
            .map_err(|_| MeetingError::LockPoisoned("metrics window"))?;
        window.step(direction, expand)?;
        let stepped = *window;
        drop(window);

        self.record_action("window-step", self.clock.now_ms());
        Ok(stepped)
    }

    /// Replace the metrics window
    pub fn reset_metrics_window(
        &self,
        frequency: Frequency,
        range: DateRangeWindow,
    ) -> Result<MetricsWindow, MeetingError> {
        let mut window = self
            .metrics_window
            .lock()
            .map_err(|_| MeetingError::LockPoisoned("metrics window"))?;
        window.reset(frequency, range)?;
        let reset = *window;
        drop(window);

        self.record_action("window-reset", self.clock.now_ms());
        Ok(reset)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
