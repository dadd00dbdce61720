//! Agenda pages, the active page and the meeting pause flag
//!
//! This is the single writer of every page's [`PageTimerState`]. All
//! operations take "now" in epoch milliseconds from the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::MeetingError,
    timers::{
        compute_current_page_timers, elapsed_seconds, normalize_expected_duration, PageTimerState,
        RawDuration, TimerComputationResult,
    },
};

/// Agenda page as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaPageInput {
    pub id: String,
    pub title: String,
    #[serde(rename = "expectedDurationS", default)]
    pub expected_duration: Option<RawDuration>,
}

/// Agenda page with its timer bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaPage {
    pub id: String,
    pub title: String,
    pub timer: PageTimerState,
    /// Paused total of the current visit in milliseconds; `timer.time_spent_paused_s` is its floor
    #[serde(default)]
    pub paused_ms: i64,
}

/// Time spent per page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub spent_s: i64,
    pub expected_duration_s: Option<i64>,
    pub is_current: bool,
}

/// State of the running meeting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingState {
    pub pages: Vec<AgendaPage>,
    pub current_page_id: Option<String>,
    pub is_paused: bool,
}

impl MeetingState {
    /// Create an empty meeting with no agenda
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the agenda. Budgets are normalized here, once.
    pub fn set_agenda(&mut self, inputs: Vec<AgendaPageInput>) -> Result<(), MeetingError> {
        let mut pages: Vec<AgendaPage> = Vec::with_capacity(inputs.len());
        for input in inputs {
            if pages.iter().any(|page| page.id == input.id) {
                return Err(MeetingError::DuplicatePage(input.id));
            }
            let expected = normalize_expected_duration(&input.id, input.expected_duration.as_ref());
            pages.push(AgendaPage {
                id: input.id,
                title: input.title,
                timer: PageTimerState::new(expected),
                paused_ms: 0,
            });
        }

        info!("Agenda set with {} pages", pages.len());
        self.pages = pages;
        self.current_page_id = None;
        self.is_paused = false;
        Ok(())
    }

    pub fn current_page(&self) -> Option<&AgendaPage> {
        let id = self.current_page_id.as_deref()?;
        self.pages.iter().find(|page| page.id == id)
    }

    fn current_page_mut(&mut self) -> Option<&mut AgendaPage> {
        let id = self.current_page_id.clone()?;
        self.pages.iter_mut().find(|page| page.id == id)
    }

    /// Make `page_id` the active page, folding the time spent on the page being left
    pub fn start_page(&mut self, page_id: &str, now_ms: i64) -> Result<(), MeetingError> {
        if now_ms <= 0 {
            return Err(MeetingError::InvalidTimestamp(now_ms));
        }
        if !self.pages.iter().any(|page| page.id == page_id) {
            return Err(MeetingError::UnknownPage(page_id.to_string()));
        }
        if self.current_page_id.as_deref() == Some(page_id) {
            debug!("Page {} is already active", page_id);
            return Ok(());
        }

        let is_paused = self.is_paused;
        if let Some(leaving) = self.current_page_mut() {
            let spent = elapsed_seconds(&leaving.timer, is_paused, now_ms);
            debug!("Leaving page {} after {}s", leaving.id, spent);
            leaving.timer = PageTimerState {
                time_previously_spent_s: Some(spent),
                ..PageTimerState::new(leaving.timer.expected_duration_s)
            };
            leaving.paused_ms = 0;
        }

        let page = self
            .pages
            .iter_mut()
            .find(|page| page.id == page_id)
            .ok_or_else(|| MeetingError::UnknownPage(page_id.to_string()))?;
        page.timer.time_last_started = now_ms;
        page.timer.time_spent_paused_s = 0;
        page.paused_ms = 0;
        page.timer.time_last_paused = if is_paused { Some(now_ms) } else { None };

        info!("Started page {} ({})", page.id, page.title);
        self.current_page_id = Some(page_id.to_string());
        Ok(())
    }

    /// Pause the meeting, stamping the active page
    pub fn pause(&mut self, now_ms: i64) -> Result<(), MeetingError> {
        if self.is_paused {
            return Err(MeetingError::AlreadyPaused);
        }
        self.is_paused = true;
        if let Some(page) = self.current_page_mut() {
            page.timer.time_last_paused = Some(now_ms);
        }
        info!("Meeting paused");
        Ok(())
    }

    /// Resume the meeting, adding the pause to the active page's paused total
    pub fn resume(&mut self, now_ms: i64) -> Result<(), MeetingError> {
        if !self.is_paused {
            return Err(MeetingError::NotPaused);
        }
        self.is_paused = false;
        if let Some(page) = self.current_page_mut() {
            if let Some(paused_at) = page.timer.time_last_paused {
                let paused_ms = (now_ms - paused_at).max(0);
                page.paused_ms = page.paused_ms.saturating_add(paused_ms);
                page.timer.time_spent_paused_s = page.paused_ms.div_euclid(1000);
                debug!("Page {} was paused for {}ms", page.id, paused_ms);
            }
        }
        info!("Meeting resumed");
        Ok(())
    }

    /// Timers of the active page, `None` without one
    pub fn current_timers(&self, now_ms: i64) -> Option<TimerComputationResult> {
        compute_current_page_timers(
            self.current_page().map(|page| &page.timer),
            self.is_paused,
            now_ms,
        )
    }

    /// Seconds spent on every page so far, the active page included
    pub fn summary(&self, now_ms: i64) -> Vec<PageSummary> {
        self.pages
            .iter()
            .map(|page| {
                let is_current = self.current_page_id.as_deref() == Some(page.id.as_str());
                let spent_s = if is_current {
                    elapsed_seconds(&page.timer, self.is_paused, now_ms)
                } else {
                    page.timer.time_previously_spent_s.unwrap_or(0)
                };
                PageSummary {
                    id: page.id.clone(),
                    title: page.title.clone(),
                    spent_s,
                    expected_duration_s: page.timer.expected_duration_s,
                    is_current,
                }
            })
            .collect()
    }
}
