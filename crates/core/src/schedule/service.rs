//! Schedule refresh service - fetch, build, notify once.
//!
//! The front-end this replaces re-synced its model and view through a
//! cascade of nested deferred timers racing to adjust the same widget. Here
//! a burst of triggers is deferred one scheduling turn and collapsed into a
//! single recompute-then-notify step: the build itself is synchronous, and
//! the host hears about it exactly once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use planboard_domain::{BuildOptions, CalendarStructure, Result};
use tracing::debug;

use super::ports::{CalendarHost, TaskSource};
use super::view::{events_for, CalendarView};

/// Drives the host calendar widget from the task source.
///
/// Successive refreshes are totally ordered by call order; the most recent
/// snapshot is authoritative and superseded snapshots must be discarded by
/// callers, never merged.
pub struct ScheduleService {
    source: Arc<dyn TaskSource>,
    host: Arc<dyn CalendarHost>,
    view: CalendarView,
    options: Mutex<BuildOptions>,
    refresh_pending: AtomicBool,
    current: Mutex<Option<Arc<CalendarStructure>>>,
}

impl ScheduleService {
    /// Create a new schedule service.
    pub fn new(
        source: Arc<dyn TaskSource>,
        host: Arc<dyn CalendarHost>,
        view: CalendarView,
    ) -> Self {
        Self {
            source,
            host,
            view,
            options: Mutex::new(BuildOptions::default()),
            refresh_pending: AtomicBool::new(false),
            current: Mutex::new(None),
        }
    }

    /// Replace the build options used by subsequent refreshes.
    pub fn set_options(&self, options: BuildOptions) {
        *self.options.lock() = options;
    }

    /// Latest built snapshot, if any.
    pub fn structure(&self) -> Option<Arc<CalendarStructure>> {
        self.current.lock().clone()
    }

    /// Fetch, rebuild and notify the host exactly once.
    ///
    /// # Errors
    /// `Source` when the task fetch fails; the build itself cannot fail.
    pub async fn refresh(&self) -> Result<Arc<CalendarStructure>> {
        let tasks = self.source.fetch_tasks().await?;
        let options = self.options.lock().clone();

        // The build is synchronous and never suspends
        let structure = Arc::new(self.view.build(&tasks, &options));

        *self.current.lock() = Some(Arc::clone(&structure));
        self.host.set_events(events_for(&structure));

        Ok(structure)
    }

    /// Coalescing trigger for reactive callers.
    ///
    /// The first trigger in a scheduling turn schedules one deferred
    /// rebuild; triggers arriving while it is pending are absorbed. The host
    /// is notified once, after the rebuild - never per-trigger.
    pub async fn request_refresh(&self) -> Result<()> {
        if self.refresh_pending.swap(true, Ordering::SeqCst) {
            debug!("refresh already pending; trigger absorbed");
            return Ok(());
        }

        // Defer one scheduling turn so a burst of triggers from the
        // reactivity layer collapses into a single rebuild
        tokio::task::yield_now().await;
        self.refresh_pending.store(false, Ordering::SeqCst);

        self.refresh().await.map(|_| ())
    }

    /// Restrict subsequent builds to the two-week preview around `iso_week`
    /// (`"YYYY-Www"`) and point the widget at that week's Monday.
    ///
    /// # Errors
    /// `InvalidDate` for a malformed week identifier.
    pub fn focus_preview(&self, iso_week: &str) -> Result<()> {
        let keys = CalendarView::preview_week_keys(iso_week)?;
        self.host.goto_date(&keys[1]);
        self.options.lock().weeks_to_show = Some(keys.to_vec());
        Ok(())
    }
}
