//! Idle detection and the floating animation it drives.

use crate::constants::{Settings, FLOAT_PERIOD_SEC, FLOAT_STAGGER_SEC};
use crate::document::{Document, Scheduler, Task, TimerId};
use crate::holo::round_to;
use crate::spread::SpreadLayout;
use instant::Instant;
use std::time::Duration;

/// CSS `animation` value for the `index`-th floating card.
pub fn float_animation(index: usize) -> String {
    let delay = round_to(index as f64 * FLOAT_STAGGER_SEC, 2);
    format!(
        "float {}s ease-in-out {}s infinite",
        FLOAT_PERIOD_SEC, delay
    )
}

/// Owns the idle flag and the pending idle timer.
#[derive(Debug, Default)]
pub struct IdleAnimator {
    idle: bool,
    timer: Option<TimerId>,
    last_activity: Option<Instant>,
}

impl IdleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    #[inline]
    pub fn pending(&self) -> Option<TimerId> {
        self.timer
    }

    /// Wall time since the last pointer or touch activity; `None` before any.
    pub fn quiet_for(&self) -> Option<Duration> {
        self.last_activity.map(|t| t.elapsed())
    }

    /// Schedule the first activation; activity never cancels this one.
    pub fn arm_initial<S: Scheduler>(&self, scheduler: &S, settings: &Settings) {
        scheduler.schedule(settings.initial_idle, Task::InitialIdle);
    }

    /// Apply the float animation unless already idle.
    pub fn start<D: Document>(&mut self, doc: &D, spread: &SpreadLayout<D::Node>) {
        if self.idle {
            return;
        }
        self.idle = true;
        for (j, slot) in spread.floating().enumerate() {
            doc.set_style(&slot.node, "animation", &float_animation(j));
        }
        match self.quiet_for() {
            Some(quiet) => log::info!("[idle] floating after {:?} without input", quiet),
            None => log::info!("[idle] floating"),
        }
    }

    /// Clear the animation from every spread card, centre ones included.
    pub fn stop<D: Document>(&mut self, doc: &D, spread: &SpreadLayout<D::Node>) {
        if self.idle {
            log::debug!("[idle] woke up");
        }
        self.idle = false;
        for slot in &spread.slots {
            doc.set_style(&slot.node, "animation", "");
        }
    }

    /// Pointer or touch activity: stop floating and restart the countdown.
    pub fn activity<D: Document, S: Scheduler>(
        &mut self,
        doc: &D,
        scheduler: &S,
        spread: &SpreadLayout<D::Node>,
        settings: &Settings,
    ) {
        self.stop(doc, spread);
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        self.timer = Some(scheduler.schedule(settings.idle_after, Task::IdleTimeout));
        self.last_activity = Some(Instant::now());
    }

    /// The countdown fired.
    pub fn timeout<D: Document>(&mut self, doc: &D, spread: &SpreadLayout<D::Node>) {
        self.timer = None;
        self.start(doc, spread);
    }
}
