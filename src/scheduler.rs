// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle scheduling.
//!
//! The [`Scheduler`] serializes all submitted requests into a single visible
//! sequence: strict FIFO, at most one surface on screen at any instant, each
//! toast running through `Queued → Displaying → FadingOut → Closed`. It is
//! owned by the host's UI-thread context and driven from the host's periodic
//! tick (e.g. `iced::time::every(..)`, which yields the `Instant` passed to
//! [`Scheduler::tick`]).
//!
//! Timing quirk, kept deliberately: the dismissal countdown is armed the
//! moment the surface is shown, not when the entrance fade completes, so
//! durations shorter than the 500 ms fade truncate the entrance animation.

use crate::handle::Handle;
use crate::renderer::{Renderer, Surface};
use crate::toast::{Toast, ToastId, LENGTH_SHORT};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Length of the entrance and exit fades.
const FADE_DURATION: Duration = Duration::from_millis(500);

/// Opacity the entrance fade settles at. The exit fade still starts from
/// fully opaque.
const ENTRANCE_PEAK: f32 = 0.9;

/// Display phase of the active toast.
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Visible, counting down to `dismiss_at`.
    Displaying { dismiss_at: Instant },
    /// Exit fade in progress since `started_at`.
    FadingOut { started_at: Instant },
}

/// The single active toast and its surface.
struct Active<S> {
    surface: S,
    toast: Toast,
    shown_at: Instant,
    phase: Phase,
}

impl<S: Surface> Active<S> {
    fn begin_fade(&mut self, now: Instant) {
        self.phase = Phase::FadingOut { started_at: now };
        self.surface.set_opacity(exit_opacity(Duration::ZERO));
    }
}

/// FIFO display controller for toast notifications.
///
/// All methods must run on the UI-affine thread; submissions from other
/// threads go through [`Scheduler::handle`] and are drained on the next
/// [`tick`](Scheduler::tick). The pending queue is unbounded: toast volume is
/// caller-controlled and low-frequency, so backlog is accepted over
/// backpressure.
pub struct Scheduler<R: Renderer> {
    renderer: R,
    pending: VecDeque<Toast>,
    active: Option<Active<R::Surface>>,
    submissions: mpsc::UnboundedReceiver<Toast>,
    submitter: mpsc::UnboundedSender<Toast>,
}

impl<R: Renderer> Scheduler<R> {
    /// Creates an idle scheduler around the given renderer.
    pub fn new(renderer: R) -> Self {
        let (submitter, submissions) = mpsc::unbounded_channel();
        Self {
            renderer,
            pending: VecDeque::new(),
            active: None,
            submissions,
            submitter,
        }
    }

    /// Returns a clonable submitter usable from any thread.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::new(self.submitter.clone())
    }

    /// Returns the renderer this scheduler displays through.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably, e.g. to set a default anchor window
    /// after the first window is created.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Submits a request for display.
    ///
    /// A non-positive duration is normalized to [`LENGTH_SHORT`] here. If the
    /// scheduler is idle the request is displayed within this call; otherwise
    /// it waits its turn in submission order. Never blocks.
    pub fn submit(&mut self, mut toast: Toast, now: Instant) -> ToastId {
        if toast.duration_ms <= 0 {
            toast.duration_ms = LENGTH_SHORT;
        }
        let id = toast.id;
        self.pending.push_back(toast);
        if self.active.is_none() {
            self.advance(now);
        }
        id
    }

    /// Cancels a queued or displaying toast.
    ///
    /// A queued toast is dropped without any of its callbacks firing. The
    /// active toast is fast-forwarded into its exit fade, so its `on_hidden`
    /// still runs. Returns `false` when the id is unknown (already closed or
    /// never submitted).
    pub fn cancel(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(active) = self.active.as_mut() {
            if active.toast.id == id {
                if matches!(active.phase, Phase::Displaying { .. }) {
                    active.begin_fade(now);
                }
                return true;
            }
        }

        let before = self.pending.len();
        self.pending.retain(|toast| toast.id != id);
        before != self.pending.len()
    }

    /// Drives timers and fades; call from the host's periodic tick.
    ///
    /// Drains cross-thread submissions, advances the entrance fade, starts
    /// the exit fade when the dismissal deadline passes, and closes the
    /// surface (then advances to the next queued request) when the exit fade
    /// completes.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(toast) = self.submissions.try_recv() {
            self.submit(toast, now);
        }

        let finished = match self.active.as_mut() {
            None => return,
            Some(active) => match active.phase {
                Phase::Displaying { dismiss_at } => {
                    if now >= dismiss_at {
                        active.begin_fade(now);
                    } else {
                        let elapsed = now.duration_since(active.shown_at);
                        active.surface.set_opacity(entrance_opacity(elapsed));
                    }
                    false
                }
                Phase::FadingOut { started_at } => {
                    let elapsed = now.duration_since(started_at);
                    if elapsed >= FADE_DURATION {
                        true
                    } else {
                        active.surface.set_opacity(exit_opacity(elapsed));
                        false
                    }
                }
            },
        };

        if finished {
            self.finish_active(now);
        }
    }

    /// Returns whether a toast is currently visible or fading out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the number of queued (not yet displayed) requests.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether there is anything left to display or tear down,
    /// including cross-thread submissions not yet drained from the handle
    /// channel.
    ///
    /// Hosts can use this to gate their tick subscription, the same way an
    /// application only polls while it has notifications on screen.
    #[must_use]
    pub fn has_work(&self) -> bool {
        self.active.is_some() || !self.pending.is_empty() || !self.submissions.is_empty()
    }

    /// Displays the next queued request, skipping any whose surface cannot
    /// be created. Leaves the scheduler idle when the queue runs dry.
    fn advance(&mut self, now: Instant) {
        while let Some(mut toast) = self.pending.pop_front() {
            match self
                .renderer
                .create_surface(toast.anchor, &toast.message, &toast.style)
            {
                Ok(mut surface) => {
                    surface.set_opacity(0.0);
                    surface.show();
                    if let Some(callback) = toast.on_shown.take() {
                        callback();
                    }
                    // Countdown armed at show; see the module docs for the
                    // interaction with the entrance fade.
                    let dismiss_at = now + Duration::from_millis(toast.duration_ms as u64);
                    self.active = Some(Active {
                        surface,
                        toast,
                        shown_at: now,
                        phase: Phase::Displaying { dismiss_at },
                    });
                    return;
                }
                Err(error) => {
                    log::warn!("toast {:?} display skipped: {}", toast.id, error);
                    if let Some(callback) = toast.on_failed.take() {
                        callback(error);
                    }
                }
            }
        }
    }

    fn finish_active(&mut self, now: Instant) {
        if let Some(mut done) = self.active.take() {
            if let Some(callback) = done.toast.on_hidden.take() {
                callback();
            }
            done.surface.close();
            self.advance(now);
        }
    }
}

/// Entrance fade curve: transparent to [`ENTRANCE_PEAK`] over
/// [`FADE_DURATION`], then held.
fn entrance_opacity(elapsed: Duration) -> f32 {
    let progress = (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0);
    ENTRANCE_PEAK * progress
}

/// Exit fade curve: fully opaque to transparent over [`FADE_DURATION`].
fn exit_opacity(elapsed: Duration) -> f32 {
    let progress = (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0);
    1.0 - progress
}
