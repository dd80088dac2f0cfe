// SPDX-License-Identifier: MPL-2.0
//! `iced_toasty` shows transient, auto-dismissing toast notifications layered
//! above a host window in applications built with the Iced GUI toolkit.
//!
//! Concurrent requests are serialized into a single visible sequence: strict
//! FIFO, one toast on screen at a time, each with a 500 ms entrance/exit fade
//! and a timed lifetime.
//!
//! # Components
//!
//! - [`toast`] - The [`Toast`] request value: message, duration, styling,
//!   anchor window, lifecycle callbacks
//! - [`scheduler`] - The [`Scheduler`]: FIFO queue, single-active invariant,
//!   show/fade/dismiss state machine
//! - [`renderer`] - The [`Renderer`]/[`Surface`] capability the scheduler
//!   displays through
//! - [`overlay`] - An Iced-backed renderer implementation with a `view`
//!   function for the host's widget tree
//! - [`handle`] - A clonable [`Handle`] for submitting from background
//!   threads
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasty::{OverlayRenderer, Scheduler, Toast, LENGTH_SHORT};
//! use std::time::Instant;
//!
//! // At startup, on the UI thread:
//! let renderer = OverlayRenderer::with_default_anchor(main_window);
//! let mut toasts = Scheduler::new(renderer.clone());
//!
//! // Anywhere in the update logic:
//! toasts.submit(
//!     Toast::make_text(main_window, "Image saved", LENGTH_SHORT),
//!     Instant::now(),
//! );
//!
//! // From a periodic subscription (e.g. iced::time::every(100ms)):
//! toasts.tick(instant);
//!
//! // In the view, stacked over the window content:
//! let overlay = iced_toasty::overlay::view(&renderer);
//! ```
//!
//! # Design Considerations
//!
//! - Non-positive durations normalize to [`LENGTH_SHORT`] (2000 ms) at
//!   submission
//! - The dismissal countdown starts when the surface is shown, so durations
//!   shorter than the entrance fade truncate it
//! - The pending queue is unbounded; toast volume is caller-controlled
//! - Display failures are logged, reported via `on_failed`, and skipped
//!   without disturbing the rest of the queue

#![doc(html_root_url = "https://docs.rs/iced_toasty/0.1.0")]

pub mod error;
pub mod handle;
pub mod overlay;
pub mod renderer;
pub mod scheduler;
pub mod style;
pub mod toast;

pub use error::{Error, Result};
pub use handle::Handle;
pub use overlay::OverlayRenderer;
pub use renderer::{Renderer, Surface};
pub use scheduler::Scheduler;
pub use style::{Style, TextDirection};
pub use toast::{Toast, ToastId, LENGTH_LONG, LENGTH_SHORT};
