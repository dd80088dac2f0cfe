// SPDX-License-Identifier: MPL-2.0
//! Core toast request type.
//!
//! A [`Toast`] describes one notification: its message, requested lifetime,
//! styling, anchor window, and lifecycle callbacks. Once submitted to the
//! scheduler it is treated as read-only; the only mutation the scheduler ever
//! performs is normalizing a non-positive duration to [`LENGTH_SHORT`] at
//! submission time.

use crate::error::Error;
use crate::style::{Style, TextDirection};
use iced::{font, window, Color, Font};
use std::any::Any;
use std::fmt;

/// Display the message for a short period of time (milliseconds).
pub const LENGTH_SHORT: i64 = 2000;

/// Display the message for a longer period of time (milliseconds).
pub const LENGTH_LONG: i64 = 3500;

/// Unique identifier for a submitted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle callback invoked on the UI-affine thread.
pub type Callback = Box<dyn FnOnce() + Send>;

/// Failure callback invoked on the UI-affine thread when a request's display
/// is skipped.
pub type FailureCallback = Box<dyn FnOnce(Error) + Send>;

/// One toast notification request.
///
/// Constructing a request with a non-positive duration is valid; the value is
/// only resolved to [`LENGTH_SHORT`] when the request reaches the scheduler.
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) message: String,
    pub(crate) duration_ms: i64,
    pub(crate) style: Style,
    pub(crate) anchor: Option<window::Id>,
    pub(crate) tag: Option<Box<dyn Any + Send>>,
    pub(crate) on_shown: Option<Callback>,
    pub(crate) on_hidden: Option<Callback>,
    pub(crate) on_failed: Option<FailureCallback>,
}

impl Toast {
    /// Creates a request with default styling, no anchor, and the short
    /// default duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            duration_ms: LENGTH_SHORT,
            style: Style::default(),
            anchor: None,
            tag: None,
            on_shown: None,
            on_hidden: None,
            on_failed: None,
        }
    }

    /// Makes a standard text toast anchored to `parent`.
    ///
    /// `duration_ms` is typically [`LENGTH_SHORT`] or [`LENGTH_LONG`]; any
    /// non-positive value falls back to [`LENGTH_SHORT`] at submission.
    pub fn make_text(parent: window::Id, message: impl Into<String>, duration_ms: i64) -> Self {
        Self::new(message).anchor(parent).duration_ms(duration_ms)
    }

    /// Sets the anchor window the toast is positioned above.
    #[must_use]
    pub fn anchor(mut self, parent: window::Id) -> Self {
        self.anchor = Some(parent);
        self
    }

    /// Sets the requested visible lifetime in milliseconds.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the card background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    /// Sets the message text color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.style.text = color;
        self
    }

    /// Sets the font family for the message text.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.style.font = Some(font);
        self
    }

    /// Sets the message text size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.style.font_size = size;
        self
    }

    /// Sets the font weight for the message text.
    #[must_use]
    pub fn weight(mut self, weight: font::Weight) -> Self {
        self.style.weight = weight;
        self
    }

    /// Sets the font style (normal/italic/oblique) for the message text.
    #[must_use]
    pub fn font_style(mut self, font_style: font::Style) -> Self {
        self.style.font_style = font_style;
        self
    }

    /// Sets the text flow direction.
    #[must_use]
    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.style.direction = direction;
        self
    }

    /// Attaches opaque caller data; never interpreted by the scheduler.
    #[must_use]
    pub fn tag(mut self, tag: impl Any + Send) -> Self {
        self.tag = Some(Box::new(tag));
        self
    }

    /// Invoked once, right after the surface becomes visible.
    #[must_use]
    pub fn on_shown(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_shown = Some(Box::new(callback));
        self
    }

    /// Invoked once, after the exit fade completes and before the surface is
    /// closed. Fires strictly after `on_shown` for the same request.
    #[must_use]
    pub fn on_hidden(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_hidden = Some(Box::new(callback));
        self
    }

    /// Invoked once if the request's display is skipped because the renderer
    /// could not produce a surface.
    #[must_use]
    pub fn on_failed(mut self, callback: impl FnOnce(Error) + Send + 'static) -> Self {
        self.on_failed = Some(Box::new(callback));
        self
    }

    /// Returns the request's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the style bundle.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns the attached caller data, if any.
    #[must_use]
    pub fn tag_ref(&self) -> Option<&(dyn Any + Send)> {
        self.tag.as_deref()
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("duration_ms", &self.duration_ms)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new("a");
        let b = Toast::new("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn make_text_sets_anchor_message_and_duration() {
        let parent = window::Id::unique();
        let toast = Toast::make_text(parent, "saved", LENGTH_LONG);
        assert_eq!(toast.message(), "saved");
        assert_eq!(toast.duration_ms, LENGTH_LONG);
        assert_eq!(toast.anchor, Some(parent));
    }

    #[test]
    fn non_positive_duration_is_legal_at_construction() {
        let toast = Toast::new("x").duration_ms(-5);
        assert_eq!(toast.duration_ms, -5);
    }

    #[test]
    fn builder_sets_style_fields() {
        let toast = Toast::new("styled")
            .background(Color::from_rgb(0.1, 0.1, 0.1))
            .text_color(Color::from_rgb(0.9, 0.9, 0.9))
            .font_size(18.0)
            .weight(font::Weight::Bold)
            .font_style(font::Style::Italic)
            .direction(TextDirection::RightToLeft);

        assert_eq!(toast.style().font_size, 18.0);
        assert_eq!(toast.style().weight, font::Weight::Bold);
        assert_eq!(toast.style().font_style, font::Style::Italic);
        assert_eq!(toast.style().direction, TextDirection::RightToLeft);
    }

    #[test]
    fn tag_round_trips_through_any() {
        let toast = Toast::new("tagged").tag(42u32);
        let tag = toast.tag_ref().expect("tag present");
        assert_eq!(tag.downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn debug_output_elides_callbacks() {
        let toast = Toast::new("dbg").on_shown(|| {});
        let rendered = format!("{:?}", toast);
        assert!(rendered.contains("dbg"));
        assert!(rendered.contains(".."));
    }
}
