// SPDX-License-Identifier: MPL-2.0
//! Iced-backed toast renderer.
//!
//! [`OverlayRenderer`] implements the [`Renderer`] capability with a shared
//! single-toast slot, and [`view`] turns that slot into an overlay element:
//! a rounded card with centered wrapped text, anchored bottom-center, with
//! the scheduler's current fade opacity applied through color alpha. Hosts
//! stack the overlay on top of the anchor window's regular content (e.g.
//! with `iced::widget::stack`).
//!
//! The slot is `Rc`-shared between the renderer, the surfaces it creates,
//! and any clones kept around for rendering; everything stays on the
//! UI-affine thread.

use crate::error::{Error, Result};
use crate::renderer::{Renderer, Surface};
use crate::style::{Style, TextDirection};
use iced::widget::{container, text, Column, Space};
use iced::{alignment, window, Background, Border, Color, Element, Length, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// Card corner radius.
const CARD_RADIUS: f32 = 20.0;

/// Narrowest the card renders, even for one-word messages.
const CARD_MIN_WIDTH: f32 = 300.0;

/// Widest the card grows before the text wraps.
const CARD_MAX_WIDTH: f32 = 600.0;

/// Padding between the card edge and the message text.
const CARD_PADDING: u16 = 10;

/// Gap between the card and the bottom of the anchor window's work area.
const EDGE_MARGIN: u16 = 10;

/// Snapshot of the toast currently materialized by the overlay.
#[derive(Debug, Clone)]
pub struct VisibleToast {
    message: String,
    style: Style,
    anchor: window::Id,
    opacity: f32,
    shown: bool,
}

impl VisibleToast {
    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the window the toast is anchored to.
    #[must_use]
    pub fn anchor(&self) -> window::Id {
        self.anchor
    }

    /// Returns the current fade opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the request's style bundle, for hosts rendering their own
    /// overlay from [`OverlayRenderer::current`].
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// Renderer that materializes toasts as an in-window overlay.
///
/// Cheap to clone; clones share the same visible-toast slot, so the host can
/// hand one clone to the scheduler and keep another for its view function.
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    slot: Rc<RefCell<Option<VisibleToast>>>,
    default_anchor: Option<window::Id>,
}

impl OverlayRenderer {
    /// Creates a renderer with no default anchor window.
    ///
    /// Requests without an explicit anchor will fail with
    /// [`Error::RendererUnavailable`] until [`set_default_anchor`] is called.
    ///
    /// [`set_default_anchor`]: OverlayRenderer::set_default_anchor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that falls back to `window` for unanchored
    /// requests, mirroring an application-level main window.
    #[must_use]
    pub fn with_default_anchor(window: window::Id) -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            default_anchor: Some(window),
        }
    }

    /// Sets the fallback window for requests without an explicit anchor.
    pub fn set_default_anchor(&mut self, window: window::Id) {
        self.default_anchor = Some(window);
    }

    /// Returns a snapshot of the currently materialized toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<VisibleToast> {
        self.slot.borrow().clone()
    }
}

impl Renderer for OverlayRenderer {
    type Surface = OverlaySurface;

    fn create_surface(
        &mut self,
        anchor: Option<window::Id>,
        message: &str,
        style: &Style,
    ) -> Result<OverlaySurface> {
        let anchor = anchor
            .or(self.default_anchor)
            .ok_or(Error::RendererUnavailable)?;

        *self.slot.borrow_mut() = Some(VisibleToast {
            message: message.to_owned(),
            style: style.clone(),
            anchor,
            opacity: 0.0,
            shown: false,
        });

        Ok(OverlaySurface {
            slot: Rc::clone(&self.slot),
        })
    }
}

/// Surface handle for the toast occupying the overlay slot.
#[derive(Debug)]
pub struct OverlaySurface {
    slot: Rc<RefCell<Option<VisibleToast>>>,
}

impl Surface for OverlaySurface {
    fn show(&mut self) {
        if let Some(visible) = self.slot.borrow_mut().as_mut() {
            visible.shown = true;
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        if let Some(visible) = self.slot.borrow_mut().as_mut() {
            visible.opacity = opacity;
        }
    }

    fn close(&mut self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Renders the overlay for the currently visible toast.
///
/// Returns `None` while nothing is on screen, so hosts can skip the overlay
/// layer entirely. The element produces no messages; `Message` is free.
pub fn view<'a, Message: 'a>(renderer: &OverlayRenderer) -> Option<Element<'a, Message>> {
    let visible = renderer.current()?;
    if !visible.shown {
        return None;
    }

    let style = visible.style.clone();
    let text_color = faded(style.text, visible.opacity);
    let background = faded(style.background, visible.opacity);
    let align = message_alignment(style.direction);

    let message = text(visible.message)
        .size(style.font_size)
        .font(style.resolved_font())
        .shaping(text::Shaping::Advanced)
        .align_x(align)
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    // The zero-height spacer keeps short messages from shrinking the card
    // below its minimum width.
    let content = Column::new()
        .push(Space::new().width(CARD_MIN_WIDTH))
        .push(message)
        .align_x(align);

    let card = container(content)
        .padding(CARD_PADDING)
        .max_width(CARD_MAX_WIDTH)
        .style(move |_theme: &Theme| card_style(background));

    Some(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(EDGE_MARGIN)
            .into(),
    )
}

/// Style for the toast card itself.
fn card_style(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: CARD_RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Message placement inside the card: centered, except right-aligned for
/// right-to-left text so the reading edge hugs the card's start side.
fn message_alignment(direction: TextDirection) -> alignment::Horizontal {
    match direction {
        TextDirection::LeftToRight => alignment::Horizontal::Center,
        TextDirection::RightToLeft => alignment::Horizontal::Right,
    }
}

/// Applies the fade opacity through the color's alpha channel.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}
