// SPDX-License-Identifier: MPL-2.0
//! Opaque style bundle attached to a toast request.
//!
//! The scheduler never interprets these values; they are handed to the
//! renderer unmodified when the request's surface is created.

use iced::{font, Color, Font};

/// Text flow direction for the toast message.
///
/// Passed through to the renderer; when unsupported, the renderer's default
/// layout applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    /// Left-to-right scripts (default).
    #[default]
    LeftToRight,
    /// Right-to-left scripts (Arabic, Hebrew, ...).
    RightToLeft,
}

/// Presentation parameters for one toast.
///
/// `font` left at `None` means the renderer's default font family applies;
/// the remaining fields carry concrete defaults matching the classic toast
/// look (black card, white text, 15px regular).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Card background color.
    pub background: Color,
    /// Message text color.
    pub text: Color,
    /// Font family override; `None` uses the renderer default.
    pub font: Option<Font>,
    /// Message text size in logical pixels.
    pub font_size: f32,
    /// Font weight applied to the message text.
    pub weight: font::Weight,
    /// Font style (normal/italic/oblique) applied to the message text.
    pub font_style: font::Style,
    /// Text flow direction.
    pub direction: TextDirection,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            text: Color::WHITE,
            font: None,
            font_size: 15.0,
            weight: font::Weight::Normal,
            font_style: font::Style::Normal,
            direction: TextDirection::default(),
        }
    }
}

impl Style {
    /// Resolves the effective font for the message text, folding the weight
    /// and style overrides into the (possibly defaulted) family.
    #[must_use]
    pub fn resolved_font(&self) -> Font {
        Font {
            weight: self.weight,
            style: self.font_style,
            ..self.font.unwrap_or(Font::DEFAULT)
        }
    }
}
