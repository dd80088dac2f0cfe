// SPDX-License-Identifier: MPL-2.0
//! Renderer capability the scheduler delegates presentation to.
//!
//! The scheduler owns ordering, timing, and fade sequencing; everything
//! visual goes through these two traits. [`crate::overlay`] ships an
//! Iced-backed implementation, and tests substitute recording fakes.

use crate::error::Result;
use crate::style::Style;
use iced::window;

/// Produces display surfaces for toast requests.
pub trait Renderer {
    /// The surface type this renderer materializes.
    type Surface: Surface;

    /// Creates a surface for one toast, sized to its content and anchored
    /// above `anchor` (or the renderer's default window when `None`).
    ///
    /// Errors with [`crate::Error::RendererUnavailable`] when no anchor can
    /// be resolved, or [`crate::Error::SurfaceCreation`] when the surface
    /// itself cannot be built.
    fn create_surface(
        &mut self,
        anchor: Option<window::Id>,
        message: &str,
        style: &Style,
    ) -> Result<Self::Surface>;
}

/// One visible toast surface.
///
/// The scheduler drives the fade transitions by calling [`set_opacity`] from
/// its periodic tick; a surface only needs to reflect the latest value, not
/// animate on its own.
///
/// [`set_opacity`]: Surface::set_opacity
pub trait Surface {
    /// Makes the surface visible.
    fn show(&mut self);

    /// Applies the current fade opacity, in `0.0..=1.0`.
    fn set_opacity(&mut self, opacity: f32);

    /// Closes and destroys the surface.
    fn close(&mut self);
}
