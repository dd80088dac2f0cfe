// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures raised while trying to display a toast.
///
/// Errors never escape the scheduler: a request that cannot be displayed is
/// skipped, the failure is logged and reported through the request's
/// `on_failed` callback, and the queue proceeds.
#[derive(Debug, Clone)]
pub enum Error {
    /// No anchor window was supplied and the renderer has no default window
    /// to fall back to.
    RendererUnavailable,

    /// The renderer failed to materialize a surface for the request.
    SurfaceCreation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RendererUnavailable => {
                write!(f, "no anchor window and no default window available")
            }
            Error::SurfaceCreation(e) => write!(f, "surface creation failed: {}", e),
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::SurfaceCreation(msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
