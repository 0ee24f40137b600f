use std::path::PathBuf;

use crate::types::{Geometry, WidgetId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the rendering primitives.
#[derive(Debug, thiserror::Error)]
pub enum CursesError {
    #[error("surface {geometry} does not fit a {cols}x{lines} screen")]
    OutOfBounds {
        geometry: Geometry,
        cols: usize,
        lines: usize,
    },

    #[error("cursor position ({row}, {col}) is outside the surface")]
    CursorOutOfRange { row: usize, col: usize },

    #[error("write past the last line of a non-scrolling surface")]
    NoScroll,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum WdgError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Curses(#[from] CursesError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window too small: {cols}x{lines} (needs at least 2x2)")]
    WindowTooSmall { cols: usize, lines: usize },

    #[error("no such widget: {0}")]
    UnknownWidget(WidgetId),

    #[error("{0}")]
    Fatal(String),
}

impl WdgError {
    /// Whether the error leaves a widget without usable surfaces.
    ///
    /// Configuration problems and lookups of destroyed widgets are not fatal;
    /// every rendering failure is.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WdgError::Config(_) | WdgError::UnknownWidget(_))
    }
}
