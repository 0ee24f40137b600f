//! A small widget toolkit for character-cell terminals.
//!
//! The [`Dispatcher`] owns the screen and a set of widget objects. Each
//! object pairs a kind-agnostic [`WidgetCore`] (id, placement, flags,
//! colors) with typed per-kind state in [`WidgetKind`]; lifecycle events
//! reach that state through the [`Widget`] trait.
//!
//! ```rust
//! use wdg::{Dispatcher, Placement, WindowOptions};
//! use wdg_common::{Align, Geometry};
//! use wdg_config::ColorScheme;
//! use wdg_curses::Screen;
//!
//! let mut wdg = Dispatcher::new(Screen::headless(40, 12), &ColorScheme::default());
//! let id = wdg.create_window(
//!     Placement::absolute(Geometry::new(0, 0, 20, 10)),
//!     WindowOptions::default(),
//! );
//! wdg.set_title(id, "Status", Align::Center).unwrap();
//! wdg.focus(id).unwrap();
//! assert!(wdg.screen().row_text(0).contains("Status"));
//! ```

pub mod dispatcher;
pub mod kind;
pub mod placement;
pub mod widget;
pub mod window;

pub use dispatcher::Dispatcher;
pub use kind::WidgetKind;
pub use placement::Placement;
pub use widget::{Context, Flags, Request, Widget, WidgetColors, WidgetCore};
pub use window::{Window, WindowOptions};
