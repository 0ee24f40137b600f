//! Character-cell rendering primitives.
//!
//! A [`Screen`] owns the shared image of the terminal. Widgets draw into
//! [`Surface`]s (rectangular cell buffers with their own origin, cursor and
//! attributes) and flush them with [`Screen::refresh`], which stages the
//! touched lines into the virtual screen and pushes changed rows to the
//! [`Backend`].

pub mod backend;
pub mod cell;
pub mod palette;
pub mod screen;
pub mod surface;

pub use backend::{Backend, CrosstermBackend, MemoryBackend};
pub use cell::{Attr, Cell, CellAttributes};
pub use palette::Palette;
pub use screen::Screen;
pub use surface::{AttrScope, BoxChars, Cursor, Surface};
