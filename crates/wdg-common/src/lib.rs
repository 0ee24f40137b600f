pub mod errors;
pub mod types;

pub use errors::{ConfigError, CursesError, WdgError};
pub use types::{Align, Geometry, Key, PairId, TerminalColor, WidgetId};

pub type Result<T> = std::result::Result<T, WdgError>;
