mod attr;
mod border;
mod content;
mod core;
mod cursor;
mod dirty;
mod erase;
mod scroll;


pub use self::attr::AttrScope;
pub use self::border::BoxChars;
pub use self::core::*;
