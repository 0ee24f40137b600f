//! The Dispatcher owns the screen and every widget object, routes lifecycle
//! events and keys to them, and tracks which object has the focus.

mod focus;
mod operations;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;
