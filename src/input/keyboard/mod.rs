//! Input and state handling for keyboard events.

mod codes;
mod event;
mod filter;
mod keyboard;

pub use codes::*;
pub use event::*;
pub use filter::*;
pub use keyboard::*;
