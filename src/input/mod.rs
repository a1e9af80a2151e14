//! Logical inputs, the binding table, and the sources that drive them.

mod binding;
pub mod keyboard;
mod logical;
pub(crate) mod source;

pub use binding::*;
pub use logical::*;
pub use source::{Capability, InputSource};
