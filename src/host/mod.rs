//! The environment which delivers raw key events and knows what is focused.
//!
//! In a browser this is `window` plus `document.activeElement`; in a native
//! app it is whatever pumps the platform's keyboard messages. Input sources
//! only see the [`EventHost`] trait.

mod manual;

pub use manual::*;

use ::std::sync::Arc;

use crate::{
    errors::Result,
    input::keyboard::{ElementKind, KeyEvent, KeyEventKind},
};

/// A registered key event callback.
///
/// Hosts identify a listener by the allocation behind the `Arc`, so removing
/// a handler requires passing back a clone of the same `Arc` that was added.
pub type KeyHandler = Arc<dyn Fn(&mut KeyEvent) + Send + Sync>;

/// A source of raw keyboard events.
pub trait EventHost: Send + Sync {
    /// Register `handler` for events of `kind`. Fails with
    /// [`UnsupportedEnvironment`] if the host cannot deliver events.
    ///
    /// [`UnsupportedEnvironment`]: crate::errors::ErrorKind::UnsupportedEnvironment
    fn add_key_listener(&self, kind: KeyEventKind, handler: &KeyHandler) -> Result<()>;

    /// Remove a handler previously passed to [`add_key_listener`]. Removing a
    /// handler that is not registered is not an error.
    ///
    /// [`add_key_listener`]: Self::add_key_listener
    fn remove_key_listener(&self, kind: KeyEventKind, handler: &KeyHandler) -> Result<()>;

    /// The kind of element which currently holds keyboard focus, if any.
    fn focused_element(&self) -> Option<ElementKind>;
}
