//! An in-memory host driven by explicit calls.

use ::parking_lot::Mutex;
use ::std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use ::tracing::trace;

use crate::{
    errors::{Error, Result},
    host::{EventHost, KeyHandler},
    input::keyboard::{ElementKind, KeyCode, KeyEvent, KeyEventKind, ModifierState},
};

/// A host whose events and focus are supplied by the caller.
///
/// Useful for headless use, replaying recorded input, and unit testing. The
/// host can be marked unavailable to simulate an environment without a key
/// event stream.
///
/// ```
/// use ::padmap::host::ManualHost;
/// use ::padmap::input::keyboard::KeyEventKind;
///
/// let host = ManualHost::new();
/// assert_eq!(host.listener_count(KeyEventKind::Press), 0);
///
/// // No listeners yet, so nothing handles the event.
/// let evt = host.press("KeyA");
/// assert!(!evt.default_prevented());
/// ```
pub struct ManualHost {
    press_listeners: Mutex<Vec<KeyHandler>>,
    release_listeners: Mutex<Vec<KeyHandler>>,
    focused: Mutex<Option<ElementKind>>,
    available: AtomicBool,
}

impl Default for ManualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualHost {
    /// An available host with no listeners and nothing focused.
    pub fn new() -> Self {
        Self {
            press_listeners: Default::default(),
            release_listeners: Default::default(),
            focused: Mutex::new(None),
            available: AtomicBool::new(true),
        }
    }

    /// Convenience constructor returning a shareable host.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Mark the event stream as available or not. While unavailable, listener
    /// registration and removal fail.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Set the element reported by [`EventHost::focused_element`].
    pub fn set_focus(&self, focused: Option<ElementKind>) {
        *self.focused.lock() = focused;
    }

    /// Number of handlers registered for `kind`.
    pub fn listener_count(&self, kind: KeyEventKind) -> usize {
        self.listeners(kind).lock().len()
    }

    /// Dispatch a press of `code` with no modifiers held.
    pub fn press(&self, code: impl Into<KeyCode>) -> KeyEvent {
        self.dispatch(KeyEvent::press(code))
    }

    /// Dispatch a release of `code` with no modifiers held.
    pub fn release(&self, code: impl Into<KeyCode>) -> KeyEvent {
        self.dispatch(KeyEvent::release(code))
    }

    /// Dispatch a press of `code` while `modifiers` are held.
    pub fn press_with(&self, code: impl Into<KeyCode>, modifiers: ModifierState) -> KeyEvent {
        self.dispatch(KeyEvent::press(code).with_modifiers(modifiers))
    }

    /// Deliver `evt` to every listener registered for its kind, in
    /// registration order, and return it so the caller can inspect what the
    /// listeners did to it.
    pub fn dispatch(&self, mut evt: KeyEvent) -> KeyEvent {
        // Clone so listeners may call back into the host.
        let listeners = self.listeners(evt.kind()).lock().clone();
        trace!(code = %evt.code(), kind = %evt.kind(), n = listeners.len(), "Dispatch key event");

        for listener in listeners {
            listener(&mut evt);
        }
        evt
    }

    fn listeners(&self, kind: KeyEventKind) -> &Mutex<Vec<KeyHandler>> {
        match kind {
            KeyEventKind::Press => &self.press_listeners,
            KeyEventKind::Release => &self.release_listeners,
        }
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(Error::unsupported_environment())
        }
    }
}

impl EventHost for ManualHost {
    fn add_key_listener(&self, kind: KeyEventKind, handler: &KeyHandler) -> Result<()> {
        self.ensure_available()?;
        self.listeners(kind).lock().push(Arc::clone(handler));
        Ok(())
    }

    fn remove_key_listener(&self, kind: KeyEventKind, handler: &KeyHandler) -> Result<()> {
        self.ensure_available()?;
        self.listeners(kind)
            .lock()
            .retain(|registered| !Arc::ptr_eq(registered, handler));
        Ok(())
    }

    fn focused_element(&self) -> Option<ElementKind> {
        self.focused.lock().clone()
    }
}
