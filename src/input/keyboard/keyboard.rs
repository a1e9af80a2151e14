//! An [`InputSource`] driven by physical keyboard events.

use ::parking_lot::{RwLock, RwLockReadGuard};
use ::std::{
    fmt,
    ops::Deref,
    sync::{Arc, Weak},
};
use ::tracing::{debug, trace, warn};

use crate::{
    errors::{Context, Error, Result},
    host::{EventHost, KeyHandler},
    input::{BindingTable, Capability, InputSource, InputValue, LogicalInput, StateSnapshot},
};

use super::{FilterConfig, KeyCode, KeyEvent, KeyEventKind};

/// Source name reported by [`KeyboardInputSource`].
pub const KEYBOARD_SOURCE_NAME: &str = "keyboard";

/// State shared between the source and the handler it registers with the
/// host. One event is applied under one write lock, so readers never see a
/// half-applied event.
#[derive(Debug, Default)]
struct Shared {
    table: BindingTable,
    filter: FilterConfig,
}

/// A live subscription to a host's key events.
struct Registration {
    /// The host the handler was added to. Removal always targets this host,
    /// even if a different host has been attached since.
    host: Arc<dyn EventHost>,
    /// The one handler added for both press and release events.
    handler: KeyHandler,
}

/// Translates physical key presses into logical input state.
///
/// # Lifecycle
///
/// A new source is disabled. [`enable`] subscribes one handler to the host's
/// press and release events; [`disable`] removes that handler again. Both can
/// be called any number of times: enabling an enabled source re-registers
/// rather than adding a second subscription, and disabling a disabled source
/// does nothing. Disabling does not clear recorded values.
///
/// # Filtering
///
/// Before an event reaches the binding table it is checked against the
/// source's [`FilterConfig`]. Events are dropped while an interactive element
/// (text field, button, ...) has focus, and while Alt, Control, Meta or OS is
/// held. Either rule can be switched off. Events which pass have their
/// default host action prevented.
///
/// # Example
///
/// ```
/// use ::padmap::host::ManualHost;
/// use ::padmap::input::{keyboard::KeyboardInputSource, InputSource, InputValue, LogicalInput};
///
/// let host = ManualHost::shared();
/// let mut keyboard = KeyboardInputSource::with_host(host.clone());
/// keyboard.bind(["KeyA", "KeyJ"], LogicalInput::A).unwrap();
/// keyboard.enable().unwrap();
///
/// host.press("KeyJ");
/// assert_eq!(keyboard.state().unwrap()[LogicalInput::A], InputValue::Pressed);
///
/// host.release("KeyJ");
/// assert_eq!(keyboard.state().unwrap()[LogicalInput::A], InputValue::Released);
/// ```
///
/// [`enable`]: InputSource::enable
/// [`disable`]: InputSource::disable
pub struct KeyboardInputSource {
    shared: Arc<RwLock<Shared>>,
    host: Option<Arc<dyn EventHost>>,
    registration: Option<Registration>,
}

impl Default for KeyboardInputSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the enable/disable/query trio for each [`FilterConfig`] rule.
macro_rules! filter_toggles {
    ($($field:ident => $desc:literal),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Drop key events " $desc "."]
                pub fn [<enable_ $field>](&mut self) {
                    self.set_filter_rule(stringify!($field), |filter| filter.$field = true);
                }

                #[doc = "Stop dropping key events " $desc "."]
                pub fn [<disable_ $field>](&mut self) {
                    self.set_filter_rule(stringify!($field), |filter| filter.$field = false);
                }

                #[doc = "Whether key events are dropped " $desc "."]
                pub fn $field(&self) -> bool {
                    self.shared.read().filter.$field
                }
            )*
        }
    };
}

impl KeyboardInputSource {
    /// A disabled source with no host. It must be given a host with
    /// [`set_host`](Self::set_host) before it can be enabled.
    pub fn new() -> Self {
        Self {
            shared: Default::default(),
            host: None,
            registration: None,
        }
    }

    /// A disabled source which will subscribe to `host` when enabled.
    pub fn with_host(host: Arc<dyn EventHost>) -> Self {
        Self {
            shared: Default::default(),
            host: Some(host),
            registration: None,
        }
    }

    /// Attach the host used by the next [`enable`](InputSource::enable). An
    /// existing subscription stays on the previous host until disabled.
    pub fn set_host(&mut self, host: Arc<dyn EventHost>) {
        self.host = Some(host);
    }

    /// Whether the source is currently subscribed to host events.
    pub fn is_enabled(&self) -> bool {
        self.registration.is_some()
    }

    /// Replace the keys bound to `input`. See [`BindingTable::bind`].
    pub fn bind<I, K>(&mut self, codes: I, input: LogicalInput) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyCode>,
    {
        self.shared.write().table.bind(codes, input)
    }

    /// Replace the keys bound to the input named `input`. See
    /// [`BindingTable::bind_named`].
    pub fn bind_named<I, K>(&mut self, codes: I, input: &str) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyCode>,
    {
        self.shared.write().table.bind_named(codes, input)
    }

    /// Read access to the binding table. A read lock is held while the guard
    /// lives, so it must be dropped before further key events can be applied.
    pub fn bindings(&self) -> impl Deref<Target = BindingTable> + '_ {
        RwLockReadGuard::map(self.shared.read(), |shared| &shared.table)
    }

    /// The current value of a single input.
    pub fn value(&self, input: LogicalInput) -> InputValue {
        self.shared.read().table.value(input)
    }

    /// Forget every recorded value, keeping bindings and subscription.
    pub fn reset_state(&mut self) {
        debug!("Reset keyboard input state");
        self.shared.write().table.reset_values();
    }

    pub fn filter(&self) -> FilterConfig {
        self.shared.read().filter
    }

    pub fn set_filter(&mut self, filter: FilterConfig) {
        debug!(?filter, "Set keyboard filter");
        self.shared.write().filter = filter;
    }

    filter_toggles! {
        ignore_when_focused_on_editable => "while an interactive element has focus",
        ignore_on_modifier_chord => "while a modifier key is held",
    }

    fn set_filter_rule(&mut self, rule: &'static str, update: impl FnOnce(&mut FilterConfig)) {
        let mut shared = self.shared.write();
        update(&mut shared.filter);
        debug!(rule, filter = ?shared.filter, "Update keyboard filter");
    }

    fn register(&mut self) -> Result<()> {
        let host = self
            .host
            .clone()
            .ok_or_else(Error::unsupported_environment)
            .context("No host attached to keyboard input source")?;

        let handler = Self::make_handler(Arc::clone(&self.shared), Arc::downgrade(&host));

        host.add_key_listener(KeyEventKind::Press, &handler)
            .context("Failed to listen for key presses")?;
        if let Err(err) = host.add_key_listener(KeyEventKind::Release, &handler) {
            // Leave no half registration behind.
            if let Err(rollback_err) = host.remove_key_listener(KeyEventKind::Press, &handler) {
                warn!(error = %rollback_err, "Failed to remove key press listener");
            }
            return Err(err).context("Failed to listen for key releases");
        }

        self.registration = Some(Registration { host, handler });
        Ok(())
    }

    fn unregister(&mut self) -> Result<()> {
        let Some(registration) = self.registration.take() else {
            return Ok(());
        };

        let Registration { host, handler } = &registration;
        let result = host
            .remove_key_listener(KeyEventKind::Press, handler)
            .and_then(|_| host.remove_key_listener(KeyEventKind::Release, handler))
            .context("Failed to stop listening for key events");

        if result.is_err() {
            // Still subscribed as far as we know.
            self.registration = Some(registration);
        }
        result
    }

    fn make_handler(shared: Arc<RwLock<Shared>>, host: Weak<dyn EventHost>) -> KeyHandler {
        Arc::new(move |evt: &mut KeyEvent| {
            let mut shared = shared.write();

            let focused = || host.upgrade().and_then(|host| host.focused_element());
            if let Some(reason) = shared.filter.check(evt, focused) {
                trace!(code = %evt.code(), kind = %evt.kind(), %reason, "Ignore key event");
                return;
            }

            evt.prevent_default();
            shared.table.apply_event(evt.code(), evt.is_press());
        })
    }
}

impl InputSource for KeyboardInputSource {
    fn name(&self) -> &str {
        KEYBOARD_SOURCE_NAME
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Enable, Capability::Disable, Capability::State]
    }

    fn enable(&mut self) -> Result<()> {
        if self.is_enabled() {
            debug!("Re-register enabled keyboard input source");
            self.unregister()?;
        }
        self.register()?;
        debug!("Enabled keyboard input source");
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.unregister()?;
        debug!("Disabled keyboard input source");
        Ok(())
    }

    fn state(&self) -> Result<StateSnapshot> {
        Ok(self.shared.read().table.snapshot())
    }
}

impl Drop for KeyboardInputSource {
    fn drop(&mut self) {
        if let Err(err) = self.unregister() {
            warn!(error = %err, "Keyboard input source dropped while still subscribed");
        }
    }
}

impl fmt::Debug for KeyboardInputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardInputSource")
            .field("shared", &*self.shared.read())
            .field("has_host", &self.host.is_some())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
