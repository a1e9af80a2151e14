//! The composition root which owns and drives every input source.

mod builder;
mod keymap;

pub use builder::*;
pub use keymap::*;

use ::std::collections::BTreeMap;
use ::tracing::{debug, error, warn};

use crate::{
    errors::{Context, Error, Result},
    input::{
        keyboard::{KeyboardInputSource, KEYBOARD_SOURCE_NAME},
        source::missing_capability,
        InputSource, StateSnapshot,
    },
};

/// Per-source snapshots, keyed by source name.
pub type ServiceState = BTreeMap<String, StateSnapshot>;

/// Owns a keyboard source plus any additional sources, and enables, disables
/// and reads them together.
///
/// Construct one with a [`Builder`]; there is no global instance, so
/// independent services can coexist (e.g. one per test).
///
/// ```
/// use ::padmap::host::ManualHost;
/// use ::padmap::input::{InputValue, LogicalInput};
/// use ::padmap::service::Builder;
///
/// let host = ManualHost::shared();
/// let mut service = Builder::new().with_host(host.clone()).build().unwrap();
/// service.enable().unwrap();
///
/// host.press("ArrowUp");
/// assert_eq!(service.keyboard_state()[LogicalInput::DpadUp], InputValue::Pressed);
/// ```
pub struct InputService {
    keyboard: KeyboardInputSource,
    /// Additional sources in registration order.
    sources: Vec<Box<dyn InputSource>>,
}

impl InputService {
    pub(crate) fn from_parts(keyboard: KeyboardInputSource) -> Self {
        Self {
            keyboard,
            sources: Vec::new(),
        }
    }

    /// The keyboard source, e.g. for rebinding keys.
    pub fn keyboard(&self) -> &KeyboardInputSource {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardInputSource {
        &mut self.keyboard
    }

    /// Add another source. Fails with [`NotImplemented`] if the source does
    /// not declare every [`Capability`], or [`InvalidBinding`] if its name is
    /// already taken.
    ///
    /// [`NotImplemented`]: crate::errors::ErrorKind::NotImplemented
    /// [`InvalidBinding`]: crate::errors::ErrorKind::InvalidBinding
    /// [`Capability`]: crate::input::Capability
    pub fn register(&mut self, source: Box<dyn InputSource>) -> Result<()> {
        if let Some(capability) = missing_capability(source.as_ref()) {
            return Err(Error::not_implemented(source.name(), capability))
                .context("Refusing to register incomplete input source");
        }
        if self.source_names().any(|name| name == source.name()) {
            return Err(Error::invalid_binding(format!(
                "an input source named '{}' is already registered",
                source.name()
            )));
        }

        debug!(source = source.name(), "Register input source");
        self.sources.push(source);
        Ok(())
    }

    /// Names of all sources, keyboard first.
    pub fn source_names(&self) -> impl Iterator<Item = &str> + '_ {
        ::std::iter::once(self.keyboard.name()).chain(self.sources.iter().map(|s| s.name()))
    }

    /// Enable every source, keyboard first.
    ///
    /// If a source fails, the sources this call already enabled are disabled
    /// again and the error is returned.
    pub fn enable(&mut self) -> Result<()> {
        let mut enabled = 0;
        let mut failure = None;

        for source in self.sources_mut() {
            match source.enable() {
                Ok(()) => enabled += 1,
                Err(err) => {
                    failure = Some((source.name().to_owned(), err));
                    break;
                }
            }
        }

        let Some((name, err)) = failure else {
            debug!("Enabled input service");
            return Ok(());
        };

        warn!(source = %name, error = %err, "Input source failed to enable, rolling back");
        for source in self.sources_mut().take(enabled) {
            if let Err(rollback_err) = source.disable() {
                error!(source = source.name(), error = %rollback_err);
            }
        }
        Err(err).context(format!("Failed to enable input source '{name}'"))
    }

    /// Disable every source. All sources are attempted; the first error is
    /// returned.
    pub fn disable(&mut self) -> Result<()> {
        let mut first_err = None;

        for source in self.sources_mut() {
            if let Err(err) = source.disable() {
                error!(source = source.name(), error = %err, "Input source failed to disable");
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => {
                debug!("Disabled input service");
                Ok(())
            }
        }
    }

    /// Snapshots of every source, keyed by name.
    pub fn state(&self) -> Result<ServiceState> {
        ::std::iter::once(&self.keyboard as &(dyn InputSource + 'static))
            .chain(self.sources.iter().map(Box::as_ref))
            .map(|source| -> Result<(String, StateSnapshot)> {
                Ok((source.name().to_owned(), source.state()?))
            })
            .collect()
    }

    /// The keyboard's snapshot.
    pub fn keyboard_state(&self) -> StateSnapshot {
        self.keyboard.state().unwrap_or_default()
    }

    fn sources_mut(&mut self) -> impl Iterator<Item = &mut (dyn InputSource + 'static)> + '_ {
        ::std::iter::once(&mut self.keyboard as &mut (dyn InputSource + 'static))
            .chain(self.sources.iter_mut().map(Box::as_mut))
    }
}

impl Default for InputService {
    /// A service with the default keymap and no host attached.
    fn default() -> Self {
        let mut keyboard = KeyboardInputSource::new();
        apply_default_keymap(&mut keyboard).expect("default keymap is valid");
        Self::from_parts(keyboard)
    }
}

impl ::std::fmt::Debug for InputService {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct("InputService")
            .field("keyboard", &self.keyboard)
            .field("sources", &self.source_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Name under which the keyboard's snapshot appears in [`ServiceState`].
pub const KEYBOARD: &str = KEYBOARD_SOURCE_NAME;
