//! Builder object which constructs [`InputService`]s

use ::std::{fmt, sync::Arc};
use ::tap::{Pipe, Tap};

use crate::{
    errors::{Context, Result},
    host::EventHost,
    input::{
        keyboard::{FilterConfig, KeyboardInputSource},
        InputSource,
    },
    service::{apply_default_keymap, InputService},
};

/// A builder pattern object which simplifies the process of creating an
/// [`InputService`].
///
/// ```
/// use ::padmap::host::ManualHost;
/// use ::padmap::service::Builder;
///
/// let service = Builder::new()
///     .with_host(ManualHost::shared())
///     .ignore_on_modifier_chord(false)
///     .build()
///     .expect("Service creation failed");
///
/// assert!(!service.keyboard().ignore_on_modifier_chord());
/// ```
pub struct Builder {
    host: Option<Arc<dyn EventHost>>,
    default_keymap: bool,
    filter: FilterConfig,
    sources: Vec<Box<dyn InputSource>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Construct a new builder. Default values will be used for all properties
    /// until explicitly set.
    pub fn new() -> Self {
        Self {
            host: None,
            default_keymap: true,
            filter: FilterConfig::default(),
            sources: Vec::new(),
        }
    }

    /// Set the host the keyboard subscribes to when the service is enabled.
    ///
    /// Without a host, enabling the service fails with
    /// [`UnsupportedEnvironment`].
    ///
    /// [`UnsupportedEnvironment`]: crate::errors::ErrorKind::UnsupportedEnvironment
    pub fn with_host(self, host: Arc<dyn EventHost>) -> Self {
        Self {
            host: Some(host),
            ..self
        }
    }

    /// Whether the keyboard starts with [`DEFAULT_KEYMAP`] bound.
    ///
    /// Defaults to `true`. When `false` every input starts unbound.
    ///
    /// [`DEFAULT_KEYMAP`]: crate::service::DEFAULT_KEYMAP
    pub fn with_default_keymap(self, default_keymap: bool) -> Self {
        Self {
            default_keymap,
            ..self
        }
    }

    /// Defaults to `true`.
    pub fn ignore_when_focused_on_editable(mut self, ignore: bool) -> Self {
        self.filter.ignore_when_focused_on_editable = ignore;
        self
    }

    /// Defaults to `true`.
    pub fn ignore_on_modifier_chord(mut self, ignore: bool) -> Self {
        self.filter.ignore_on_modifier_chord = ignore;
        self
    }

    /// Register an additional source, after the keyboard and any sources
    /// added before it.
    pub fn with_source(mut self, source: Box<dyn InputSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Gets the currently set host.
    pub fn host(&self) -> Option<&Arc<dyn EventHost>> {
        self.host.as_ref()
    }

    pub fn default_keymap(&self) -> bool {
        self.default_keymap
    }

    /// Gets the currently set keyboard filter.
    pub fn filter(&self) -> FilterConfig {
        self.filter
    }

    /// Build a new [`InputService`] with the properties of the builder. The
    /// service starts disabled.
    ///
    /// Fails if an additional source cannot be registered.
    pub fn build(self) -> Result<InputService> {
        let mut keyboard = self
            .host
            .map_or_else(KeyboardInputSource::new, KeyboardInputSource::with_host)
            .tap_mut(|kbd| kbd.set_filter(self.filter));

        if self.default_keymap {
            apply_default_keymap(&mut keyboard)?;
        }

        let mut service = keyboard.pipe(InputService::from_parts);
        for source in self.sources {
            let name = source.name().to_owned();
            service
                .register(source)
                .context(format!("Failed to build service with source '{name}'"))?;
        }
        Ok(service)
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("has_host", &self.host.is_some())
            .field("default_keymap", &self.default_keymap)
            .field("filter", &self.filter)
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
